//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_server;

use async_trait::async_trait;
use parking_lot::Mutex;
use project_invites::invites::{Invite, InviteId, ProjectId, Role};
use project_invites::service::{InviteService, ServiceError};
use std::collections::VecDeque;
use std::time::{Duration, Instant};
use tokio::sync::oneshot;

pub fn invite(id: &str, email: &str, role: Role) -> Invite {
    Invite {
        id: id.into(),
        email: email.to_string(),
        role,
        project_id: "p1".into(),
    }
}

/// Three member invites `a`, `b`, `c` in project `p1`.
pub fn abc() -> Vec<Invite> {
    vec![
        invite("a", "a@example.com", Role::Member),
        invite("b", "b@example.com", Role::Member),
        invite("c", "c@example.com", Role::Member),
    ]
}

pub fn ids(invites: &[Invite]) -> Vec<String> {
    invites.iter().map(|i| i.id.to_string()).collect()
}

/// Poll `condition` until it holds, failing the test after two seconds.
pub async fn wait_until(mut condition: impl FnMut() -> bool) {
    let start = Instant::now();
    while !condition() {
        assert!(
            start.elapsed() < Duration::from_secs(2),
            "condition not met in time"
        );
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
}

// -- Scripted service ---------------------------------------------------------

/// What the scripted service answers with.
#[derive(Debug)]
pub enum Reply {
    Invites(Vec<Invite>),
    Invite(Invite),
    Done,
    Fail(ServiceError),
}

/// A call the scripted service received.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Find(ProjectId),
    Create(ProjectId, String, Role),
    Update(ProjectId, InviteId, Role),
    Remove(ProjectId, InviteId),
}

struct Scripted {
    reply: Reply,
    gate: Option<oneshot::Receiver<()>>,
}

/// Invite service answering from a queue of scripted replies.
///
/// Replies are handed out in the order calls arrive. A gated reply holds
/// its call suspended until the test fires the returned sender, which lets
/// tests choose the order in which overlapping requests settle.
#[derive(Default)]
pub struct ScriptedService {
    replies: Mutex<VecDeque<Scripted>>,
    calls: Mutex<Vec<Call>>,
}

impl ScriptedService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, reply: Reply) {
        self.replies.lock().push_back(Scripted { reply, gate: None });
    }

    pub fn push_gated(&self, reply: Reply) -> oneshot::Sender<()> {
        let (release, gate) = oneshot::channel();
        self.replies.lock().push_back(Scripted {
            reply,
            gate: Some(gate),
        });
        release
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    async fn answer(&self, call: Call) -> Reply {
        let scripted = {
            self.calls.lock().push(call);
            self.replies.lock().pop_front()
        };
        let Some(Scripted { reply, gate }) = scripted else {
            return Reply::Fail(ServiceError::Status {
                status: 500,
                message: "unscripted call".to_string(),
            });
        };
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        reply
    }
}

fn unexpected(reply: Reply) -> ServiceError {
    match reply {
        Reply::Fail(err) => err,
        other => ServiceError::Decode(format!("unexpected scripted reply: {:?}", other)),
    }
}

#[async_trait]
impl InviteService for ScriptedService {
    async fn find(&self, project_id: &ProjectId) -> Result<Vec<Invite>, ServiceError> {
        match self.answer(Call::Find(project_id.clone())).await {
            Reply::Invites(invites) => Ok(invites),
            other => Err(unexpected(other)),
        }
    }

    async fn create(
        &self,
        project_id: &ProjectId,
        email: &str,
        role: Role,
    ) -> Result<Invite, ServiceError> {
        let call = Call::Create(project_id.clone(), email.to_string(), role);
        match self.answer(call).await {
            Reply::Invite(invite) => Ok(invite),
            other => Err(unexpected(other)),
        }
    }

    async fn update(
        &self,
        project_id: &ProjectId,
        invite_id: &InviteId,
        role: Role,
    ) -> Result<Invite, ServiceError> {
        let call = Call::Update(project_id.clone(), invite_id.clone(), role);
        match self.answer(call).await {
            Reply::Invite(invite) => Ok(invite),
            other => Err(unexpected(other)),
        }
    }

    async fn remove(
        &self,
        project_id: &ProjectId,
        invite_id: &InviteId,
    ) -> Result<(), ServiceError> {
        let call = Call::Remove(project_id.clone(), invite_id.clone());
        match self.answer(call).await {
            Reply::Done => Ok(()),
            other => Err(unexpected(other)),
        }
    }
}
