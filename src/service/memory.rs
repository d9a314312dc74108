//! Process-local invite service.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;
use uuid::Uuid;

use crate::invites::{Invite, InviteId, ProjectId, Role};

use super::error::ServiceError;
use super::InviteService;

/// Invite service that keeps everything in memory.
///
/// New invites get a random UUID and go to the front of the project's
/// list, matching what the remote service returns on the next fetch.
#[derive(Default)]
pub struct InMemoryInviteService {
    inner: Mutex<MemoryInner>,
}

#[derive(Default)]
struct MemoryInner {
    invites: HashMap<ProjectId, Vec<Invite>>,
    fail_next: Option<ServiceError>,
}

impl InMemoryInviteService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a project with existing invites.
    pub fn with_invites(self, project_id: impl Into<ProjectId>, invites: Vec<Invite>) -> Self {
        self.inner.lock().invites.insert(project_id.into(), invites);
        self
    }

    /// Make the next call of any kind fail with `error`.
    pub fn fail_next(&self, error: ServiceError) {
        self.inner.lock().fail_next = Some(error);
    }

    /// Current invites of a project as stored by the service.
    pub fn invites_for(&self, project_id: &ProjectId) -> Vec<Invite> {
        self.inner
            .lock()
            .invites
            .get(project_id)
            .cloned()
            .unwrap_or_default()
    }
}

impl MemoryInner {
    fn check_failure(&mut self) -> Result<(), ServiceError> {
        match self.fail_next.take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

fn invite_not_found(invite_id: &InviteId) -> ServiceError {
    ServiceError::not_found(format!("Invite '{}' not found", invite_id))
}

#[async_trait]
impl InviteService for InMemoryInviteService {
    async fn find(&self, project_id: &ProjectId) -> Result<Vec<Invite>, ServiceError> {
        let mut inner = self.inner.lock();
        inner.check_failure()?;
        Ok(inner.invites.get(project_id).cloned().unwrap_or_default())
    }

    async fn create(
        &self,
        project_id: &ProjectId,
        email: &str,
        role: Role,
    ) -> Result<Invite, ServiceError> {
        let mut inner = self.inner.lock();
        inner.check_failure()?;

        let invites = inner.invites.entry(project_id.clone()).or_default();
        if invites.iter().any(|i| i.email.eq_ignore_ascii_case(email)) {
            return Err(ServiceError::Status {
                status: 409,
                message: format!("'{}' is already invited", email),
            });
        }

        let invite = Invite {
            id: InviteId::new(Uuid::new_v4().to_string()),
            email: email.to_string(),
            role,
            project_id: project_id.clone(),
        };
        invites.insert(0, invite.clone());
        Ok(invite)
    }

    async fn update(
        &self,
        project_id: &ProjectId,
        invite_id: &InviteId,
        role: Role,
    ) -> Result<Invite, ServiceError> {
        let mut inner = self.inner.lock();
        inner.check_failure()?;

        let invite = inner
            .invites
            .get_mut(project_id)
            .and_then(|invites| invites.iter_mut().find(|i| &i.id == invite_id))
            .ok_or_else(|| invite_not_found(invite_id))?;
        invite.role = role;
        Ok(invite.clone())
    }

    async fn remove(
        &self,
        project_id: &ProjectId,
        invite_id: &InviteId,
    ) -> Result<(), ServiceError> {
        let mut inner = self.inner.lock();
        inner.check_failure()?;

        let invites = inner
            .invites
            .get_mut(project_id)
            .ok_or_else(|| invite_not_found(invite_id))?;
        let before = invites.len();
        invites.retain(|i| &i.id != invite_id);
        if invites.len() == before {
            return Err(invite_not_found(invite_id));
        }
        Ok(())
    }
}
