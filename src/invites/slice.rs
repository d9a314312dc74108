//! Command handlers of the invite slice.

use std::future::Future;
use std::sync::Arc;

use scopeguard::ScopeGuard;
use tokio::sync::watch;

use crate::error::{context, DefaultErrorFormatter, ErrorFormatter};
use crate::mvi::Store;
use crate::service::{InviteService, ServiceError};

use super::error::InviteError;
use super::intent::InviteIntent;
use super::model::{Invite, InviteId, ProjectId, Role};
use super::reducer::InviteReducer;
use super::state::InviteState;

/// Invite state of the current session plus the commands that change it.
///
/// Cloning is cheap and every clone shares the same state. Commands do
/// not coordinate with each other: overlapping requests each set
/// `is_loading` when they start and clear it when they settle, and their
/// results are applied in the order the responses arrive.
#[derive(Clone)]
pub struct InviteSlice {
    inner: Arc<SliceInner>,
}

struct SliceInner {
    store: Store<InviteReducer>,
    service: Arc<dyn InviteService>,
    formatter: Arc<dyn ErrorFormatter>,
}

impl InviteSlice {
    pub fn new(service: Arc<dyn InviteService>) -> Self {
        Self::with_formatter(service, Arc::new(DefaultErrorFormatter))
    }

    pub fn with_formatter(
        service: Arc<dyn InviteService>,
        formatter: Arc<dyn ErrorFormatter>,
    ) -> Self {
        Self {
            inner: Arc::new(SliceInner {
                store: Store::new(),
                service,
                formatter,
            }),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.inner.store.with(|state| state.is_loading)
    }

    pub fn invites(&self) -> Vec<Invite> {
        self.inner.store.with(|state| state.invites.clone())
    }

    pub fn error_message(&self) -> Option<String> {
        self.inner.store.with(|state| state.error_message.clone())
    }

    /// Full snapshot of the current state.
    pub fn state(&self) -> InviteState {
        self.inner.store.snapshot()
    }

    /// Observe every state change.
    pub fn subscribe(&self) -> watch::Receiver<InviteState> {
        self.inner.store.subscribe()
    }

    /// React to a newly selected project by loading its invites.
    pub async fn set_current_project(&self, project_id: ProjectId) -> Result<(), InviteError> {
        tracing::debug!(project = %project_id, "project selected");
        self.get_project_invites(&project_id).await
    }

    pub fn logout(&self) {
        tracing::debug!("logout: resetting invite state");
        self.inner.store.dispatch(InviteIntent::Reset);
    }

    pub fn clear_current_project(&self) {
        tracing::debug!("project cleared: resetting invite state");
        self.inner.store.dispatch(InviteIntent::Reset);
    }

    pub fn clear_messages(&self) {
        self.inner.store.dispatch(InviteIntent::ClearMessages);
    }

    /// Replace the cached list with the project's invites.
    pub async fn get_project_invites(&self, project_id: &ProjectId) -> Result<(), InviteError> {
        tracing::debug!(project = %project_id, "fetching invites");
        self.request(
            context::GET_INVITES,
            self.inner.service.find(project_id),
            |invites| {
                tracing::info!(project = %project_id, count = invites.len(), "invites loaded");
                InviteIntent::Loaded { invites }
            },
        )
        .await
    }

    /// Invite `email` and put the new invite at the front of the list.
    pub async fn add_project_invite(
        &self,
        project_id: &ProjectId,
        email: &str,
        role: Role,
    ) -> Result<(), InviteError> {
        tracing::debug!(project = %project_id, %role, "adding invite");
        self.request(
            context::ADD_INVITE,
            self.inner.service.create(project_id, email, role),
            |invite| {
                tracing::info!(project = %project_id, invite = %invite.id, "invite added");
                InviteIntent::Added { invite }
            },
        )
        .await
    }

    /// Change an invite's role and swap in the server's copy.
    pub async fn update_project_invite(
        &self,
        project_id: &ProjectId,
        invite_id: &InviteId,
        role: Role,
    ) -> Result<(), InviteError> {
        tracing::debug!(project = %project_id, invite = %invite_id, %role, "updating invite");
        self.request(
            context::UPDATE_INVITE,
            self.inner.service.update(project_id, invite_id, role),
            |invite| {
                tracing::info!(project = %project_id, invite = %invite.id, "invite updated");
                InviteIntent::Updated { invite }
            },
        )
        .await
    }

    /// Withdraw an invite and drop it from the list.
    pub async fn remove_project_invite(
        &self,
        project_id: &ProjectId,
        invite_id: &InviteId,
    ) -> Result<(), InviteError> {
        tracing::debug!(project = %project_id, invite = %invite_id, "removing invite");
        self.request(
            context::REMOVE_INVITE,
            self.inner.service.remove(project_id, invite_id),
            |()| {
                tracing::info!(project = %project_id, invite = %invite_id, "invite removed");
                InviteIntent::Removed {
                    invite_id: invite_id.clone(),
                }
            },
        )
        .await
    }

    /// Run one service request through the idle → loading → idle cycle.
    ///
    /// On failure the formatted message is stored and returned. If the
    /// returned future is dropped mid-request, `is_loading` is cleared and
    /// the cached list is left as it was.
    async fn request<T>(
        &self,
        context: &'static str,
        call: impl Future<Output = Result<T, ServiceError>>,
        on_success: impl FnOnce(T) -> InviteIntent,
    ) -> Result<(), InviteError> {
        let store = &self.inner.store;
        store.dispatch(InviteIntent::RequestStarted);

        let pending = scopeguard::guard((), |()| {
            tracing::debug!(context, "invite request abandoned");
            store.dispatch(InviteIntent::RequestAbandoned);
        });
        let outcome = call.await;
        ScopeGuard::into_inner(pending);

        match outcome {
            Ok(value) => {
                store.dispatch(on_success(value));
                Ok(())
            }
            Err(source) => {
                let message = self.inner.formatter.format(&source, Some(context));
                tracing::warn!(context, error = %source, "invite request failed");
                store.dispatch(InviteIntent::Failed {
                    message: message.clone(),
                });
                Err(InviteError::RequestFailed { message, source })
            }
        }
    }
}
