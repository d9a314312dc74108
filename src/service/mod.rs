//! Invite service collaborators.
//!
//! The slice only talks to the [`InviteService`] trait. Two
//! implementations ship with the crate:
//! - [`HttpInviteService`] - REST client for the remote invite API
//! - [`InMemoryInviteService`] - process-local store for tests and demos

mod error;
mod http;
mod memory;

use async_trait::async_trait;

use crate::invites::{Invite, InviteId, ProjectId, Role};

pub use error::ServiceError;
pub use http::HttpInviteService;
pub use memory::InMemoryInviteService;

/// Remote operations on a project's invites.
///
/// Implementations own transport concerns such as timeouts and
/// authentication. Each call resolves exactly once.
#[async_trait]
pub trait InviteService: Send + Sync {
    /// List all pending invites of a project, in server order.
    async fn find(&self, project_id: &ProjectId) -> Result<Vec<Invite>, ServiceError>;

    /// Invite `email` to a project with `role`.
    async fn create(
        &self,
        project_id: &ProjectId,
        email: &str,
        role: Role,
    ) -> Result<Invite, ServiceError>;

    /// Change the role of an existing invite.
    async fn update(
        &self,
        project_id: &ProjectId,
        invite_id: &InviteId,
        role: Role,
    ) -> Result<Invite, ServiceError>;

    /// Withdraw an invite.
    async fn remove(&self, project_id: &ProjectId, invite_id: &InviteId)
        -> Result<(), ServiceError>;
}
