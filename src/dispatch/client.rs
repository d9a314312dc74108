use tokio::sync::{mpsc, oneshot};

use crate::invites::{InviteId, ProjectId, Role};

use super::types::{Completion, DispatchError, InviteCommand};

/// Handle the UI uses to dispatch invite commands.
///
/// Every method resolves once the command has settled, which lets callers
/// chain follow-up work or just drop the future's result.
#[derive(Clone)]
pub struct Dispatcher {
    sender: mpsc::Sender<InviteCommand>,
}

impl Dispatcher {
    pub fn new(sender: mpsc::Sender<InviteCommand>) -> Self {
        Self { sender }
    }

    pub async fn set_current_project(&self, project_id: ProjectId) -> Result<(), DispatchError> {
        self.send(|respond_to| InviteCommand::SetCurrentProject {
            project_id,
            respond_to,
        })
        .await
    }

    pub async fn logout(&self) -> Result<(), DispatchError> {
        self.send(|respond_to| InviteCommand::Logout { respond_to })
            .await
    }

    pub async fn clear_current_project(&self) -> Result<(), DispatchError> {
        self.send(|respond_to| InviteCommand::ClearCurrentProject { respond_to })
            .await
    }

    pub async fn clear_messages(&self) -> Result<(), DispatchError> {
        self.send(|respond_to| InviteCommand::ClearMessages { respond_to })
            .await
    }

    pub async fn get_project_invites(&self, project_id: ProjectId) -> Result<(), DispatchError> {
        self.send(|respond_to| InviteCommand::GetProjectInvites {
            project_id,
            respond_to,
        })
        .await
    }

    pub async fn add_project_invite(
        &self,
        project_id: ProjectId,
        email: String,
        role: Role,
    ) -> Result<(), DispatchError> {
        self.send(|respond_to| InviteCommand::AddProjectInvite {
            project_id,
            email,
            role,
            respond_to,
        })
        .await
    }

    pub async fn update_project_invite(
        &self,
        project_id: ProjectId,
        invite_id: InviteId,
        role: Role,
    ) -> Result<(), DispatchError> {
        self.send(|respond_to| InviteCommand::UpdateProjectInvite {
            project_id,
            invite_id,
            role,
            respond_to,
        })
        .await
    }

    pub async fn remove_project_invite(
        &self,
        project_id: ProjectId,
        invite_id: InviteId,
    ) -> Result<(), DispatchError> {
        self.send(|respond_to| InviteCommand::RemoveProjectInvite {
            project_id,
            invite_id,
            respond_to,
        })
        .await
    }

    async fn send(
        &self,
        command: impl FnOnce(Completion) -> InviteCommand,
    ) -> Result<(), DispatchError> {
        let (respond_to, receiver) = oneshot::channel();
        self.sender
            .send(command(respond_to))
            .await
            .map_err(|_| DispatchError::Disconnected)?;

        receiver
            .await
            .map_err(|_| DispatchError::Disconnected)?
            .map_err(DispatchError::Command)
    }
}
