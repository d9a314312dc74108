use tokio::sync::oneshot;

use crate::invites::{InviteError, InviteId, ProjectId, Role};

/// Completion of one dispatched command.
pub type Completion = oneshot::Sender<Result<(), InviteError>>;

#[derive(Debug)]
pub enum DispatchError {
    /// The dispatch loop is gone or dropped the command.
    Disconnected,
    /// The command ran and failed.
    Command(InviteError),
}

impl std::fmt::Display for DispatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DispatchError::Disconnected => write!(f, "dispatch channel disconnected"),
            DispatchError::Command(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for DispatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DispatchError::Disconnected => None,
            DispatchError::Command(err) => Some(err),
        }
    }
}

pub enum InviteCommand {
    SetCurrentProject {
        project_id: ProjectId,
        respond_to: Completion,
    },
    Logout {
        respond_to: Completion,
    },
    ClearCurrentProject {
        respond_to: Completion,
    },
    ClearMessages {
        respond_to: Completion,
    },
    GetProjectInvites {
        project_id: ProjectId,
        respond_to: Completion,
    },
    AddProjectInvite {
        project_id: ProjectId,
        email: String,
        role: Role,
        respond_to: Completion,
    },
    UpdateProjectInvite {
        project_id: ProjectId,
        invite_id: InviteId,
        role: Role,
        respond_to: Completion,
    },
    RemoveProjectInvite {
        project_id: ProjectId,
        invite_id: InviteId,
        respond_to: Completion,
    },
}

impl InviteCommand {
    pub fn name(&self) -> &'static str {
        match self {
            InviteCommand::SetCurrentProject { .. } => "SetCurrentProject",
            InviteCommand::Logout { .. } => "Logout",
            InviteCommand::ClearCurrentProject { .. } => "ClearCurrentProject",
            InviteCommand::ClearMessages { .. } => "ClearMessages",
            InviteCommand::GetProjectInvites { .. } => "GetProjectInvites",
            InviteCommand::AddProjectInvite { .. } => "AddProjectInvite",
            InviteCommand::UpdateProjectInvite { .. } => "UpdateProjectInvite",
            InviteCommand::RemoveProjectInvite { .. } => "RemoveProjectInvite",
        }
    }
}
