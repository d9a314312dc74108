use tokio::sync::mpsc;

use crate::invites::InviteSlice;

use super::types::{Completion, InviteCommand};

/// Receiving end of the dispatch channel.
pub struct DispatchServer {
    pub(crate) receiver: mpsc::Receiver<InviteCommand>,
}

impl DispatchServer {
    pub fn new(receiver: mpsc::Receiver<InviteCommand>) -> Self {
        Self { receiver }
    }

    /// Execute commands against `slice` until every `Dispatcher` is dropped.
    ///
    /// Each command runs in its own task so a slow request never holds up
    /// the ones behind it. Nothing is coalesced or cancelled.
    pub async fn run(mut self, slice: InviteSlice) {
        while let Some(command) = self.receiver.recv().await {
            let name = command.name();
            tracing::trace!(command = name, "dispatching");
            let slice = slice.clone();
            tokio::spawn(async move {
                execute(&slice, command).await;
            });
        }
        tracing::debug!("dispatch loop stopped");
    }
}

async fn execute(slice: &InviteSlice, command: InviteCommand) {
    match command {
        InviteCommand::SetCurrentProject {
            project_id,
            respond_to,
        } => {
            let result = slice.set_current_project(project_id).await;
            complete(respond_to, result, "SetCurrentProject");
        }
        InviteCommand::Logout { respond_to } => {
            slice.logout();
            complete(respond_to, Ok(()), "Logout");
        }
        InviteCommand::ClearCurrentProject { respond_to } => {
            slice.clear_current_project();
            complete(respond_to, Ok(()), "ClearCurrentProject");
        }
        InviteCommand::ClearMessages { respond_to } => {
            slice.clear_messages();
            complete(respond_to, Ok(()), "ClearMessages");
        }
        InviteCommand::GetProjectInvites {
            project_id,
            respond_to,
        } => {
            let result = slice.get_project_invites(&project_id).await;
            complete(respond_to, result, "GetProjectInvites");
        }
        InviteCommand::AddProjectInvite {
            project_id,
            email,
            role,
            respond_to,
        } => {
            let result = slice.add_project_invite(&project_id, &email, role).await;
            complete(respond_to, result, "AddProjectInvite");
        }
        InviteCommand::UpdateProjectInvite {
            project_id,
            invite_id,
            role,
            respond_to,
        } => {
            let result = slice
                .update_project_invite(&project_id, &invite_id, role)
                .await;
            complete(respond_to, result, "UpdateProjectInvite");
        }
        InviteCommand::RemoveProjectInvite {
            project_id,
            invite_id,
            respond_to,
        } => {
            let result = slice.remove_project_invite(&project_id, &invite_id).await;
            complete(respond_to, result, "RemoveProjectInvite");
        }
    }
}

fn complete(
    respond_to: Completion,
    result: Result<(), crate::invites::InviteError>,
    command: &'static str,
) {
    if respond_to.send(result).is_err() {
        tracing::trace!(command, "completion dropped (caller gone)");
    }
}
