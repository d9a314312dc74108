use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;

use crate::invites::InviteSlice;

use super::bus::{SessionSignal, SignalBus};

/// Wire an invite slice to the session signals on `bus`.
///
/// The subscription is taken before this returns, so signals published
/// afterwards are never missed. Project selections load invites in a task
/// of their own; a failed load is already recorded in the slice state and
/// is only logged here. The reactor stops when every bus handle is gone.
pub fn spawn_invite_reactor(slice: InviteSlice, bus: &SignalBus) -> JoinHandle<()> {
    let mut signals = bus.subscribe();

    tokio::spawn(async move {
        loop {
            match signals.recv().await {
                Ok(SessionSignal::ProjectSelected(project_id)) => {
                    let slice = slice.clone();
                    tokio::spawn(async move {
                        if let Err(err) = slice.set_current_project(project_id.clone()).await {
                            tracing::warn!(
                                project = %project_id,
                                error = %err,
                                "loading invites for selected project failed"
                            );
                        }
                    });
                }
                Ok(SessionSignal::ProjectCleared) => slice.clear_current_project(),
                Ok(SessionSignal::LoggedOut) => slice.logout(),
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "invite reactor lagged behind session signals");
                }
                Err(RecvError::Closed) => break,
            }
        }
        tracing::debug!("invite reactor stopped");
    })
}
