use tokio::sync::broadcast;

use crate::invites::ProjectId;

const DEFAULT_CAPACITY: usize = 64;

/// Session-wide events other slices react to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionSignal {
    /// The user switched to a project.
    ProjectSelected(ProjectId),
    /// No project is active any more.
    ProjectCleared,
    /// The user logged out.
    LoggedOut,
}

/// Typed broadcast bus for [`SessionSignal`]s.
#[derive(Clone)]
pub struct SignalBus {
    sender: broadcast::Sender<SessionSignal>,
}

impl SignalBus {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(DEFAULT_CAPACITY);
        Self { sender }
    }

    /// Publish a signal to all current subscribers.
    ///
    /// Returns how many subscribers will see it. Zero is not an error: a
    /// signal with nobody listening is simply dropped.
    pub fn publish(&self, signal: SessionSignal) -> usize {
        match self.sender.send(signal) {
            Ok(receivers) => receivers,
            Err(broadcast::error::SendError(signal)) => {
                tracing::trace!(?signal, "signal dropped (no subscribers)");
                0
            }
        }
    }

    /// Receive every signal published from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionSignal> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for SignalBus {
    fn default() -> Self {
        Self::new()
    }
}
