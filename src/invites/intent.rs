//! Intents for the invite slice.

use crate::mvi::Intent;

use super::model::{Invite, InviteId};

/// State transitions of the invite slice.
#[derive(Debug, Clone)]
pub enum InviteIntent {
    /// A command sent a request to the invite service.
    RequestStarted,

    /// A request was dropped before the service answered.
    RequestAbandoned,

    /// The invite list for a project arrived.
    Loaded { invites: Vec<Invite> },

    /// The service created an invite.
    Added { invite: Invite },

    /// The service changed an invite's role.
    Updated { invite: Invite },

    /// The service deleted an invite.
    Removed { invite_id: InviteId },

    /// A request failed.
    Failed { message: String },

    /// Dismiss the current error message.
    ClearMessages,

    /// Back to the empty initial state (logout, project cleared).
    Reset,
}

impl Intent for InviteIntent {}
