use crate::mvi::SliceState;

use super::model::Invite;

/// Cached view of one project's invites as last confirmed by the service.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InviteState {
    /// Invites in server order; added invites go to the front.
    pub invites: Vec<Invite>,
    /// True while a request started by a command is outstanding.
    pub is_loading: bool,
    /// Text of the most recent failure, if not cleared since.
    pub error_message: Option<String>,
}

impl SliceState for InviteState {}
