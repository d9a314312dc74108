//! Reducer for the invite slice.

use crate::mvi::Reducer;

use super::intent::InviteIntent;
use super::state::InviteState;

pub struct InviteReducer;

impl Reducer for InviteReducer {
    type State = InviteState;
    type Intent = InviteIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            InviteIntent::RequestStarted => InviteState {
                is_loading: true,
                ..state
            },

            InviteIntent::RequestAbandoned => InviteState {
                is_loading: false,
                ..state
            },

            InviteIntent::Loaded { invites } => InviteState {
                invites,
                is_loading: false,
                ..state
            },

            InviteIntent::Added { invite } => {
                let mut invites = Vec::with_capacity(state.invites.len() + 1);
                invites.push(invite);
                invites.extend(state.invites);
                InviteState {
                    invites,
                    is_loading: false,
                    ..state
                }
            }

            InviteIntent::Updated { invite } => {
                let mut invites = state.invites;
                // Unknown ids are ignored rather than inserted
                if let Some(slot) = invites.iter_mut().find(|i| i.id == invite.id) {
                    *slot = invite;
                }
                InviteState {
                    invites,
                    is_loading: false,
                    ..state
                }
            }

            InviteIntent::Removed { invite_id } => {
                let mut invites = state.invites;
                invites.retain(|i| i.id != invite_id);
                InviteState {
                    invites,
                    is_loading: false,
                    ..state
                }
            }

            InviteIntent::Failed { message } => InviteState {
                error_message: Some(message),
                is_loading: false,
                ..state
            },

            InviteIntent::ClearMessages => InviteState {
                error_message: None,
                ..state
            },

            InviteIntent::Reset => InviteState::default(),
        }
    }
}
