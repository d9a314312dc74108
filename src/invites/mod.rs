//! Project invite state slice.
//!
//! Caches the invites of the active project and tracks request status
//! for the UI.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `model.rs` - Invite records and identifiers
//! - `state.rs` - Slice state record
//! - `intent.rs` - State transitions
//! - `reducer.rs` - Pure transition function
//! - `slice.rs` - Async command handlers that talk to the invite service

mod error;
mod intent;
mod model;
mod reducer;
mod slice;
mod state;

pub use error::InviteError;
pub use intent::InviteIntent;
pub use model::{EmptyRole, Invite, InviteId, ProjectId, Role};
pub use reducer::InviteReducer;
pub use slice::InviteSlice;
pub use state::InviteState;
