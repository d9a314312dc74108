//! Model-View-Intent (MVI) primitives for application state slices.
//!
//! # Architecture
//!
//! ```text
//! Command ──→ Intent ──→ Reducer ──→ State ──→ Observers
//!    ↑                                           │
//!    └───────────────────────────────────────────┘
//! ```
//!
//! - **State**: Plain-data snapshot of a slice
//! - **Intent**: A single state transition request
//! - **Reducer**: Pure function that transforms state based on intents
//! - **Store**: Owns the current state and applies intents to it

mod intent;
mod reducer;
mod state;
mod store;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::SliceState;
pub use store::Store;
