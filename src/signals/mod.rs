//! Cross-slice session signals.
//!
//! Sibling slices (project selection, authentication) publish
//! [`SessionSignal`]s on a shared [`SignalBus`]. Interested slices
//! subscribe explicitly instead of intercepting each other's actions.

mod bus;
mod reactor;

pub use bus::{SessionSignal, SignalBus};
pub use reactor::spawn_invite_reactor;
