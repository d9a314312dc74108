//! Base trait for intents in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - Command lifecycle events (request started, response arrived)
/// - Signals from sibling slices (logout, project cleared)
/// - Explicit UI requests (clear messages)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
