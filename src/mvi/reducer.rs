use super::intent::Intent;
use super::state::SliceState;

/// The single place a slice's state changes.
///
/// `reduce` consumes the previous state and returns the next one. It does
/// no I/O; anything asynchronous happens before an intent is built.
pub trait Reducer {
    type State: SliceState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
