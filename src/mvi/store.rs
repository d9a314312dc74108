//! Observable state container driven by a reducer.

use std::marker::PhantomData;

use tokio::sync::watch;

use super::reducer::Reducer;

/// Holds the current state of one slice and applies intents to it.
///
/// Each `dispatch` runs the reducer exactly once while holding the
/// channel's write lock, so mutations never interleave. Observers get a
/// `watch::Receiver` and are notified after every dispatch.
pub struct Store<R: Reducer> {
    state: watch::Sender<R::State>,
    _reducer: PhantomData<fn() -> R>,
}

impl<R: Reducer> Store<R> {
    /// Create a store holding `R::State::default()`.
    pub fn new() -> Self {
        Self::with_state(R::State::default())
    }

    /// Create a store holding the given initial state.
    pub fn with_state(initial: R::State) -> Self {
        let (state, _) = watch::channel(initial);
        Self {
            state,
            _reducer: PhantomData,
        }
    }

    /// Apply an intent to the current state.
    pub fn dispatch(&self, intent: R::Intent) {
        self.state.send_modify(|state| {
            *state = R::reduce(std::mem::take(state), intent);
        });
    }

    /// Get a clone of the current state.
    pub fn snapshot(&self) -> R::State {
        self.state.borrow().clone()
    }

    /// Read from the current state without cloning all of it.
    pub fn with<T>(&self, read: impl FnOnce(&R::State) -> T) -> T {
        read(&self.state.borrow())
    }

    /// Subscribe to state changes.
    ///
    /// The receiver starts out having seen the current state.
    pub fn subscribe(&self) -> watch::Receiver<R::State> {
        self.state.subscribe()
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new()
    }
}
