//! Action dispatch for the invite slice.
//!
//! Commands travel from [`Dispatcher`] handles over an mpsc channel to a
//! single [`DispatchServer`] loop, which runs each one against the slice
//! and reports completion through a oneshot channel.

mod client;
mod server;
mod types;

use tokio::sync::mpsc;

pub use client::Dispatcher;
pub use server::DispatchServer;
pub use types::{Completion, DispatchError, InviteCommand};

const DISPATCH_BUFFER: usize = 32;

/// Create a connected dispatcher/server pair.
pub fn channel() -> (Dispatcher, DispatchServer) {
    let (sender, receiver) = mpsc::channel(DISPATCH_BUFFER);
    (Dispatcher::new(sender), DispatchServer::new(receiver))
}
