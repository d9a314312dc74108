//! Client-side state for project invites.
//!
//! [`invites::InviteSlice`] caches the invites of the active project and
//! runs the add/update/remove commands against an
//! [`service::InviteService`]. Session events from other parts of the
//! application arrive through [`signals::SignalBus`], and UI code can
//! drive the slice directly or through a [`dispatch::Dispatcher`].

pub mod config;
pub mod dispatch;
pub mod error;
pub mod invites;
pub mod logging;
pub mod mvi;
pub mod service;
pub mod signals;
