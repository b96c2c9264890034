//! Runtime layer for termbell.
//!
//! Owns the single live push-channel connection, translates inbound wire
//! events into domain notifications, and forwards them to the UI event loop
//! over an `mpsc` channel.

pub mod listener;
pub mod reconnect;

pub use bell_core as core;
