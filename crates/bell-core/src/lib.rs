//! Domain types and state for the termbell notification tray.
//!
//! Provides the notification model and wire shape, the bounded in-memory
//! notification store, timestamp formatting, CLI settings with persisted
//! last-used parameters, and the crate-wide error type.

pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;
pub mod store;
