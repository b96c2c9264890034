//! Terminal UI layer for termbell.
//!
//! Provides themes, the bell/badge/status indicator component, the tray
//! state container, the dropdown menu state machine, and the main
//! application event loop built on top of [`ratatui`].

pub mod app;
pub mod components;
pub mod menu;
pub mod state;
pub mod themes;

pub use bell_core as core;
