//! Reusable tray rendering components.

pub mod bell;
