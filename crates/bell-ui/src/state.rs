//! Shared tray state.
//!
//! [`TrayState`] is the one state container the UI reads from: the ordered
//! notification store plus the last observed connection status.  It is
//! constructed explicitly at application start and passed by reference to
//! the render path; there is no ambient singleton.  Channel events are
//! applied before the next frame renders, so every frame observes a
//! consistent snapshot.

use bell_core::models::{ConnectionStatus, Notification};
use bell_core::store::NotificationStore;
use bell_runtime::listener::ChannelEvent;

/// Tray-wide shared state: notifications + connection status.
#[derive(Debug)]
pub struct TrayState {
    store: NotificationStore,
    status: ConnectionStatus,
}

impl TrayState {
    /// Create the initial state: empty store, link assumed down until the
    /// listener reports otherwise.
    pub fn new(capacity: usize) -> Self {
        Self {
            store: NotificationStore::with_capacity(capacity),
            status: ConnectionStatus::Disconnected,
        }
    }

    /// Apply one event from the runtime channel.
    pub fn apply(&mut self, event: ChannelEvent) {
        match event {
            ChannelEvent::Status(status) => self.status = status,
            ChannelEvent::Notification(notification) => self.store.append(notification),
        }
    }

    /// Empty the store. Exposed to the menu as the "Clear all" action.
    pub fn clear_notifications(&mut self) {
        self.store.clear();
    }

    /// Notifications in arrival order, oldest first.
    pub fn notifications(&self) -> &[Notification] {
        self.store.items()
    }

    /// Exact count; drives the badge.
    pub fn count(&self) -> usize {
        self.store.len()
    }

    /// Current link state as last reported by the connection manager.
    pub fn is_connected(&self) -> bool {
        self.status.is_connected()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
