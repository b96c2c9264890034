//! Bounded in-memory notification store.
//!
//! Insertion order equals arrival order (newest last). The store is owned by
//! a single task; mutations complete before the next render reads it, so the
//! badge count always equals the stored length.

use crate::models::Notification;

/// Default upper bound on stored notifications.
///
/// Appending past the cap drops the oldest entry so a long-lived session
/// cannot grow without bound.
pub const DEFAULT_CAPACITY: usize = 500;

/// Ordered collection of received notifications.
#[derive(Debug, Clone)]
pub struct NotificationStore {
    items: Vec<Notification>,
    capacity: usize,
}

impl NotificationStore {
    /// Create an empty store with [`DEFAULT_CAPACITY`].
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty store with an explicit capacity.
    ///
    /// A capacity of zero is treated as one so `append` is never a no-op.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::new(),
            capacity: capacity.max(1),
        }
    }

    /// Append a notification at the end, evicting the oldest entry when the
    /// store is at capacity. No deduplication.
    pub fn append(&mut self, notification: Notification) {
        if self.items.len() == self.capacity {
            self.items.remove(0);
        }
        self.items.push(notification);
    }

    /// Remove all notifications in one step.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Current count; this is exactly what the badge shows.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// `true` when there is nothing to show.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Notifications in arrival order, oldest first.
    pub fn items(&self) -> &[Notification] {
        &self.items
    }
}

impl Default for NotificationStore {
    fn default() -> Self {
        Self::new()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
