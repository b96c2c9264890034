//! Core data types for the notification tray.
//!
//! [`PushEvent`] is the inbound wire shape read off the push channel;
//! [`Notification`] is the validated, immutable record owned by the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Fallback title shown when an event carries no usable title.
pub const FALLBACK_TITLE: &str = "Notification";

// ── ConnectionStatus ──────────────────────────────────────────────────────────

/// Link state of the push channel.
///
/// Written only by the connection manager; everything else reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionStatus {
    Connected,
    Disconnected,
}

impl ConnectionStatus {
    /// `true` when the link is up.
    pub fn is_connected(self) -> bool {
        matches!(self, ConnectionStatus::Connected)
    }
}

// ── Notification ──────────────────────────────────────────────────────────────

/// A single received notification. Immutable once created.
///
/// Invariant: `message` is never empty — events without a message are
/// discarded before a `Notification` is ever constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    /// Optional headline; display falls back to [`FALLBACK_TITLE`].
    pub title: Option<String>,
    /// Body text. Always non-empty.
    pub message: String,
    /// Arrival timestamp, if the event carried a parseable one.
    pub timestamp: Option<DateTime<Utc>>,
}

impl Notification {
    /// Title to render: the event's own title, or [`FALLBACK_TITLE`] when
    /// absent or empty.
    pub fn display_title(&self) -> &str {
        match self.title.as_deref() {
            Some(t) if !t.trim().is_empty() => t,
            _ => FALLBACK_TITLE,
        }
    }
}

// ── PushEvent (wire shape) ────────────────────────────────────────────────────

/// Raw inbound event as read from the push channel.
///
/// `timestamp` is accepted as RFC 3339 text or epoch milliseconds; any other
/// value deserializes to `None` rather than failing the whole event.
#[derive(Debug, Clone, Deserialize)]
pub struct PushEvent {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl PushEvent {
    /// Validate the event into a [`Notification`].
    ///
    /// Returns `None` when the message is missing or blank; such events are
    /// discarded silently per the error-handling contract.
    pub fn into_notification(self) -> Option<Notification> {
        let message = self.message?;
        if message.trim().is_empty() {
            return None;
        }
        Some(Notification {
            title: self.title,
            message,
            timestamp: self.timestamp,
        })
    }
}

/// Deserialize a timestamp that may be an RFC 3339 string, an epoch-millis
/// number, absent, or garbage. Garbage maps to `None`.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(parse_timestamp_value))
}

/// Interpret a JSON value as a point in time, if possible.
fn parse_timestamp_value(value: &serde_json::Value) -> Option<DateTime<Utc>> {
    match value {
        serde_json::Value::String(s) => DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|dt| dt.with_timezone(&Utc)),
        serde_json::Value::Number(n) => n
            .as_i64()
            .and_then(DateTime::<Utc>::from_timestamp_millis),
        _ => None,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
