//! Push-channel listener task.
//!
//! [`PushListener`] owns the one live connection to the push endpoint for
//! the lifetime of the session. It reads newline-delimited JSON events,
//! validates them into [`Notification`]s, and forwards them together with
//! connection-status transitions through a bounded `mpsc` channel. The UI
//! event loop is the single consumer, so delivery is serialized in receipt
//! order.

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::net::TcpStream;
use tokio::sync::mpsc;

use bell_core::models::{ConnectionStatus, Notification, PushEvent};

use crate::reconnect::Backoff;

// ── Public types ──────────────────────────────────────────────────────────────

/// A single event forwarded to the UI layer.
///
/// This is the primary data contract between the background runtime and the
/// presentation layer.
#[derive(Debug, Clone)]
pub enum ChannelEvent {
    /// The link state changed. Only the listener ever produces these, so the
    /// reported status always reflects the true link state.
    Status(ConnectionStatus),
    /// A validated inbound notification.
    Notification(Notification),
}

// ── PushListener ──────────────────────────────────────────────────────────────

/// Background connection manager for the push channel.
///
/// Call [`PushListener::start`] to spin up the listen loop in a dedicated
/// tokio task and receive the channel endpoint for [`ChannelEvent`]s.
/// `start` consumes the listener, so there is exactly one connection task
/// per session by construction.
pub struct PushListener {
    /// Push endpoint address (`host:port`).
    addr: String,
    /// Reconnection policy.
    backoff: Backoff,
}

impl PushListener {
    /// Create a listener for `addr` with the standard backoff policy.
    pub fn new(addr: String) -> Self {
        Self::with_backoff(addr, Backoff::standard())
    }

    /// Create a listener with an explicit backoff policy (used by tests to
    /// avoid multi-second sleeps).
    pub fn with_backoff(addr: String, backoff: Backoff) -> Self {
        Self { addr, backoff }
    }

    /// Start the listen loop.
    ///
    /// Spawns a tokio task that connects, reads, and reconnects until the
    /// receiver side of the channel is dropped. Returns:
    /// - An `mpsc::Receiver<ChannelEvent>` for the caller to poll.
    /// - A [`ListenerHandle`] that can be used to abort the loop.
    pub fn start(self) -> (mpsc::Receiver<ChannelEvent>, ListenerHandle) {
        // Buffer a modest number of events so bursts don't stall the reader.
        let (tx, rx) = mpsc::channel(64);

        let handle = tokio::spawn(async move {
            self.listen_loop(tx).await;
        });

        (rx, ListenerHandle { handle })
    }

    // ── Private implementation ────────────────────────────────────────────

    /// The main connect / read / reconnect loop.
    ///
    /// The loop exits when the receiver side of the channel is closed.
    async fn listen_loop(mut self, tx: mpsc::Sender<ChannelEvent>) {
        loop {
            if tx.is_closed() {
                tracing::debug!("event channel closed; exiting listen loop");
                break;
            }

            match TcpStream::connect(&self.addr).await {
                Ok(stream) => {
                    self.backoff.reset();
                    tracing::info!(addr = %self.addr, "push channel connected");
                    if tx
                        .send(ChannelEvent::Status(ConnectionStatus::Connected))
                        .await
                        .is_err()
                    {
                        break;
                    }

                    Self::read_events(stream, &tx).await;

                    tracing::info!(addr = %self.addr, "push channel lost");
                    if tx
                        .send(ChannelEvent::Status(ConnectionStatus::Disconnected))
                        .await
                        .is_err()
                    {
                        break;
                    }
                }
                Err(e) => {
                    tracing::debug!(addr = %self.addr, error = %e, "connect failed");
                }
            }

            let delay = self.backoff.next_delay();
            tracing::debug!(?delay, "retrying push channel");
            tokio::time::sleep(delay).await;
        }
    }

    /// Read events from an established connection until it drops or the
    /// receiver goes away.
    ///
    /// Malformed lines and events without a message are discarded; nothing
    /// is synthesized on failure.
    async fn read_events(stream: TcpStream, tx: &mpsc::Sender<ChannelEvent>) {
        let mut lines = BufReader::new(stream).lines();

        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    match serde_json::from_str::<PushEvent>(&line) {
                        Ok(event) => match event.into_notification() {
                            Some(notification) => {
                                if tx
                                    .send(ChannelEvent::Notification(notification))
                                    .await
                                    .is_err()
                                {
                                    return;
                                }
                            }
                            None => {
                                tracing::debug!("discarding event without message");
                            }
                        },
                        Err(e) => {
                            tracing::debug!(error = %e, "discarding malformed event");
                        }
                    }
                }
                Ok(None) => {
                    tracing::debug!("push channel closed by peer");
                    return;
                }
                Err(e) => {
                    tracing::warn!(error = %e, "push channel read error");
                    return;
                }
            }
        }
    }
}

// ── ListenerHandle ────────────────────────────────────────────────────────────

/// A handle to the background listener task.
///
/// Drop the receiver or call [`ListenerHandle::abort`] to stop the loop.
pub struct ListenerHandle {
    handle: tokio::task::JoinHandle<()>,
}

impl ListenerHandle {
    /// Immediately abort the listen loop.
    pub fn abort(&self) {
        self.handle.abort();
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
