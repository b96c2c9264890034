//! Reconnection backoff policy for the push-channel listener.

use std::time::Duration;

/// Exponential backoff with a hard cap and no attempt limit.
///
/// The listener retries forever; a dropped link only degrades the status
/// indicator, so giving up would serve nobody.
#[derive(Debug, Clone)]
pub struct Backoff {
    base: Duration,
    cap: Duration,
    current: Option<Duration>,
}

impl Backoff {
    /// Standard policy: 1 s base, doubling, capped at 30 s.
    pub fn standard() -> Self {
        Self::new(Duration::from_secs(1), Duration::from_secs(30))
    }

    /// Build a policy with explicit base and cap.
    pub fn new(base: Duration, cap: Duration) -> Self {
        Self {
            base,
            cap,
            current: None,
        }
    }

    /// Delay to wait before the next attempt. Each call doubles the delay
    /// until the cap is reached.
    pub fn next_delay(&mut self) -> Duration {
        let next = match self.current {
            None => self.base,
            Some(d) => self.cap.min(d * 2),
        };
        self.current = Some(next);
        next
    }

    /// Reset after a successful connect so the next drop retries quickly.
    pub fn reset(&mut self) {
        self.current = None;
    }
}

impl Default for Backoff {
    fn default() -> Self {
        Self::standard()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backoff_doubles_until_cap() {
        let mut b = Backoff::standard();
        let secs: Vec<u64> = (0..7).map(|_| b.next_delay().as_secs()).collect();
        assert_eq!(secs, vec![1, 2, 4, 8, 16, 30, 30]);
    }

    #[test]
    fn test_backoff_reset_returns_to_base() {
        let mut b = Backoff::standard();
        b.next_delay();
        b.next_delay();
        b.reset();
        assert_eq!(b.next_delay(), Duration::from_secs(1));
    }

    #[test]
    fn test_backoff_custom_base_and_cap() {
        let mut b = Backoff::new(Duration::from_millis(100), Duration::from_millis(250));
        assert_eq!(b.next_delay(), Duration::from_millis(100));
        assert_eq!(b.next_delay(), Duration::from_millis(200));
        // 400 ms would exceed the cap.
        assert_eq!(b.next_delay(), Duration::from_millis(250));
    }
}
