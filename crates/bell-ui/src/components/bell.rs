use ratatui::text::{Line, Span};

use crate::themes::Theme;

// ── BellIndicator ────────────────────────────────────────────────────────────

/// The always-visible bell with its count badge and connection dot.
///
/// The badge shows the exact current count — no `99+` capping — and is
/// omitted entirely when the count is zero.  The dot has two distinct
/// colours for connected and disconnected.
pub struct BellIndicator<'a> {
    /// Number of stored notifications.
    pub count: usize,
    /// Whether the push channel is currently up.
    pub connected: bool,
    /// Theme providing colour styles.
    pub theme: &'a Theme,
}

impl<'a> BellIndicator<'a> {
    /// Construct a new indicator.
    pub fn new(count: usize, connected: bool, theme: &'a Theme) -> Self {
        Self {
            count,
            connected,
            theme,
        }
    }

    /// Badge text, or `None` when there is nothing to show.
    pub fn badge_text(&self) -> Option<String> {
        if self.count == 0 {
            None
        } else {
            Some(self.count.to_string())
        }
    }

    /// Render the indicator as a [`Line`].
    ///
    /// Format: `"🔔 3 ●"` (badge omitted at zero).
    pub fn to_line(&self) -> Line<'a> {
        let mut spans = vec![Span::styled("🔔", self.theme.bell)];

        if let Some(badge) = self.badge_text() {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(badge, self.theme.badge));
        }

        spans.push(Span::raw(" "));
        spans.push(Span::styled("●", self.theme.status_style(self.connected)));

        Line::from(spans)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    // ── badge_text ───────────────────────────────────────────────────────────

    #[test]
    fn test_badge_hidden_at_zero() {
        let theme = Theme::dark();
        assert!(BellIndicator::new(0, true, &theme).badge_text().is_none());
    }

    #[test]
    fn test_badge_shows_exact_count() {
        let theme = Theme::dark();
        assert_eq!(
            BellIndicator::new(1, true, &theme).badge_text().as_deref(),
            Some("1")
        );
        assert_eq!(
            BellIndicator::new(42, true, &theme).badge_text().as_deref(),
            Some("42")
        );
    }

    #[test]
    fn test_badge_large_count_not_capped() {
        let theme = Theme::dark();
        assert_eq!(
            BellIndicator::new(1234, true, &theme)
                .badge_text()
                .as_deref(),
            Some("1234")
        );
    }

    // ── to_line ──────────────────────────────────────────────────────────────

    #[test]
    fn test_to_line_zero_count_span_layout() {
        let theme = Theme::dark();
        let line = BellIndicator::new(0, true, &theme).to_line();
        // bell, space, dot — no badge spans.
        assert_eq!(line.spans.len(), 3, "got {} spans", line.spans.len());
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(!text.contains('0'), "zero badge must not render: {text}");
    }

    #[test]
    fn test_to_line_with_badge() {
        let theme = Theme::dark();
        let line = BellIndicator::new(7, true, &theme).to_line();
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.contains('7'), "unexpected content: {text}");
        assert!(text.contains("🔔"), "unexpected content: {text}");
    }

    #[test]
    fn test_to_line_dot_colour_tracks_connection() {
        let theme = Theme::dark();

        let connected = BellIndicator::new(0, true, &theme).to_line();
        assert_eq!(connected.spans.last().unwrap().style.fg, Some(Color::Green));

        let disconnected = BellIndicator::new(0, false, &theme).to_line();
        assert_eq!(
            disconnected.spans.last().unwrap().style.fg,
            Some(Color::Red)
        );
    }
}
