use ratatui::style::{Color, Modifier, Style};

/// Terminal background type detection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BackgroundType {
    Dark,
    Light,
    Unknown,
}

/// Detect terminal background type from the `COLORFGBG` environment variable.
///
/// The variable has the format `"foreground;background"`.  Background values
/// 0–6 are considered dark; 7–15 are considered light.  If the variable is
/// absent or unparseable, `BackgroundType::Dark` is returned as the safe
/// default.
pub fn detect_background() -> BackgroundType {
    if let Ok(val) = std::env::var("COLORFGBG") {
        if let Some(bg) = val.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                return if bg_num <= 6 {
                    BackgroundType::Dark
                } else {
                    BackgroundType::Light
                };
            }
        }
    }
    BackgroundType::Dark
}

/// Complete theme definition carrying all UI styles used by the tray
/// components.
#[derive(Debug, Clone)]
pub struct Theme {
    // ── Text ─────────────────────────────────────────────────────────────────
    pub text: Style,
    pub dim: Style,
    pub label: Style,

    // ── Bell / badge ─────────────────────────────────────────────────────────
    pub bell: Style,
    /// Count badge on the bell; hidden entirely when the count is zero.
    pub badge: Style,

    // ── Connection indicator ─────────────────────────────────────────────────
    /// Dot shown while the push channel is up.
    pub status_connected: Style,
    /// Dot shown while the push channel is down.
    pub status_disconnected: Style,

    // ── Dropdown panel ───────────────────────────────────────────────────────
    pub panel_border: Style,
    pub panel_title: Style,
    pub clear_action: Style,
    pub item_title: Style,
    pub item_message: Style,
    pub item_time: Style,
    /// "No new notifications" placeholder.
    pub empty: Style,
}

impl Theme {
    // ── Constructors ─────────────────────────────────────────────────────────

    /// Dark-background terminal theme (default).
    pub fn dark() -> Self {
        Self {
            text: Style::default().fg(Color::White),
            dim: Style::default().fg(Color::DarkGray),
            label: Style::default().fg(Color::Gray),

            bell: Style::default().fg(Color::Yellow),
            badge: Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),

            status_connected: Style::default().fg(Color::Green),
            status_disconnected: Style::default().fg(Color::Red),

            panel_border: Style::default().fg(Color::DarkGray),
            panel_title: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            clear_action: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::UNDERLINED),
            item_title: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            item_message: Style::default().fg(Color::Gray),
            item_time: Style::default().fg(Color::DarkGray),
            empty: Style::default().fg(Color::DarkGray),
        }
    }

    /// Light-background terminal theme.
    pub fn light() -> Self {
        Self {
            text: Style::default().fg(Color::Black),
            dim: Style::default().fg(Color::Gray),
            label: Style::default().fg(Color::DarkGray),

            bell: Style::default().fg(Color::Blue),
            badge: Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),

            status_connected: Style::default().fg(Color::Green),
            status_disconnected: Style::default().fg(Color::Red),

            panel_border: Style::default().fg(Color::Gray),
            panel_title: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            clear_action: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::UNDERLINED),
            item_title: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            item_message: Style::default().fg(Color::DarkGray),
            item_time: Style::default().fg(Color::Gray),
            empty: Style::default().fg(Color::Gray),
        }
    }

    /// Classic terminal theme using only the basic 8-colour ANSI palette.
    ///
    /// Avoids bold modifiers to maintain a retro aesthetic and maximise
    /// compatibility with minimal terminal emulators.
    pub fn classic() -> Self {
        Self {
            text: Style::default().fg(Color::White),
            dim: Style::default().fg(Color::DarkGray),
            label: Style::default().fg(Color::Gray),

            bell: Style::default().fg(Color::Yellow),
            badge: Style::default().fg(Color::Black).bg(Color::Yellow),

            status_connected: Style::default().fg(Color::Green),
            status_disconnected: Style::default().fg(Color::Red),

            panel_border: Style::default().fg(Color::DarkGray),
            panel_title: Style::default().fg(Color::Cyan),
            clear_action: Style::default().fg(Color::Cyan),
            item_title: Style::default().fg(Color::White),
            item_message: Style::default().fg(Color::Gray),
            item_time: Style::default().fg(Color::DarkGray),
            empty: Style::default().fg(Color::DarkGray),
        }
    }

    /// Choose a theme automatically based on the detected terminal background.
    pub fn auto_detect() -> Self {
        match detect_background() {
            BackgroundType::Light => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Construct a theme by name.  Falls back to `auto_detect` for unknown
    /// names.
    pub fn from_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            "dark" => Self::dark(),
            "classic" => Self::classic(),
            _ => Self::auto_detect(),
        }
    }

    /// Return the indicator-dot style for a connection state.
    pub fn status_style(&self, connected: bool) -> Style {
        if connected {
            self.status_connected
        } else {
            self.status_disconnected
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
