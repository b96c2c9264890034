//! Notification menu: the toggle-able dropdown anchored to the bell.
//!
//! [`Menu`] is a two-state machine (`closed` / `open`).  A left mouse-down
//! on the bell toggles it; while open, a mouse-down anywhere outside the
//! panel closes it.  Hit testing runs against the regions recorded during
//! the previous render, which is the terminal equivalent of the DOM
//! bounding-box check a web dropdown would do.

use chrono_tz::Tz;
use ratatui::{
    layout::{Position, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use bell_core::formatting::format_timestamp;

use crate::components::bell::BellIndicator;
use crate::state::TrayState;
use crate::themes::Theme;

/// Placeholder shown when the store is empty.
const EMPTY_LABEL: &str = "No new notifications";
/// The clear-all action label.
const CLEAR_LABEL: &str = "Clear all";
/// Dropdown panel width in terminal columns.
const PANEL_WIDTH: u16 = 38;

// ── MenuAction ────────────────────────────────────────────────────────────────

/// Outcome of a mouse-down routed through the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// The click did not change anything the caller needs to act on.
    None,
    /// The menu just opened.
    Opened,
    /// The menu just closed (toggle or outside-click).
    Closed,
    /// The user hit "Clear all"; the caller should clear the store.
    /// The menu stays open.
    ClearRequested,
}

// ── Menu ──────────────────────────────────────────────────────────────────────

/// Dropdown menu state machine and renderer.
///
/// The hit regions (`bell_area`, `panel_area`, `clear_area`) are refreshed
/// on every render; a zero-sized rect never matches a click.
pub struct Menu {
    open: bool,
    bell_area: Rect,
    panel_area: Rect,
    clear_area: Rect,
}

impl Menu {
    /// Create a closed menu.
    pub fn new() -> Self {
        Self {
            open: false,
            bell_area: Rect::ZERO,
            panel_area: Rect::ZERO,
            clear_area: Rect::ZERO,
        }
    }

    /// Whether the dropdown is currently visible.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Toggle the dropdown (keyboard affordance for the bell click).
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    // ── Hit testing ───────────────────────────────────────────────────────

    /// Route a left mouse-down at `(column, row)` through the menu.
    ///
    /// Evaluated on every mouse-down: the bell toggles, "Clear all"
    /// requests a store clear without closing, a click inside the panel is
    /// swallowed, and anything else while open is an outside-click that
    /// closes the menu.
    pub fn on_mouse_down(&mut self, column: u16, row: u16) -> MenuAction {
        let pos = Position::new(column, row);

        if self.bell_area.contains(pos) {
            self.open = !self.open;
            return if self.open {
                MenuAction::Opened
            } else {
                MenuAction::Closed
            };
        }

        if !self.open {
            return MenuAction::None;
        }

        if self.clear_area.contains(pos) {
            return MenuAction::ClearRequested;
        }

        if self.panel_area.contains(pos) {
            return MenuAction::None;
        }

        self.open = false;
        MenuAction::Closed
    }

    // ── Rendering ─────────────────────────────────────────────────────────

    /// Render the bell (always) and the dropdown panel (while open) into
    /// `area`, refreshing the hit regions as a side effect.
    pub fn render(&mut self, frame: &mut Frame, area: Rect, state: &TrayState, theme: &Theme, tz: Tz) {
        let indicator = BellIndicator::new(state.count(), state.is_connected(), theme);
        let line = indicator.to_line();
        let width = (line.width() as u16).min(area.width);

        self.bell_area = Rect {
            x: area.right().saturating_sub(width),
            y: area.y,
            width,
            height: area.height.min(1),
        };
        frame.render_widget(Paragraph::new(line), self.bell_area);

        if !self.open {
            self.panel_area = Rect::ZERO;
            self.clear_area = Rect::ZERO;
            return;
        }

        self.panel_area = panel_rect(area, state.count());
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.panel_border)
            .title(Span::styled(" Notifications ", theme.panel_title));
        let inner = block.inner(self.panel_area);
        frame.render_widget(block, self.panel_area);

        if inner.height == 0 {
            self.clear_area = Rect::ZERO;
            return;
        }

        // Header row: clear action, present only when there is something to
        // clear.
        if state.count() > 0 {
            let label_width = CLEAR_LABEL.len() as u16;
            self.clear_area = Rect {
                x: inner.right().saturating_sub(label_width),
                y: inner.y,
                width: label_width.min(inner.width),
                height: 1,
            };
            frame.render_widget(
                Paragraph::new(Span::styled(CLEAR_LABEL, theme.clear_action)),
                self.clear_area,
            );
        } else {
            self.clear_area = Rect::ZERO;
        }

        let body = Rect {
            x: inner.x,
            y: inner.y + 1,
            width: inner.width,
            height: inner.height.saturating_sub(1),
        };
        if body.height == 0 {
            return;
        }

        if state.count() == 0 {
            frame.render_widget(
                Paragraph::new(Span::styled(EMPTY_LABEL, theme.empty)).centered(),
                body,
            );
            return;
        }

        // Store order, oldest first; no re-sorting.
        let mut lines: Vec<Line> = Vec::with_capacity(state.count() * 3);
        for notification in state.notifications() {
            lines.push(Line::styled(
                notification.display_title().to_string(),
                theme.item_title,
            ));
            lines.push(Line::styled(
                notification.message.clone(),
                theme.item_message,
            ));
            // Empty string when the timestamp is missing or was unparseable.
            lines.push(Line::styled(
                format_timestamp(notification.timestamp, tz),
                theme.item_time,
            ));
        }
        frame.render_widget(Paragraph::new(lines), body);
    }
}

impl Default for Menu {
    fn default() -> Self {
        Self::new()
    }
}

// ── Layout ────────────────────────────────────────────────────────────────────

/// Compute the dropdown rect: right-aligned, anchored one row under the
/// bell, sized to the item count and clamped to the available area.
fn panel_rect(area: Rect, count: usize) -> Rect {
    let width = PANEL_WIDTH.min(area.width);
    // 1 header row + 3 rows per item (or 1 for the empty label) + borders.
    let body_rows = if count == 0 { 1 } else { (count * 3) as u16 };
    let height = (1 + body_rows + 2).min(area.height.saturating_sub(1));
    Rect {
        x: area.right().saturating_sub(width),
        y: area.y + 1,
        width,
        height,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    use bell_core::models::Notification;
    use bell_runtime::listener::ChannelEvent;

    /// A menu with handcrafted hit regions, as if it had just rendered.
    fn rendered_menu(open: bool) -> Menu {
        Menu {
            open,
            bell_area: Rect::new(70, 0, 6, 1),
            panel_area: if open {
                Rect::new(42, 1, 38, 10)
            } else {
                Rect::ZERO
            },
            clear_area: if open {
                Rect::new(69, 2, 9, 1)
            } else {
                Rect::ZERO
            },
        }
    }

    // ── open / close transitions ─────────────────────────────────────────────

    #[test]
    fn test_menu_starts_closed() {
        assert!(!Menu::new().is_open());
    }

    #[test]
    fn test_bell_click_opens() {
        let mut menu = rendered_menu(false);
        assert_eq!(menu.on_mouse_down(71, 0), MenuAction::Opened);
        assert!(menu.is_open());
    }

    #[test]
    fn test_bell_click_toggles_closed() {
        let mut menu = rendered_menu(true);
        assert_eq!(menu.on_mouse_down(71, 0), MenuAction::Closed);
        assert!(!menu.is_open());
    }

    #[test]
    fn test_outside_click_closes_open_menu() {
        let mut menu = rendered_menu(true);
        assert_eq!(menu.on_mouse_down(5, 20), MenuAction::Closed);
        assert!(!menu.is_open());
    }

    #[test]
    fn test_outside_click_ignored_while_closed() {
        let mut menu = rendered_menu(false);
        assert_eq!(menu.on_mouse_down(5, 20), MenuAction::None);
        assert!(!menu.is_open());
    }

    #[test]
    fn test_click_inside_panel_keeps_menu_open() {
        let mut menu = rendered_menu(true);
        assert_eq!(menu.on_mouse_down(50, 5), MenuAction::None);
        assert!(menu.is_open());
    }

    // ── clear action ─────────────────────────────────────────────────────────

    #[test]
    fn test_clear_click_requests_clear_and_stays_open() {
        let mut menu = rendered_menu(true);
        assert_eq!(menu.on_mouse_down(70, 2), MenuAction::ClearRequested);
        assert!(menu.is_open());
    }

    #[test]
    fn test_clear_region_absent_when_store_empty() {
        let mut menu = rendered_menu(true);
        menu.clear_area = Rect::ZERO;
        // The spot where the action used to be is now just panel interior.
        assert_eq!(menu.on_mouse_down(70, 2), MenuAction::None);
        assert!(menu.is_open());
    }

    // ── toggle ───────────────────────────────────────────────────────────────

    #[test]
    fn test_toggle_keyboard_affordance() {
        let mut menu = Menu::new();
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
    }

    // ── render-computed regions ──────────────────────────────────────────────

    fn note(message: &str) -> Notification {
        Notification {
            title: None,
            message: message.to_string(),
            timestamp: None,
        }
    }

    /// Draw one frame into a test backend, refreshing the menu's hit
    /// regions from the real layout math.
    fn draw(menu: &mut Menu, state: &TrayState) -> Terminal<TestBackend> {
        let theme = Theme::dark();
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                menu.render(frame, area, state, &theme, Tz::UTC);
            })
            .unwrap();
        terminal
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_render_closed_records_bell_and_zeroes_panel() {
        let mut menu = Menu::new();
        let state = TrayState::new(10);
        draw(&mut menu, &state);

        // Bell is right-aligned on the top row.
        assert!(menu.bell_area.width > 0);
        assert_eq!(menu.bell_area.y, 0);
        assert_eq!(menu.bell_area.right(), 80);
        // No dropdown regions while closed.
        assert_eq!(menu.panel_area, Rect::ZERO);
        assert_eq!(menu.clear_area, Rect::ZERO);
    }

    #[test]
    fn test_render_open_empty_store_has_no_clear_region() {
        let mut menu = Menu::new();
        menu.toggle();
        let state = TrayState::new(10);
        let terminal = draw(&mut menu, &state);

        assert!(menu.panel_area.width > 0);
        assert_eq!(menu.clear_area, Rect::ZERO);
        assert!(buffer_text(&terminal).contains(EMPTY_LABEL));

        // A click where the action would sit is just panel interior.
        let column = menu.panel_area.right() - 2;
        let row = menu.panel_area.y + 1;
        assert_eq!(menu.on_mouse_down(column, row), MenuAction::None);
        assert!(menu.is_open());
    }

    #[test]
    fn test_render_open_with_items_places_clear_inside_panel() {
        let mut menu = Menu::new();
        menu.toggle();
        let mut state = TrayState::new(10);
        state.apply(ChannelEvent::Notification(note("first")));
        state.apply(ChannelEvent::Notification(note("second")));
        let terminal = draw(&mut menu, &state);

        assert!(menu.clear_area.width > 0);
        assert!(menu.panel_area.contains(Position::new(
            menu.clear_area.x,
            menu.clear_area.y,
        )));
        let text = buffer_text(&terminal);
        assert!(text.contains(CLEAR_LABEL));
        assert!(text.contains("first"));
        assert!(text.contains("second"));

        assert_eq!(
            menu.on_mouse_down(menu.clear_area.x, menu.clear_area.y),
            MenuAction::ClearRequested
        );
        assert!(menu.is_open());
    }

    #[test]
    fn test_render_bell_region_toggles_and_outside_click_closes() {
        let mut menu = Menu::new();
        let state = TrayState::new(10);
        draw(&mut menu, &state);

        // Click the rendered bell, then re-render to pick up the panel.
        assert_eq!(
            menu.on_mouse_down(menu.bell_area.x, menu.bell_area.y),
            MenuAction::Opened
        );
        draw(&mut menu, &state);
        assert!(menu.panel_area.width > 0);

        // Bottom-left corner is outside both the bell and the panel.
        assert_eq!(menu.on_mouse_down(0, 23), MenuAction::Closed);
        draw(&mut menu, &state);
        assert_eq!(menu.panel_area, Rect::ZERO);
    }

    // ── panel_rect ───────────────────────────────────────────────────────────

    #[test]
    fn test_panel_rect_right_aligned_below_bell() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = panel_rect(area, 2);
        assert_eq!(rect.right(), 80);
        assert_eq!(rect.y, 1);
        assert_eq!(rect.width, PANEL_WIDTH);
        // 1 header + 6 item rows + 2 border rows.
        assert_eq!(rect.height, 9);
    }

    #[test]
    fn test_panel_rect_empty_store_single_body_row() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = panel_rect(area, 0);
        assert_eq!(rect.height, 4);
    }

    #[test]
    fn test_panel_rect_clamped_to_small_terminal() {
        let area = Rect::new(0, 0, 20, 6);
        let rect = panel_rect(area, 50);
        assert!(rect.width <= 20);
        assert!(rect.height <= 5);
    }
}
