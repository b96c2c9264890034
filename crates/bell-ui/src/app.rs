//! Main application state and TUI event loop for termbell.
//!
//! [`App`] owns the theme, the tray state, and the menu.  It drives the
//! terminal event loop: draining runtime events from the channel, routing
//! keyboard and mouse input, and rendering each frame.

use std::io;
use std::time::Duration;

use chrono_tz::Tz;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use tokio::sync::mpsc;

use bell_core::formatting::resolve_timezone;
use bell_runtime::listener::ChannelEvent;

use crate::menu::{Menu, MenuAction};
use crate::state::TrayState;
use crate::themes::Theme;

// ── App ───────────────────────────────────────────────────────────────────────

/// Root application state for the termbell TUI.
pub struct App {
    /// Active colour theme.
    pub theme: Theme,
    /// Timezone used for timestamp display.
    timezone: Tz,
    /// Shared tray state (store + connection status).
    state: TrayState,
    /// Dropdown menu state machine.
    menu: Menu,
    /// Set to `true` to break out of the event loop on the next iteration.
    pub should_quit: bool,
}

impl App {
    /// Construct a new application with the given configuration.
    pub fn new(theme_name: &str, timezone: &str, capacity: usize) -> Self {
        Self {
            theme: Theme::from_name(theme_name),
            timezone: resolve_timezone(timezone),
            state: TrayState::new(capacity),
            menu: Menu::new(),
            should_quit: false,
        }
    }

    /// Read access for tests and wiring.
    pub fn state(&self) -> &TrayState {
        &self.state
    }

    // ── Public event loop ─────────────────────────────────────────────────────

    /// Run the tray event loop, receiving runtime events from `rx`.
    ///
    /// Uses `crossterm::event::poll` (synchronous, with a 250 ms timeout) so
    /// that input handling stays on the current thread while runtime events
    /// arrive on the async channel via `try_recv`.  Each handler runs to
    /// completion before the next; nothing here overlaps.
    ///
    /// Mouse capture is the outside-click listener: it is enabled when the
    /// loop enters the alternate screen and released on every exit path,
    /// including an I/O error mid-iteration — the loop result is captured
    /// and the release sequence runs before it is returned.
    ///
    /// The loop exits on `q`, `Q`, or `Ctrl+C`.
    pub async fn run(mut self, mut rx: mpsc::Receiver<ChannelEvent>) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
            let _ = disable_raw_mode();
            return Err(e);
        }

        let result = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(mut terminal) => {
                let looped = self.event_loop(&mut terminal, &mut rx);

                // Restore terminal state unconditionally; a failed frame must
                // not leak mouse capture or the alternate screen.
                let released = release_terminal(terminal.backend_mut());
                let cursor = terminal.show_cursor();
                looped.and(released).and(cursor)
            }
            Err(e) => {
                let _ = release_terminal(&mut io::stdout());
                Err(e)
            }
        };

        let raw = disable_raw_mode();
        result.and(raw)
    }

    /// The draw / input / drain loop.  Fallible terminal calls may propagate
    /// with `?` here because [`App::run`] releases the terminal no matter
    /// how this returns.
    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        rx: &mut mpsc::Receiver<ChannelEvent>,
    ) -> io::Result<()> {
        let tick_rate = Duration::from_millis(250);

        loop {
            terminal.draw(|frame| self.render(frame))?;

            // Handle input events with a short timeout so we don't block.
            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key) => match key.code {
                        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            return Ok(());
                        }
                        KeyCode::Char('q') | KeyCode::Char('Q') => return Ok(()),
                        KeyCode::Char('b') | KeyCode::Char('B') => self.menu.toggle(),
                        KeyCode::Char('c') | KeyCode::Char('C') => {
                            if self.menu.is_open() {
                                self.state.clear_notifications();
                            }
                        }
                        _ => {}
                    },
                    Event::Mouse(mouse) => {
                        if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                            self.on_mouse_down(mouse.column, mouse.row);
                        }
                    }
                    _ => {}
                }
            }

            // Drain any pending runtime events (non-blocking) so the frame
            // about to render observes a consistent snapshot.
            loop {
                match rx.try_recv() {
                    Ok(event) => self.state.apply(event),
                    Err(mpsc::error::TryRecvError::Empty) => break,
                    Err(mpsc::error::TryRecvError::Disconnected) => {
                        self.should_quit = true;
                        break;
                    }
                }
            }

            if self.should_quit {
                return Ok(());
            }
        }
    }

    // ── Private helpers ───────────────────────────────────────────────────────

    /// Route a left mouse-down through the menu and act on the outcome.
    fn on_mouse_down(&mut self, column: u16, row: u16) {
        if self.menu.on_mouse_down(column, row) == MenuAction::ClearRequested {
            self.state.clear_notifications();
        }
    }

    /// Render the current application state into `frame`.
    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.menu
            .render(frame, area, &self.state, &self.theme, self.timezone);
    }
}

/// Write the terminal release sequence: mouse capture off, then leave the
/// alternate screen.  Generic over the writer so the restore path can be
/// exercised without a live terminal.
fn release_terminal<W: io::Write>(out: &mut W) -> io::Result<()> {
    execute!(out, DisableMouseCapture, LeaveAlternateScreen)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
