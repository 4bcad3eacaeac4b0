use crate::app::{App, AppMode};
use crate::ui::keymap::reader_action;
use crate::ui::render::draw;
use crate::ui::terminal_guard::TerminalGuard;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use tracing::debug;

/// Longest the loop sleeps when no tick is pending, so resizes redraw promptly.
const IDLE_POLL: Duration = Duration::from_millis(250);

pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    _guard: TerminalGuard,
}

impl TuiManager {
    pub fn new() -> Result<Self, io::Error> {
        let guard = TerminalGuard::new()?;
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(TuiManager {
            terminal,
            _guard: guard,
        })
    }

    /// Runs until the app quits.
    ///
    /// Sleeps in `event::poll` until either input arrives or the next playback
    /// tick is due, so key presses are handled between ticks and never starve.
    pub fn run_event_loop(&mut self, app: &mut App) -> io::Result<()> {
        self.render_frame(app)?;

        loop {
            if app.mode() == AppMode::Quit {
                return Ok(());
            }

            let timeout = app
                .time_until_tick(Instant::now())
                .map_or(IDLE_POLL, |wait| wait.min(IDLE_POLL));

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        handle_key(app, key, Instant::now());
                    }
                    Event::Paste(text) => {
                        for c in text.chars() {
                            app.push_char(if c.is_whitespace() { ' ' } else { c });
                        }
                    }
                    _ => {}
                }
            }

            app.tick(Instant::now());
            self.render_frame(app)?;
        }
    }

    pub fn render_frame(&mut self, app: &App) -> io::Result<()> {
        let state = app.get_render_state();
        self.terminal.draw(|frame| draw(frame, &state))?;
        Ok(())
    }
}

fn handle_key(app: &mut App, key: KeyEvent, now: Instant) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        debug!("interrupt");
        app.quit();
        return;
    }

    match app.mode() {
        AppMode::Reading => {
            if let Some(action) = reader_action(key.code) {
                app.handle_action(action, now);
            }
        }
        AppMode::Command => match key.code {
            KeyCode::Enter => app.submit(now),
            KeyCode::Backspace => app.backspace(),
            KeyCode::Esc => app.quit(),
            KeyCode::Char(c) => app.push_char(c),
            _ => {}
        },
        AppMode::Quit => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{PlaybackPhase, ReaderConfig};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_and_enter_starts_reading() {
        let now = Instant::now();
        let mut app = App::new(ReaderConfig::default());
        for c in "hi there".chars() {
            handle_key(&mut app, press(KeyCode::Char(c)), now);
        }
        handle_key(&mut app, press(KeyCode::Enter), now);
        assert_eq!(app.mode(), AppMode::Reading);

        handle_key(&mut app, press(KeyCode::Char(' ')), now);
        assert_eq!(app.phase(), PlaybackPhase::Playing);

        handle_key(&mut app, press(KeyCode::Char('q')), now);
        assert_eq!(app.mode(), AppMode::Command);
        assert_eq!(app.phase(), PlaybackPhase::Idle);
    }

    #[test]
    fn test_ctrl_c_quits_from_any_mode() {
        let now = Instant::now();
        let mut app = App::new(ReaderConfig::default());
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            now,
        );
        assert_eq!(app.mode(), AppMode::Quit);
    }
}
