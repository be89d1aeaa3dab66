//! Interactive terminal application.
//!
//! [`EntityApp`] owns the session and maps key events onto it. [`run`] sets
//! up the terminal and drives the event loop.

use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};

use super::theme::Theme;
use super::ui;
use crate::language::LanguageStore;
use crate::session::Session;

/// How long to wait for input before advancing timers.
const TICK_RATE: Duration = Duration::from_millis(50);

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResult {
    Continue,
    Quit,
}

/// The ENTITY-001 terminal.
#[derive(Debug)]
pub struct EntityApp {
    session: Session,
    language: LanguageStore,
    theme: Theme,
    show_about: bool,
}

impl EntityApp {
    pub fn new(session: Session, language: LanguageStore, theme: Theme) -> Self {
        Self {
            session,
            language,
            theme,
            show_about: false,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_about_open(&self) -> bool {
        self.show_about
    }

    /// Handle one key press.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> KeyResult {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return KeyResult::Quit;
        }

        // Any of these closes the about overlay; everything else is swallowed
        if self.show_about {
            if matches!(key.code, KeyCode::Esc | KeyCode::F(1) | KeyCode::Enter) {
                self.show_about = false;
            }
            return KeyResult::Continue;
        }

        match key.code {
            KeyCode::Esc => return KeyResult::Quit,
            KeyCode::F(1) => self.show_about = true,
            KeyCode::Tab => self.toggle_language(),
            KeyCode::Enter => {
                self.session.submit(now);
            }
            KeyCode::Backspace => {
                self.session.backspace();
            }
            KeyCode::Char(ch)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.session.type_char(ch);
            }
            _ => {}
        }
        KeyResult::Continue
    }

    /// Advance session timers.
    pub fn tick(&mut self, now: Instant) {
        self.session.tick(now);
    }

    pub fn render(&self, frame: &mut Frame) {
        ui::render(frame, &self.session, &self.theme, self.show_about);
    }

    fn toggle_language(&mut self) {
        let next = self.session.language().toggle();
        if let Err(e) = self.session.set_language(next) {
            tracing::error!(error = %e, "Failed to switch language");
            return;
        }
        // Failing to persist only costs the preference on next start
        if let Err(e) = self.language.set_language(next) {
            tracing::warn!(error = %e, "Failed to persist language");
        }
    }
}

/// Raw-mode alternate-screen terminal, restored on drop.
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let terminal = setup(io::stdout(), &mut io::stdout())?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore(self.terminal.backend_mut());
    }
}

/// Switch `out` to a hidden-cursor alternate screen.
///
/// Raw mode must already be on. On failure everything is undone through
/// `fallback`, since `out` has been consumed.
fn setup<W: Write>(out: W, fallback: &mut impl Write) -> Result<Terminal<CrosstermBackend<W>>> {
    try_setup(out).map_err(|e| {
        restore(fallback);
        e
    })
}

fn try_setup<W: Write>(mut out: W) -> Result<Terminal<CrosstermBackend<W>>> {
    execute!(out, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(out))?;
    terminal.hide_cursor()?;
    terminal.clear()?;
    Ok(terminal)
}

/// Leave raw mode and the alternate screen, and show the cursor again.
fn restore(out: &mut impl Write) {
    let _ = disable_raw_mode();
    let _ = execute!(out, LeaveAlternateScreen, Show);
}

/// Run the terminal until the user quits.
#[cfg(not(tarpaulin_include))]
pub fn run(mut app: EntityApp) -> Result<()> {
    let mut guard = TerminalGuard::enter()?;
    tracing::info!("Terminal UI started");

    loop {
        app.tick(Instant::now());
        guard.terminal.draw(|frame| app.render(frame))?;

        if !event::poll(TICK_RATE)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if app.handle_key(key, Instant::now()) == KeyResult::Quit {
                    break;
                }
            }
            // Resize is picked up by the next draw
            _ => {}
        }
    }

    tracing::info!("Terminal UI stopped");
    Ok(())
}
