use std::io::IsTerminal;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use tracing::debug;

use crate::domain::AppError;
use crate::ports::{Key, KeyReader};

/// Reads keypresses from the controlling terminal in raw mode.
#[derive(Debug)]
pub struct TerminalKeyReader {
    _private: (),
}

impl TerminalKeyReader {
    /// Returns a reader only when both stdin and stdout are terminals.
    pub fn detect() -> Option<Self> {
        (std::io::stdin().is_terminal() && std::io::stdout().is_terminal())
            .then_some(Self { _private: () })
    }
}

/// Restores cooked mode when dropped, including on early return.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> Result<Self, AppError> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

impl KeyReader for TerminalKeyReader {
    fn read_key(&mut self) -> Result<Key, AppError> {
        let _raw = RawModeGuard::enable()?;
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                let translated = translate(key);
                debug!(code = ?key.code, ?translated, "key");
                return Ok(translated);
            }
        }
    }
}

pub(crate) fn translate(key: KeyEvent) -> Key {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), m) if m.contains(KeyModifiers::CONTROL) => Key::Interrupt,
        (KeyCode::Enter, _) => Key::Enter,
        (KeyCode::Char('\r' | '\n'), _) => Key::Enter,
        (KeyCode::Esc, _) => Key::Escape,
        (KeyCode::Char(ch), m) if !m.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            Key::Char(ch)
        }
        _ => Key::Other,
    }
}
