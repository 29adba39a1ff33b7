//! Full-screen checkbox menu driven by single keypresses.

use std::io::Write;

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};

use crate::domain::{AppError, Catalog, Selection};
use crate::ports::{Key, KeyReader};

pub const HEADER: &str = "GitHub badge picker (press digits to toggle, Enter to finish)";

/// How the menu session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuOutcome {
    /// Enter was pressed; carries the final selection (possibly all off).
    Confirmed(Selection),
    /// Escape or interrupt; the caller must not treat this as an empty selection.
    Cancelled,
}

pub struct ToggleMenu<'a> {
    catalog: &'a Catalog,
    branch: &'a str,
}

impl<'a> ToggleMenu<'a> {
    pub fn new(catalog: &'a Catalog, branch: &'a str) -> Self {
        Self { catalog, branch }
    }

    /// Redraw after every toggle and wait for Enter, Escape, or an interrupt.
    pub fn run<K, W>(
        &self,
        mut selection: Selection,
        keys: &mut K,
        out: &mut W,
    ) -> Result<MenuOutcome, AppError>
    where
        K: KeyReader,
        W: Write,
    {
        self.render(&selection, out)?;
        loop {
            match keys.read_key()? {
                Key::Enter => return Ok(MenuOutcome::Confirmed(selection)),
                Key::Escape | Key::Interrupt => return Ok(MenuOutcome::Cancelled),
                Key::Char(ch) => {
                    if let Some(idx) = self.catalog.index_for_key(ch) {
                        selection.toggle(idx);
                        self.render(&selection, out)?;
                    }
                }
                Key::Other => {}
            }
        }
    }

    pub fn render<W: Write>(&self, selection: &Selection, out: &mut W) -> Result<(), AppError> {
        queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
        writeln!(out, "{HEADER}\n")?;
        writeln!(out, "Branch: {}\n", self.branch)?;
        for (idx, entry) in self.catalog.entries().iter().enumerate() {
            let mark = if selection.is_selected(idx) { 'X' } else { ' ' };
            writeln!(out, "{}: [{}] {}", self.catalog.label(idx), mark, entry.title)?;
        }
        writeln!(
            out,
            "\nPress {} to toggle tests. Press Enter to generate GitHub badges for selected tests, \
             Esc to cancel.\n",
            key_hint(self.catalog.len())
        )?;
        out.flush()?;
        Ok(())
    }
}

fn key_hint(len: usize) -> String {
    match len {
        1 => "1".to_string(),
        2 => "1 or 0".to_string(),
        n => format!("1-{}, 0", n - 1),
    }
}
