use crate::domain::AppError;

/// One keypress, reduced to what the toggle menu cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Escape,
    /// Ctrl+C or an equivalent interrupt request.
    Interrupt,
    Char(char),
    Other,
}

/// Port for reading single keypresses without waiting for a line terminator.
pub trait KeyReader {
    /// Block until the next keypress arrives.
    fn read_key(&mut self) -> Result<Key, AppError>;
}
