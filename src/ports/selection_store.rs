use crate::domain::{AppError, Selection};

/// Port for the last-used selection.
pub trait SelectionStore {
    /// Load the saved selection fitted to `len` entries.
    ///
    /// Missing and unreadable records both yield `None`.
    fn load(&self, len: usize) -> Option<Selection>;

    /// Persist the selection, replacing any previous record.
    fn save(&self, selection: &Selection) -> Result<(), AppError>;
}
