use std::cell::RefCell;

use crate::domain::{AppError, Selection};
use crate::ports::SelectionStore;

/// In-memory selection store.
#[derive(Debug, Default)]
pub struct MemorySelectionStore {
    pub saved: RefCell<Option<Vec<bool>>>,
    pub fail_saves: bool,
}

impl MemorySelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_saved(flags: Vec<bool>) -> Self {
        Self { saved: RefCell::new(Some(flags)), fail_saves: false }
    }

    pub fn failing() -> Self {
        Self { saved: RefCell::new(None), fail_saves: true }
    }

    pub fn saved_flags(&self) -> Option<Vec<bool>> {
        self.saved.borrow().clone()
    }
}

impl SelectionStore for MemorySelectionStore {
    fn load(&self, len: usize) -> Option<Selection> {
        self.saved.borrow().clone().map(|flags| Selection::normalized(flags, len))
    }

    fn save(&self, selection: &Selection) -> Result<(), AppError> {
        if self.fail_saves {
            return Err(AppError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only home",
            )));
        }
        *self.saved.borrow_mut() = Some(selection.as_slice().to_vec());
        Ok(())
    }
}
