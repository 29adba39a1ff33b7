use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{AppError, Selection};
use crate::ports::SelectionStore;

/// File name of the per-user selection record, placed in the home directory.
pub const STATE_FILE_NAME: &str = ".tt-badges.json";

#[derive(Debug, Serialize, Deserialize)]
struct SelectionRecord {
    #[serde(default)]
    selected: Vec<bool>,
}

/// JSON-file selection store (`{"selected": [true, false, ...]}`).
///
/// A store without a path (no home directory) loads nothing and saves nothing.
#[derive(Debug, Clone)]
pub struct SelectionFileStore {
    path: Option<PathBuf>,
}

impl SelectionFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: Some(path.into()) }
    }

    /// Store at `~/.tt-badges.json`, or a disabled store when no home is known.
    pub fn for_current_user() -> Self {
        Self { path: resolve_home_dir().map(|home| home.join(STATE_FILE_NAME)) }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

fn resolve_home_dir() -> Option<PathBuf> {
    ["HOME", "USERPROFILE"].into_iter().find_map(|var| {
        std::env::var(var)
            .ok()
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    })
}

impl SelectionStore for SelectionFileStore {
    fn load(&self, len: usize) -> Option<Selection> {
        let path = self.path.as_ref()?;
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                debug!(path = %path.display(), %err, "no saved selection");
                return None;
            }
        };
        match serde_json::from_str::<SelectionRecord>(&content) {
            Ok(record) => Some(Selection::normalized(record.selected, len)),
            Err(err) => {
                debug!(path = %path.display(), %err, "ignoring unreadable selection record");
                None
            }
        }
    }

    fn save(&self, selection: &Selection) -> Result<(), AppError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let record = SelectionRecord { selected: selection.as_slice().to_vec() };
        let json = serde_json::to_string(&record).map_err(|e| AppError::ParseError {
            what: "selection record".into(),
            details: e.to_string(),
        })?;
        fs::write(path, json)?;
        Ok(())
    }
}
