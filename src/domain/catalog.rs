use serde::Deserialize;

use super::AppError;

/// Largest catalog addressable by single digit keys (`1`..`9`, then `0`).
pub const MAX_ENTRIES: usize = 10;

/// Repository whose workflows are badged by default.
pub const DEFAULT_REPO: &str = "tenstorrent/tt-metal";

const DEFAULT_WORKFLOWS: [(&str, &str); MAX_ENTRIES] = [
    ("All post-commit tests", "all-post-commit-workflows.yaml"),
    ("Blackhole post-commit tests", "blackhole-post-commit.yaml"),
    ("(Single-card) Demo tests", "single-card-demo-tests.yaml"),
    ("(Single-card) Model perf tests", "perf-models.yaml"),
    ("(T3K) T3000 demo tests", "t3000-demo-tests.yaml"),
    ("(T3K) T3000 frequent tests", "t3000-frequent-tests.yaml"),
    ("(T3K) T3000 perplexity tests", "t3000-perplexity-tests.yaml"),
    ("(T3K) T3000 unit tests", "t3000-unit-tests.yaml"),
    ("(TG) TG DeepSeek tests", "tg-deepseek-tests.yaml"),
    ("(TG) TG demo all-post-commit tests", "tg-demo-all-post-commit.yaml"),
];

/// A single badge-able workflow.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WorkflowEntry {
    /// Human-readable title, used as badge alt text.
    pub title: String,
    /// Workflow file name under `.github/workflows/`.
    pub file: String,
}

impl WorkflowEntry {
    pub fn new(title: impl Into<String>, file: impl Into<String>) -> Self {
        Self { title: title.into(), file: file.into() }
    }
}

/// Ordered, immutable list of workflows for one repository.
///
/// Guarantees:
/// - Between 1 and [`MAX_ENTRIES`] entries
/// - Repository has the `owner/name` shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    repo: String,
    entries: Vec<WorkflowEntry>,
}

impl Catalog {
    pub fn new(repo: impl Into<String>, entries: Vec<WorkflowEntry>) -> Result<Self, AppError> {
        let repo = repo.into();
        let valid_repo = repo.split_once('/').is_some_and(|(owner, name)| {
            !owner.is_empty() && !name.is_empty() && !name.contains('/')
        });
        if !valid_repo {
            return Err(AppError::InvalidCatalog(format!(
                "repository '{repo}' must look like owner/name"
            )));
        }
        if entries.is_empty() {
            return Err(AppError::InvalidCatalog("at least one workflow is required".into()));
        }
        if entries.len() > MAX_ENTRIES {
            return Err(AppError::InvalidCatalog(format!(
                "{} workflows configured, at most {MAX_ENTRIES} can be toggled by digit keys",
                entries.len()
            )));
        }
        if let Some(entry) = entries.iter().find(|e| e.file.trim().is_empty()) {
            return Err(AppError::InvalidCatalog(format!(
                "workflow '{}' has an empty file name",
                entry.title
            )));
        }
        Ok(Self { repo, entries })
    }

    /// The built-in tt-metal catalog.
    pub fn builtin() -> Self {
        Self {
            repo: DEFAULT_REPO.to_string(),
            entries: DEFAULT_WORKFLOWS
                .iter()
                .map(|(title, file)| WorkflowEntry::new(*title, *file))
                .collect(),
        }
    }

    pub fn repo(&self) -> &str {
        &self.repo
    }

    pub fn entries(&self) -> &[WorkflowEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Map a key to a catalog index.
    ///
    /// `1`..`9` address indices 0..8 when they exist; `0` always addresses the
    /// last entry. With a single entry both `1` and `0` reach it.
    pub fn index_for_key(&self, key: char) -> Option<usize> {
        match key {
            '0' => Some(self.entries.len() - 1),
            '1'..='9' => {
                let idx = key.to_digit(10)? as usize - 1;
                (idx < self.entries.len()).then_some(idx)
            }
            _ => None,
        }
    }

    /// Display label for an index: its 1-based position, or `0` for the last entry.
    pub fn label(&self, idx: usize) -> char {
        let last = self.entries.len() - 1;
        if idx == last && last > 0 {
            return '0';
        }
        char::from_digit((idx + 1) as u32, 10).unwrap_or('?')
    }
}
