//! Workflow catalog loading.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::domain::{AppError, Catalog, DEFAULT_REPO, WorkflowEntry};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    repo: Option<String>,
    #[serde(default)]
    workflows: Vec<WorkflowEntry>,
}

/// Load the catalog from a TOML file, or the built-in catalog when no path is given.
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog, AppError> {
    let Some(path) = path else {
        return Ok(Catalog::builtin());
    };
    let content = fs::read_to_string(path).map_err(|e| {
        AppError::config_error(format!("Failed to read config {}: {}", path.display(), e))
    })?;
    parse_catalog(&content)
}

/// Parse catalog TOML:
///
/// ```toml
/// repo = "owner/name"
///
/// [[workflows]]
/// title = "CI"
/// file = "ci.yaml"
/// ```
///
/// `repo` defaults to the tt-metal repository.
pub fn parse_catalog(content: &str) -> Result<Catalog, AppError> {
    let file: CatalogFile = toml::from_str(content)?;
    let repo = file.repo.unwrap_or_else(|| DEFAULT_REPO.to_string());
    Catalog::new(repo, file.workflows)
}
