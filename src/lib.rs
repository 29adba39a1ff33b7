//! tt-badger: print GitHub Actions badge markdown for tt-metal workflows and dispatch them.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use std::io::Write;

use adapters::{GitHubCommandAdapter, SelectionFileStore};
use app::AppContext;
use app::commands::badges;

pub use app::commands::badges::{BadgeOptions, BadgeOutcome};
pub use app::commands::dispatch::{DispatchReport, DispatchSummary};
pub use domain::{AppError, Catalog, Selection, WorkflowEntry, badge_markdown};

/// Print badges for `branch` without any interaction.
///
/// `select` holds digits to flip on top of the default selection. The result is saved
/// to the per-user selection file like an interactive run.
pub fn print_badges<W: Write>(
    catalog: Catalog,
    branch: &str,
    select: Option<&str>,
    out: &mut W,
) -> Result<Selection, AppError> {
    let ctx =
        AppContext::new(catalog, SelectionFileStore::for_current_user(), GitHubCommandAdapter::new());
    let options = BadgeOptions { branch: branch.to_string(), select: select.map(str::to_string) };
    let keys: Option<&mut adapters::TerminalKeyReader> = None;
    match badges::execute(&ctx, &options, keys, out)? {
        BadgeOutcome::Printed { selection, .. } => Ok(selection),
        BadgeOutcome::Aborted => {
            Err(AppError::config_error("badge selection was cancelled"))
        }
    }
}
