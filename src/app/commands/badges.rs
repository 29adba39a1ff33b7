//! Selection resolution, persistence, and badge output.

use std::io::Write;

use tracing::debug;

use super::menu::{MenuOutcome, ToggleMenu};
use crate::app::AppContext;
use crate::domain::{AppError, Catalog, Selection, badge_markdown};
use crate::ports::{KeyReader, SelectionStore, WorkflowRunner};

pub const NOTHING_SELECTED: &str = "No badges selected. Nothing to output.";
pub const ABORTED: &str = "Aborted.";

#[derive(Debug, Clone, Default)]
pub struct BadgeOptions {
    pub branch: String,
    /// Digits to flip on top of the defaults; skips the menu.
    pub select: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BadgeOutcome {
    /// Badges were printed for `selection` (possibly none).
    Printed { selection: Selection, printed: usize },
    /// The user left the menu without confirming.
    Aborted,
}

/// Resolve the selection, persist it, and print one badge per selected workflow.
///
/// `keys` is present only for interactive sessions.
pub fn execute<S, R, K, W>(
    ctx: &AppContext<S, R>,
    options: &BadgeOptions,
    keys: Option<&mut K>,
    out: &mut W,
) -> Result<BadgeOutcome, AppError>
where
    S: SelectionStore,
    R: WorkflowRunner,
    K: KeyReader,
    W: Write,
{
    let Some(selection) = resolve_selection(ctx, options, keys, out)? else {
        writeln!(out, "\n{ABORTED}")?;
        return Ok(BadgeOutcome::Aborted);
    };

    if let Err(err) = ctx.store().save(&selection) {
        debug!(%err, "selection not saved");
    }

    let printed = print_badges(ctx.catalog(), &selection, &options.branch, out)?;
    Ok(BadgeOutcome::Printed { selection, printed })
}

/// `None` means the user cancelled the menu.
pub fn resolve_selection<S, R, K, W>(
    ctx: &AppContext<S, R>,
    options: &BadgeOptions,
    keys: Option<&mut K>,
    out: &mut W,
) -> Result<Option<Selection>, AppError>
where
    S: SelectionStore,
    R: WorkflowRunner,
    K: KeyReader,
    W: Write,
{
    let catalog = ctx.catalog();

    if let Some(digits) = &options.select {
        let mut selection = Selection::defaults(catalog.len());
        selection.apply_digits(catalog, digits);
        return Ok(Some(selection));
    }

    let Some(keys) = keys else {
        return Ok(Some(Selection::defaults(catalog.len())));
    };

    let initial = ctx
        .store()
        .load(catalog.len())
        .unwrap_or_else(|| Selection::defaults(catalog.len()));

    match ToggleMenu::new(catalog, &options.branch).run(initial, keys, out)? {
        MenuOutcome::Confirmed(selection) => Ok(Some(selection)),
        MenuOutcome::Cancelled => Ok(None),
    }
}

/// Print badges in catalog order followed by a blank line; returns how many were printed.
pub fn print_badges<W: Write>(
    catalog: &Catalog,
    selection: &Selection,
    branch: &str,
    out: &mut W,
) -> Result<usize, AppError> {
    let mut printed = 0;
    for (idx, entry) in catalog.entries().iter().enumerate() {
        if selection.is_selected(idx) {
            writeln!(out, "{}", badge_markdown(catalog.repo(), &entry.file, &entry.title, branch))?;
            printed += 1;
        }
    }
    if printed == 0 {
        writeln!(out, "{NOTHING_SELECTED}")?;
    }
    writeln!(out)?;
    Ok(printed)
}
