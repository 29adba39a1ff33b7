//! Sequential workflow dispatch with a success/failure summary.

use std::io::Write;

use tracing::{debug, info};

use crate::app::AppContext;
use crate::domain::{AppError, Selection};
use crate::ports::{SelectionStore, WorkflowRunner};

/// What to do with the selected workflows after badges are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchDecision {
    Skip,
    Immediately,
    AskUser,
}

pub fn decide(selection: &Selection, run_requested: bool, interactive: bool) -> DispatchDecision {
    if !selection.any_selected() {
        DispatchDecision::Skip
    } else if run_requested {
        DispatchDecision::Immediately
    } else if interactive {
        DispatchDecision::AskUser
    } else {
        DispatchDecision::Skip
    }
}

/// Only `y` and `yes` (any case) count as agreement.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchSummary {
    pub succeeded: usize,
    pub failed: usize,
}

#[derive(Debug)]
pub enum DispatchReport {
    /// The runner could not be used; nothing was attempted.
    Unavailable(AppError),
    Completed(DispatchSummary),
}

impl DispatchReport {
    pub fn is_success(&self) -> bool {
        matches!(self, DispatchReport::Completed(summary) if summary.failed == 0)
    }
}

/// Dispatch every selected workflow in catalog order.
///
/// A failing workflow is reported and counted; later workflows are still attempted.
/// Only errors writing to `out` are returned.
pub fn execute<S, R, W>(
    ctx: &AppContext<S, R>,
    selection: &Selection,
    branch: &str,
    out: &mut W,
) -> Result<DispatchReport, AppError>
where
    S: SelectionStore,
    R: WorkflowRunner,
    W: Write,
{
    if let Err(err) = ctx.runner().check_ready() {
        debug!(%err, "workflow runner unavailable");
        writeln!(out, "❌ Cannot dispatch workflows: {}", err)?;
        return Ok(DispatchReport::Unavailable(err));
    }

    let catalog = ctx.catalog();
    let mut summary = DispatchSummary::default();

    for (idx, entry) in catalog.entries().iter().enumerate() {
        if !selection.is_selected(idx) {
            continue;
        }
        match ctx.runner().dispatch_workflow(catalog.repo(), &entry.file, branch) {
            Ok(()) => {
                info!(workflow = %entry.file, branch, "dispatched");
                summary.succeeded += 1;
                writeln!(out, "✅ Dispatched {} ({})", entry.title, entry.file)?;
            }
            Err(err) => {
                debug!(workflow = %entry.file, branch, %err, "dispatch failed");
                summary.failed += 1;
                writeln!(out, "❌ Failed to dispatch {} ({}): {}", entry.title, entry.file, err)?;
            }
        }
    }

    writeln!(
        out,
        "Dispatch summary: {} succeeded, {} failed.",
        summary.succeeded, summary.failed
    )?;
    Ok(DispatchReport::Completed(summary))
}
