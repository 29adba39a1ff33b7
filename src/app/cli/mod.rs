//! CLI Adapter.

use std::io::{self, BufRead, ErrorKind};
use std::path::PathBuf;

use clap::Parser;
use dialoguer::{Error as DialoguerError, Input};
use tracing_subscriber::EnvFilter;

use crate::adapters::{GitHubCommandAdapter, SelectionFileStore, TerminalKeyReader};
use crate::app::AppContext;
use crate::app::commands::badges::{self, ABORTED, BadgeOptions, BadgeOutcome};
use crate::app::commands::dispatch::{self, DispatchDecision};
use crate::app::config::load_catalog;
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "tt-badger")]
#[command(version)]
#[command(
    about = "Print tt-metal workflow badge markdown and optionally dispatch the workflows",
    long_about = None
)]
struct Cli {
    /// Branch name (e.g., main or feature/foo)
    #[arg(short, long)]
    branch: Option<String>,
    /// Digits (1-9, 0 for last) to pre-toggle and skip interaction
    #[arg(short, long)]
    select: Option<String>,
    /// Dispatch the selected workflows on the branch without asking
    #[arg(long)]
    run: bool,
    /// TOML file with the repository and workflow list to use instead of the built-in one
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Entry point for the CLI.
pub fn run() {
    init_tracing();
    let cli = Cli::parse();

    match run_badger(cli) {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run_badger(cli: Cli) -> Result<i32, AppError> {
    let catalog = load_catalog(cli.config.as_deref())?;
    let mut keys = TerminalKeyReader::detect();
    let interactive = keys.is_some();

    let Some(branch) = resolve_branch(cli.branch, interactive)? else {
        println!("\n{ABORTED}");
        return Ok(0);
    };

    let ctx = AppContext::new(
        catalog,
        SelectionFileStore::for_current_user(),
        GitHubCommandAdapter::new(),
    );
    let options = BadgeOptions { branch, select: cli.select };
    let mut stdout = io::stdout();

    let selection = match badges::execute(&ctx, &options, keys.as_mut(), &mut stdout)? {
        BadgeOutcome::Aborted => return Ok(0),
        BadgeOutcome::Printed { selection, .. } => selection,
    };

    let proceed = match dispatch::decide(&selection, cli.run, interactive) {
        DispatchDecision::Skip => false,
        DispatchDecision::Immediately => true,
        DispatchDecision::AskUser => confirm_dispatch(selection.selected_count(), &options.branch),
    };
    if !proceed {
        return Ok(0);
    }

    let report = dispatch::execute(&ctx, &selection, &options.branch, &mut stdout)?;
    Ok(if report.is_success() { 0 } else { 1 })
}

/// `None` means the prompt was interrupted.
fn resolve_branch(arg: Option<String>, interactive: bool) -> Result<Option<String>, AppError> {
    if let Some(branch) = arg.map(|b| b.trim().to_string()).filter(|b| !b.is_empty()) {
        return Ok(Some(branch));
    }

    if interactive {
        loop {
            match Input::<String>::new()
                .with_prompt("Enter branch name (e.g., main or feature/foo)")
                .interact_text()
            {
                Ok(value) if !value.trim().is_empty() => return Ok(Some(value.trim().to_string())),
                Ok(_) => continue,
                Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => {
                    return Ok(None);
                }
                Err(err) => {
                    return Err(AppError::config_error(format!(
                        "Failed to read branch name: {}",
                        err
                    )));
                }
            }
        }
    }

    for line in io::stdin().lock().lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            return Ok(Some(trimmed.to_string()));
        }
    }
    Err(AppError::BranchRequired)
}

fn confirm_dispatch(count: usize, branch: &str) -> bool {
    Input::<String>::new()
        .with_prompt(format!("Dispatch {count} selected workflow(s) on '{branch}'? [y/N]"))
        .allow_empty(true)
        .interact_text()
        .map(|answer| dispatch::is_affirmative(&answer))
        .unwrap_or(false)
}
