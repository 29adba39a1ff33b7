use std::io::ErrorKind;
use std::process::{Command, Output};

use tracing::debug;

use crate::domain::AppError;
use crate::ports::WorkflowRunner;

const GH: &str = "gh";

/// Dispatches workflows through the `gh` CLI found on PATH.
#[derive(Debug, Clone)]
pub struct GitHubCommandAdapter {
    program: String,
}

impl Default for GitHubCommandAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl GitHubCommandAdapter {
    pub fn new() -> Self {
        Self { program: GH.to_string() }
    }

    /// Use a different executable, e.g. a wrapper script.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self { program: program.into() }
    }

    fn run_gh(&self, args: &[&str]) -> Result<Output, AppError> {
        debug!(program = %self.program, ?args, "running gh");
        Command::new(&self.program).args(args).output().map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                AppError::ToolNotFound { tool: GH.into() }
            } else {
                AppError::ExternalToolError {
                    tool: GH.into(),
                    error: format!("Failed to execute gh CLI: {}", e),
                }
            }
        })
    }
}

fn diagnostic(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stderr = stderr.trim();
    if !stderr.is_empty() {
        return stderr.to_string();
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    match stdout.trim() {
        "" => format!("exited with {}", output.status),
        text => text.to_string(),
    }
}

impl WorkflowRunner for GitHubCommandAdapter {
    fn check_ready(&self) -> Result<(), AppError> {
        let output = self.run_gh(&["auth", "status"])?;
        if !output.status.success() {
            return Err(AppError::ToolNotAuthenticated {
                tool: GH.into(),
                details: diagnostic(&output),
            });
        }
        Ok(())
    }

    fn dispatch_workflow(&self, repo: &str, workflow: &str, branch: &str) -> Result<(), AppError> {
        let output =
            self.run_gh(&["workflow", "run", workflow, "--repo", repo, "--ref", branch])?;

        if !output.status.success() {
            return Err(AppError::ExternalToolError {
                tool: GH.into(),
                error: diagnostic(&output),
            });
        }

        Ok(())
    }
}
