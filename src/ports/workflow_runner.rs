use crate::domain::AppError;

/// Port for triggering remote workflow runs.
pub trait WorkflowRunner {
    /// Verify the runner can dispatch at all (tool installed and authenticated).
    fn check_ready(&self) -> Result<(), AppError>;

    /// Request one run of `workflow` in `repo` against `branch`, without waiting for it.
    fn dispatch_workflow(&self, repo: &str, workflow: &str, branch: &str) -> Result<(), AppError>;
}
