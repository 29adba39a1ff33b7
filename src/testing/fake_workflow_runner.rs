use std::cell::RefCell;

use crate::domain::AppError;
use crate::ports::WorkflowRunner;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunnerState {
    #[default]
    Ready,
    Missing,
    Unauthenticated,
}

/// Records dispatches; workflows listed in `failing` are rejected.
#[derive(Debug, Default)]
pub struct FakeWorkflowRunner {
    pub state: RunnerState,
    pub failing: Vec<String>,
    pub dispatched: RefCell<Vec<(String, String, String)>>,
}

impl FakeWorkflowRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(workflows: &[&str]) -> Self {
        Self { failing: workflows.iter().map(|w| w.to_string()).collect(), ..Self::default() }
    }

    pub fn in_state(state: RunnerState) -> Self {
        Self { state, ..Self::default() }
    }

    pub fn attempted_workflows(&self) -> Vec<String> {
        self.dispatched.borrow().iter().map(|(_, workflow, _)| workflow.clone()).collect()
    }
}

impl WorkflowRunner for FakeWorkflowRunner {
    fn check_ready(&self) -> Result<(), AppError> {
        match self.state {
            RunnerState::Ready => Ok(()),
            RunnerState::Missing => Err(AppError::ToolNotFound { tool: "gh".into() }),
            RunnerState::Unauthenticated => Err(AppError::ToolNotAuthenticated {
                tool: "gh".into(),
                details: "not logged in".into(),
            }),
        }
    }

    fn dispatch_workflow(&self, repo: &str, workflow: &str, branch: &str) -> Result<(), AppError> {
        self.dispatched.borrow_mut().push((repo.into(), workflow.into(), branch.into()));
        if self.failing.iter().any(|w| w == workflow) {
            return Err(AppError::ExternalToolError {
                tool: "gh".into(),
                error: format!("could not find workflow {workflow}"),
            });
        }
        Ok(())
    }
}
