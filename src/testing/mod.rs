mod fake_workflow_runner;
mod memory_selection_store;

pub use fake_workflow_runner::{FakeWorkflowRunner, RunnerState};
pub use memory_selection_store::MemorySelectionStore;
pub use scripted_keys::ScriptedKeys;

use crate::domain::{Catalog, WorkflowEntry};

/// Catalog with `n` entries titled `W0..` and files `w0.yaml..`.
pub fn catalog_of(n: usize) -> Catalog {
    let entries =
        (0..n).map(|i| WorkflowEntry::new(format!("W{i}"), format!("w{i}.yaml"))).collect();
    Catalog::new("org/repo", entries).expect("test catalog is valid")
}
