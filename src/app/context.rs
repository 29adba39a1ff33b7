use crate::domain::Catalog;
use crate::ports::{SelectionStore, WorkflowRunner};

/// Application context holding dependencies for command execution.
pub struct AppContext<S: SelectionStore, R: WorkflowRunner> {
    catalog: Catalog,
    store: S,
    runner: R,
}

impl<S: SelectionStore, R: WorkflowRunner> AppContext<S, R> {
    /// Create a new application context.
    pub fn new(catalog: Catalog, store: S, runner: R) -> Self {
        Self { catalog, store, runner }
    }

    /// Get the workflow catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Get a reference to the selection store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get a reference to the workflow runner.
    pub fn runner(&self) -> &R {
        &self.runner
    }
}
