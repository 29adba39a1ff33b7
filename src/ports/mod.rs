mod key_reader;
mod selection_store;
mod workflow_runner;

pub use key_reader::{Key, KeyReader};
pub use selection_store::SelectionStore;
pub use workflow_runner::WorkflowRunner;
