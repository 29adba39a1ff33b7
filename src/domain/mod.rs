pub mod badge;
pub mod catalog;
pub mod error;
pub mod selection;

pub use badge::badge_markdown;
pub use catalog::{Catalog, DEFAULT_REPO, MAX_ENTRIES, WorkflowEntry};
pub use error::AppError;
pub use selection::Selection;
