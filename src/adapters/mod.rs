pub mod github_command;
pub mod selection_file_store;
pub mod terminal_key_reader;

pub use github_command::GitHubCommandAdapter;
pub use selection_file_store::{STATE_FILE_NAME, SelectionFileStore};
pub use terminal_key_reader::TerminalKeyReader;
