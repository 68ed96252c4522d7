pub mod environment;
pub mod paths;

pub use environment::{get_editor, get_notes_root, get_state_file};
pub use paths::{format_path_with_tilde, validate_target_name};
