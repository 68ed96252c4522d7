//! Data models for target workspaces and the active context.
//!
//! - [`ActiveContext`] - The persisted pointer to the target subsequent commands affect
//! - [`Workspace`] - Directory layout of a single target (note file + attachments)

pub mod context;
pub mod workspace;

pub use context::ActiveContext;
pub use workspace::{ATTACHMENTS_DIR, Workspace};
