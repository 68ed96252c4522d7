use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::workspace::ATTACHMENTS_DIR;

/// The currently selected target, as stored on disk between invocations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveContext {
    pub name: String,
    /// Path to the target's markdown note file
    pub path: PathBuf,
    #[serde(default)]
    pub ip: Option<String>,
}

impl ActiveContext {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>, ip: Option<String>) -> Self {
        Self { name: name.into(), path: path.into(), ip }
    }

    /// Directory holding the note file
    pub fn workspace_dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }

    /// Attachments folder next to the note file
    pub fn attachments_dir(&self) -> PathBuf {
        self.workspace_dir().join(ATTACHMENTS_DIR)
    }
}
