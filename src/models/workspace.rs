use std::path::{Path, PathBuf};

/// Name of the per-target screenshot folder
pub const ATTACHMENTS_DIR: &str = "attachments";

/// Filesystem layout of one target: `<root>/<name>/<name>.md` plus `<root>/<name>/attachments/`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    pub name: String,
    pub dir: PathBuf,
}

impl Workspace {
    pub fn new(root: &Path, name: &str) -> Self {
        Self { name: name.to_string(), dir: root.join(name) }
    }

    pub fn note_path(&self) -> PathBuf {
        self.dir.join(format!("{}.md", self.name))
    }

    pub fn attachments_dir(&self) -> PathBuf {
        self.dir.join(ATTACHMENTS_DIR)
    }
}
