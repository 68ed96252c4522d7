//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use assert_cmd::Command;

use tempfile::TempDir;

/// Builder for an isolated notes environment (home, notes root, state file)
pub struct NoteEnvBuilder {
    temp_dir: TempDir,
    targets: Vec<(String, String)>,
    active: Option<String>,
}

impl NoteEnvBuilder {
    /// Create a new builder with an empty home directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir, targets: Vec::new(), active: None }
    }

    /// Add a target workspace whose note file has the given content
    pub fn with_target(mut self, name: &str, note: &str) -> Self {
        self.targets.push((name.to_string(), note.to_string()));
        self
    }

    /// Make `name` the active context
    pub fn with_active(mut self, name: &str) -> Self {
        self.active = Some(name.to_string());
        self
    }

    /// Write everything to disk
    pub fn build(self) -> NoteEnv {
        let env = NoteEnv { temp_dir: self.temp_dir };
        fs::create_dir_all(env.root()).expect("Failed to create notes root");

        for (name, note) in &self.targets {
            let dir = env.root().join(name);
            fs::create_dir_all(dir.join("attachments")).expect("Failed to create workspace");
            fs::write(env.note_path(name), note).expect("Failed to write note");
        }

        if let Some(name) = &self.active {
            let state = format!(
                r#"{{"name":"{}","path":"{}","ip":null}}"#,
                name,
                env.note_path(name).display()
            );
            fs::write(env.state_file(), state).expect("Failed to write state file");
        }

        env
    }
}

impl Default for NoteEnvBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// An isolated notes environment rooted in a temp directory
pub struct NoteEnv {
    temp_dir: TempDir,
}

impl NoteEnv {
    pub fn home(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn root(&self) -> PathBuf {
        self.home().join("notes")
    }

    pub fn state_file(&self) -> PathBuf {
        self.home().join(".oscp_note_state")
    }

    pub fn note_path(&self, name: &str) -> PathBuf {
        self.root().join(name).join(format!("{}.md", name))
    }

    pub fn attachments_dir(&self, name: &str) -> PathBuf {
        self.root().join(name).join("attachments")
    }

    pub fn read_note(&self, name: &str) -> String {
        fs::read_to_string(self.note_path(name)).expect("Failed to read note")
    }

    /// Command for the `note` binary with HOME and overrides pointing into this environment
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_note"));
        cmd.env("HOME", self.home())
            .env("OSCP_NOTES_ROOT", self.root())
            .env("OSCP_NOTES_STATE", self.state_file())
            .env("EDITOR", "true")
            .env_remove("RUST_LOG");
        cmd
    }
}

/// A small note with three sections
pub fn sample_note() -> String {
    "# BOX\n\n## Enumeration\n> scans\n\n## Loot\n> flags\n\n## DUMP\n> raw\n".to_string()
}

/// `n` numbered lines, each newline-terminated
pub fn numbered_lines(n: usize) -> String {
    (1..=n).map(|i| format!("output line {}\n", i)).collect()
}
