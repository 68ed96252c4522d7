//! Capturing log content from piped stdin or an external editor

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::Path;
use std::process::{Command, Stdio};

use anyhow::{Context, Result, bail};
use log::debug;
use tempfile::Builder;

/// Where the content of a log entry came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureSource {
    /// Data was piped into stdin
    Stdin,
    /// Interactive session; the user wrote the entry in an editor
    Editor,
}

/// Captured log content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Captured {
    pub source: CaptureSource,
    pub text: String,
}

impl Captured {
    /// Whitespace-only content counts as empty
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Capture content from stdin if it is piped, otherwise from `editor`
pub fn capture_content(editor: &str) -> Result<Captured> {
    let stdin = io::stdin();
    if !stdin.is_terminal() {
        let text = read_all(stdin.lock()).context("Failed to read piped input")?;
        debug!("Captured {} bytes from stdin", text.len());
        return Ok(Captured { source: CaptureSource::Stdin, text });
    }

    let text = capture_with_editor(editor)?;
    Ok(Captured { source: CaptureSource::Editor, text })
}

/// Read the rest of a stream as text, replacing invalid UTF-8
pub fn read_all(mut reader: impl Read) -> io::Result<String> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Open `editor` on an empty temp file and return what was saved
///
/// The editor's exit status is ignored; only the file content matters.
/// The temp file is removed when this returns.
pub fn capture_with_editor(editor: &str) -> Result<String> {
    let temp = Builder::new()
        .suffix(".tmp")
        .tempfile()
        .context("Failed to create temp file for editor")?;

    run_editor(editor, temp.path())?;

    let text = fs::read_to_string(temp.path())
        .with_context(|| format!("Failed to read editor output: {}", temp.path().display()))?;
    debug!("Captured {} bytes from editor '{}'", text.len(), editor);
    Ok(text)
}

fn run_editor(editor: &str, path: &Path) -> Result<()> {
    // EDITOR may carry arguments, e.g. "code --wait", and quoted paths with spaces
    let parts = shlex::split(editor).unwrap_or_default();
    let Some((program, args)) = parts.split_first() else {
        bail!("Invalid editor command '{}'", editor);
    };

    let status = Command::new(program)
        .args(args)
        .arg(path)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .with_context(|| format!("Failed to launch editor '{}'", editor))?;

    debug!("Editor exited with {}", status);
    Ok(())
}
