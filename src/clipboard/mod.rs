use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result, bail};
use log::debug;

/// Maximum screenshot size (50MB) accepted from the clipboard tool
const MAX_IMAGE_SIZE: usize = 50 * 1024 * 1024;

/// Trait for clipboard image access (allows mocking in tests)
pub trait ClipboardProvider {
    /// Read the clipboard content as PNG bytes
    fn read_png(&mut self) -> Result<Vec<u8>>;
}

/// External programs able to dump a clipboard PNG to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardTool {
    /// X11: `xclip -selection clipboard -t image/png -o`
    Xclip,
    /// Wayland: `wl-paste --type image/png`
    WlPaste,
}

impl ClipboardTool {
    pub fn program(self) -> &'static str {
        match self {
            Self::Xclip => "xclip",
            Self::WlPaste => "wl-paste",
        }
    }

    pub fn args(self) -> &'static [&'static str] {
        match self {
            Self::Xclip => &["-selection", "clipboard", "-t", "image/png", "-o"],
            Self::WlPaste => &["--type", "image/png"],
        }
    }

    /// Find the first installed tool, preferring xclip
    pub fn detect() -> Option<(Self, PathBuf)> {
        [Self::Xclip, Self::WlPaste]
            .into_iter()
            .find_map(|tool| which::which(tool.program()).ok().map(|path| (tool, path)))
    }
}

/// Real clipboard implementation running an external dumper process
pub struct CommandClipboard {
    tool: ClipboardTool,
    program: PathBuf,
}

impl CommandClipboard {
    /// Locate a clipboard tool on PATH
    ///
    /// # Errors
    /// Returns an error with an install hint if neither xclip nor wl-paste is found.
    pub fn new() -> Result<Self> {
        match ClipboardTool::detect() {
            Some((tool, program)) => {
                debug!("Using clipboard tool {}", program.display());
                Ok(Self { tool, program })
            }
            None => bail!("[!] xclip not installed. Run: sudo apt install xclip"),
        }
    }
}

impl ClipboardProvider for CommandClipboard {
    fn read_png(&mut self) -> Result<Vec<u8>> {
        let output = Command::new(&self.program)
            .args(self.tool.args())
            .output()
            .with_context(|| format!("Failed to run {}", self.tool.program()))?;

        if !output.status.success() {
            debug!(
                "{} exited with {}: {}",
                self.tool.program(),
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
            bail!("[!] Failed to grab image. Is there an image in your clipboard?");
        }

        Ok(output.stdout)
    }
}

/// Validates clipboard image bytes before they are written
fn validate_image(bytes: &[u8]) -> Result<()> {
    if bytes.is_empty() {
        bail!("[!] Failed to grab image. Clipboard returned no data");
    }

    if bytes.len() > MAX_IMAGE_SIZE {
        bail!("Clipboard image too large ({} bytes, max {})", bytes.len(), MAX_IMAGE_SIZE);
    }

    Ok(())
}

/// Read a PNG from `provider` and save it as `attachments_dir/filename`
///
/// Returns the written path. If writing fails, any partial file is removed.
///
/// # Errors
/// Returns error if:
/// - The clipboard tool fails or returns no data
/// - The image exceeds the size limit
/// - The attachments directory cannot be created or the file cannot be written
pub fn save_screenshot(
    provider: &mut dyn ClipboardProvider,
    attachments_dir: &Path,
    filename: &str,
) -> Result<PathBuf> {
    let bytes = provider.read_png()?;
    validate_image(&bytes)?;

    fs::create_dir_all(attachments_dir).with_context(|| {
        format!("Failed to create attachments directory: {}", attachments_dir.display())
    })?;

    let dest = attachments_dir.join(filename);
    if let Err(e) = fs::write(&dest, &bytes) {
        // Best effort cleanup of a partial file
        let _ = fs::remove_file(&dest);
        return Err(e).with_context(|| format!("Failed to write screenshot: {}", dest.display()));
    }

    debug!("Wrote {} bytes to {}", bytes.len(), dest.display());
    Ok(dest)
}
