//! State persistence: load/save of the active context

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, warn};

use crate::models::ActiveContext;

/// Load the active context from `state_file`
/// Returns None if the file is missing, unreadable, or not valid JSON (caller reports "no context")
pub fn load_context(state_file: &Path) -> Option<ActiveContext> {
    if !state_file.exists() {
        debug!("No state file at {}", state_file.display());
        return None;
    }

    let raw = match fs::read_to_string(state_file) {
        Ok(raw) => raw,
        Err(e) => {
            warn!("Failed to read state file {}: {}", state_file.display(), e);
            return None;
        }
    };

    match serde_json::from_str::<ActiveContext>(&raw) {
        Ok(ctx) => Some(ctx),
        Err(e) => {
            warn!("Ignoring corrupt state file {}: {}", state_file.display(), e);
            None
        }
    }
}

/// Save the active context to `state_file`, replacing any previous content
pub fn save_context(state_file: &Path, ctx: &ActiveContext) -> Result<()> {
    if let Some(parent) = state_file.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).context("Failed to create state directory")?;
    }

    let json = serde_json::to_string(ctx).context("Failed to serialize active context")?;
    fs::write(state_file, json)
        .with_context(|| format!("Failed to write state file: {}", state_file.display()))?;

    debug!("Saved context '{}' to {}", ctx.name, state_file.display());
    Ok(())
}
