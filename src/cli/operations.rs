//! Target switching, logging, and screenshot operations
//!
//! These take every path and the active context explicitly; the command handlers in
//! [`super::commands`] resolve configuration and do the printing.

use std::fmt::Display;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use chrono::{DateTime, TimeZone};
use log::debug;

use crate::clipboard::{ClipboardProvider, save_screenshot};
use crate::markdown::DEFAULT_SECTION;
use crate::markdown::formatter::{format_log_entry, format_screenshot, screenshot_filename};
use crate::markdown::inserter::insert_into_section;
use crate::markdown::template::render_template;
use crate::models::{ActiveContext, Workspace};
use crate::state::{load_context, save_context};
use crate::utils::validate_target_name;

/// Result of switching to a target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchOutcome {
    pub context: ActiveContext,
    /// True if the note file was created by this switch
    pub created: bool,
}

/// Create or select the workspace for `name` and make it the active context
///
/// A new workspace gets `attachments/` and a note rendered from the template.
/// Existing notes are never overwritten.
pub fn switch_target(
    root: &Path,
    state_file: &Path,
    name: &str,
    ip: Option<&str>,
    os: Option<&str>,
) -> Result<SwitchOutcome> {
    validate_target_name(name)?;

    let workspace = Workspace::new(root, name);
    let note_path = workspace.note_path();

    fs::create_dir_all(workspace.attachments_dir()).with_context(|| {
        format!("Failed to create workspace: {}", workspace.dir.display())
    })?;

    let created = !note_path.exists();
    if created {
        fs::write(&note_path, render_template(name, ip, os))
            .with_context(|| format!("Failed to create note file: {}", note_path.display()))?;
        debug!("Created note {}", note_path.display());
    }

    let context = ActiveContext::new(name, note_path, ip.map(str::to_string));
    save_context(state_file, &context)?;

    Ok(SwitchOutcome { context, created })
}

/// Load the active context and check that its note file still exists
///
/// `no_context_message` is the error reported when nothing is selected.
pub fn require_context(state_file: &Path, no_context_message: &str) -> Result<ActiveContext> {
    let Some(context) = load_context(state_file) else {
        bail!("{}", no_context_message);
    };

    if !context.path.exists() {
        bail!("[!] Note file not found at {}", context.path.display());
    }

    Ok(context)
}

/// Format `body` as a log entry and append it to `section` of the context's note
pub fn append_log<Tz>(
    context: &ActiveContext,
    section: &str,
    caption: &str,
    body: &str,
    now: DateTime<Tz>,
) -> Result<()>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let entry = format_log_entry(caption, body, now);
    insert_into_section(&context.path, section, &entry)
}

/// Save the clipboard image into the context's attachments and link it under `DUMP`
///
/// Returns the screenshot file name.
pub fn take_screenshot<Tz>(
    context: &ActiveContext,
    provider: &mut dyn ClipboardProvider,
    caption: &str,
    now: DateTime<Tz>,
) -> Result<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let filename = screenshot_filename(&context.name, now);
    save_screenshot(provider, &context.attachments_dir(), &filename)?;
    insert_into_section(&context.path, DEFAULT_SECTION, &format_screenshot(caption, &filename))?;
    Ok(filename)
}
