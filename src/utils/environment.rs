use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Overrides the directory holding one folder per target
pub const ROOT_ENV: &str = "OSCP_NOTES_ROOT";
/// Overrides the active context state file location
pub const STATE_ENV: &str = "OSCP_NOTES_STATE";

const DEFAULT_ROOT_DIR: &str = "oscp-notes";
const DEFAULT_STATE_FILE: &str = ".oscp_note_state";
const DEFAULT_EDITOR: &str = "nano";

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().context("Could not determine home directory")
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Get the notes root directory (`--root` / `$OSCP_NOTES_ROOT`, else `~/oscp-notes`)
pub fn get_notes_root(cli_root: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(root) = cli_root {
        return Ok(root);
    }
    if let Some(root) = non_empty_var(ROOT_ENV) {
        return Ok(PathBuf::from(root));
    }
    Ok(home_dir()?.join(DEFAULT_ROOT_DIR))
}

/// Get the state file path (`$OSCP_NOTES_STATE`, else `~/.oscp_note_state`)
pub fn get_state_file() -> Result<PathBuf> {
    if let Some(path) = non_empty_var(STATE_ENV) {
        return Ok(PathBuf::from(path));
    }
    Ok(home_dir()?.join(DEFAULT_STATE_FILE))
}

/// Get the editor used for interactive log capture (`$EDITOR`, else `nano`)
pub fn get_editor() -> String {
    non_empty_var("EDITOR").unwrap_or_else(|| DEFAULT_EDITOR.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_root_takes_precedence() {
        let root = get_notes_root(Some(PathBuf::from("/engagement/notes"))).unwrap();
        assert_eq!(root, PathBuf::from("/engagement/notes"));
    }

    #[test]
    fn test_env_overrides() {
        // Save original values
        let original_root = env::var(ROOT_ENV).ok();
        let original_state = env::var(STATE_ENV).ok();

        // SAFETY: Setting environment variables in tests is safe as long as:
        // 1. No other test in this crate reads these variables
        // 2. We restore the original values afterwards
        unsafe {
            env::set_var(ROOT_ENV, "/tmp/notes-root");
            env::set_var(STATE_ENV, "/tmp/notes-state.json");
        }

        assert_eq!(get_notes_root(None).unwrap(), PathBuf::from("/tmp/notes-root"));
        assert_eq!(get_state_file().unwrap(), PathBuf::from("/tmp/notes-state.json"));

        // Restore
        unsafe {
            match original_root {
                Some(v) => env::set_var(ROOT_ENV, v),
                None => env::remove_var(ROOT_ENV),
            }
            match original_state {
                Some(v) => env::set_var(STATE_ENV, v),
                None => env::remove_var(STATE_ENV),
            }
        }
    }
}
