use std::env;
use std::path::{Component, Path};

use anyhow::{Result, bail};

/// Validates that a target name can be used as a single directory name
///
/// # Errors
///
/// Returns an error if the name:
/// - Is empty or whitespace only
/// - Contains a path separator or is `.`/`..`
/// - Contains control characters
pub fn validate_target_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        bail!("Target name cannot be empty");
    }

    if name.chars().any(|c| c.is_control()) {
        bail!("Target name contains control characters: {:?}", name);
    }

    if name.contains('/') || name.contains('\\') {
        bail!("Target name cannot contain path separators: {}", name);
    }

    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => bail!("Target name must be a plain directory name: {}", name),
    }
}

/// Formats a path with ~ substitution for the home directory
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
/// use pentest_notes::utils::format_path_with_tilde;
///
/// let path = PathBuf::from("/home/alice/oscp-notes/DC01/DC01.md");
/// // Returns "~/oscp-notes/DC01/DC01.md" if HOME=/home/alice
/// let formatted = format_path_with_tilde(&path);
/// ```
pub fn format_path_with_tilde(path: &Path) -> String {
    format_path_with_tilde_internal(path, None)
}

/// Internal helper for path formatting with optional home override (for testing)
///
/// Home must match whole path components, so `/home/al` does not shorten `/home/alice`.
pub(crate) fn format_path_with_tilde_internal(path: &Path, home_override: Option<&str>) -> String {
    let home_from_env = env::var("HOME").ok();
    let home = home_override.or(home_from_env.as_deref()).filter(|home| !home.is_empty());

    match home.and_then(|home| path.strip_prefix(home).ok()) {
        Some(rest) if rest.as_os_str().is_empty() => "~".to_string(),
        Some(rest) => format!("~/{}", rest.to_string_lossy()),
        None => path.to_string_lossy().into_owned(),
    }
}
