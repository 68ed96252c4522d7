use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::debug;

use super::SECTION_MARKER;

/// Insert `content` at the end of the section named `header_name` in a note file
///
/// The file is read fully, modified in memory with [`insert_into_text`], and rewritten.
/// The rewrite is not atomic.
///
/// # Errors
///
/// Returns an error if the file cannot be read or written.
pub fn insert_into_section(file_path: &Path, header_name: &str, content: &str) -> Result<()> {
    let original = fs::read_to_string(file_path)
        .with_context(|| format!("Failed to read note file: {}", file_path.display()))?;

    let updated = insert_into_text(&original, header_name, content);

    fs::write(file_path, &updated)
        .with_context(|| format!("Failed to write note file: {}", file_path.display()))?;

    debug!(
        "Inserted {} bytes into section '{}' of {}",
        updated.len() - original.len(),
        header_name,
        file_path.display()
    );
    Ok(())
}

/// Insert `content` at the end of section `header_name` within `text`
///
/// - The target is the first line whose trimmed form equals `## {header_name}`
///   (case-sensitive). If there is none, a new header line is appended at the end.
/// - The section ends at the next line starting with `## `, or at end of text.
/// - `content` is written just before that point, wrapped in a leading and trailing newline.
///
/// Every byte outside the inserted block is kept as-is, including line endings.
pub fn insert_into_text(text: &str, header_name: &str, content: &str) -> String {
    let target_line = format!("{SECTION_MARKER}{header_name}");
    let mut lines: Vec<String> = text.split_inclusive('\n').map(str::to_string).collect();

    let target_index = match lines.iter().position(|line| line.trim() == target_line) {
        Some(index) => index,
        None => {
            lines.push(format!("\n{target_line}\n"));
            lines.len() - 1
        }
    };

    let insert_index = lines
        .iter()
        .enumerate()
        .skip(target_index + 1)
        .find(|(_, line)| line.starts_with(SECTION_MARKER))
        .map(|(index, _)| index)
        .unwrap_or(lines.len());

    lines.insert(insert_index, format!("\n{content}\n"));
    lines.concat()
}
