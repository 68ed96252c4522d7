use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};

use super::SECTION_MARKER;

/// List the section headers of a note file in document order
///
/// A line is a header when, after trimming surrounding whitespace, it starts with
/// `## `. The returned text is the rest of the line after that prefix. Duplicates
/// are kept. A missing file yields an empty list.
pub fn headers(file_path: &Path) -> Result<Vec<String>> {
    let text = match fs::read_to_string(file_path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => {
            return Err(e)
                .with_context(|| format!("Failed to read note file: {}", file_path.display()));
        }
    };

    Ok(headers_in(&text))
}

/// Same scan as [`headers`] over in-memory text
pub fn headers_in(text: &str) -> Vec<String> {
    text.lines()
        .filter_map(|line| line.trim().strip_prefix(SECTION_MARKER))
        .map(str::to_string)
        .collect()
}
