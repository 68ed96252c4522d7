//! Line-oriented markdown handling for target notes
//!
//! # Section Model
//!
//! A note is a flat sequence of top-level sections. Each section starts at a line
//! beginning with [`SECTION_MARKER`] and runs until the next such line or end of file.
//! Headers are matched by exact line comparison; no markdown parser is involved, so
//! fenced code blocks containing `## ` lines are treated as headers too.
//!
//! - [`template`] - The skeleton written for new targets
//! - [`headers`] - Scanning a note for its section headers
//! - [`inserter`] - Appending content to the end of a named section
//! - [`formatter`] - Building log entry and screenshot blocks

pub mod formatter;
pub mod headers;
pub mod inserter;
pub mod template;

/// Prefix identifying a section header line
pub const SECTION_MARKER: &str = "## ";

/// Section used whenever no other section is chosen
pub const DEFAULT_SECTION: &str = "DUMP";
