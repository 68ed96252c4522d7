//! Pentest Notes - Per-target markdown notes for penetration test assessments
//!
//! This library backs the `note` command line tool. It keeps one markdown note per
//! target and tracks which target is currently active. It supports:
//!
//! - Creating target workspaces from a fixed note template
//! - Persisting the active target between invocations
//! - Indexing `## ` section headers of a note
//! - Inserting timestamped log entries at the end of a chosen section
//! - Saving clipboard screenshots as linked attachments
//!
//! # Example
//!
//! ```no_run
//! use pentest_notes::{format_log_entry, insert_into_section};
//! use std::path::Path;
//!
//! let note = Path::new("/home/alice/oscp-notes/DC01/DC01.md");
//! let entry = format_log_entry("nmap", "22/tcp open ssh", chrono::Local::now());
//! insert_into_section(note, "Enumeration", &entry)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod capture;
pub mod cli;
pub mod clipboard;
pub mod markdown;
pub mod models;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use markdown::formatter::{format_log_entry, format_screenshot};
pub use markdown::headers::headers;
pub use markdown::inserter::{insert_into_section, insert_into_text};
pub use markdown::template::render_template;
pub use models::{ActiveContext, Workspace};
pub use state::{load_context, save_context};
