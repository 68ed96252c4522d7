//! Active context persistence
//!
//! Stores which target is current in a small JSON file so that `log` and `shot`
//! in later invocations affect the same note.
//!
//! State location: `~/.oscp_note_state` (override with `OSCP_NOTES_STATE`)
//!
//! A missing, unreadable, or corrupt state file is reported as "no context"
//! rather than an error; only writes propagate I/O failures.

pub mod persistence;

pub use persistence::{load_context, save_context};
