use std::fmt::Display;

use chrono::{DateTime, TimeZone};

/// Bodies with more lines than this are wrapped in a collapsible block
pub const COLLAPSE_THRESHOLD: usize = 15;

/// Caption used when the user gives none
pub const DEFAULT_CAPTION: &str = "Log Entry";

/// Format captured text as a timestamped log entry
///
/// Produces a `### {caption} (HH:MM)` header followed by the body in a ```` ```text ````
/// fence. Bodies longer than [`COLLAPSE_THRESHOLD`] lines go inside a `<details>`
/// disclosure block. Trailing newlines of the body are dropped; other lines are kept verbatim.
pub fn format_log_entry<Tz>(caption: &str, body: &str, now: DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let caption = caption.trim();
    let caption = if caption.is_empty() { DEFAULT_CAPTION } else { caption };
    let timestamp = now.format("%H:%M");

    let mut block = format!("### {caption} ({timestamp})\n");
    let fenced = format!("```text\n{}\n```", body.trim_end_matches(['\n', '\r']));

    if body.lines().count() > COLLAPSE_THRESHOLD {
        block.push_str("<details>\n<summary>Click to Expand Content</summary>\n\n");
        block.push_str(&fenced);
        block.push_str("\n</details>");
    } else {
        block.push_str(&fenced);
    }

    block
}

/// Format the note block linking a saved screenshot
pub fn format_screenshot(caption: &str, filename: &str) -> String {
    format!("\n**Screenshot:** {}\n![[{}]]\n", caption.trim(), filename)
}

/// Attachment file name for a screenshot taken at `now`: `<name>_<YYYYMMDD_HHMMSS>.png`
pub fn screenshot_filename<Tz>(name: &str, now: DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!("{}_{}.png", name, now.format("%Y%m%d_%H%M%S"))
}
