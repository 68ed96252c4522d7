//! Interactive section and caption prompts
//!
//! All prompts are generic over `BufRead`/`Write` so they can be driven from tests.
//! Any input that cannot be understood falls back to the [`DEFAULT_SECTION`].

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use anyhow::Result;
use log::{debug, warn};

use crate::capture::CaptureSource;
use crate::markdown::DEFAULT_SECTION;
use crate::markdown::headers::headers;

#[cfg(unix)]
const TERMINAL_DEVICE: &str = "/dev/tty";
#[cfg(windows)]
const TERMINAL_DEVICE: &str = "CONIN$";

/// Reader for interactive answers
///
/// When the log content was piped in, stdin is already consumed, so answers are read
/// from the controlling terminal instead. Returns None if no terminal is available.
pub fn prompt_input(source: CaptureSource) -> Option<Box<dyn BufRead>> {
    match source {
        CaptureSource::Editor => Some(Box::new(io::stdin().lock())),
        CaptureSource::Stdin => match File::open(TERMINAL_DEVICE) {
            Ok(tty) => Some(Box::new(BufReader::new(tty))),
            Err(e) => {
                debug!("No controlling terminal for prompts: {}", e);
                None
            }
        },
    }
}

/// Read one trimmed line; None on end of input
fn read_answer(input: &mut dyn BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Show the numbered section menu and return the chosen header name
///
/// Menu entries are the headers in order, then `[Create New Section]` and
/// `[DUMP (Default)]`. Blank, invalid, or out-of-range answers select `DUMP`.
pub fn select_section(
    headers: &[String],
    input: &mut dyn BufRead,
    output: &mut dyn Write,
) -> Result<String> {
    let create_choice = headers.len() + 1;
    let dump_choice = headers.len() + 2;

    writeln!(output, "\n[?] Select Section:")?;
    for (i, header) in headers.iter().enumerate() {
        writeln!(output, " {}. {}", i + 1, header)?;
    }
    writeln!(output, " {}. [Create New Section]", create_choice)?;
    writeln!(output, " {}. [DUMP (Default)]", dump_choice)?;
    write!(output, "\nSelect [Default: DUMP]: ")?;
    output.flush()?;

    let answer = match read_answer(input)? {
        Some(answer) if !answer.is_empty() => answer,
        _ => return Ok(DEFAULT_SECTION.to_string()),
    };

    let section = match answer.parse::<usize>() {
        Ok(n) if (1..=headers.len()).contains(&n) => headers[n - 1].clone(),
        Ok(n) if n == create_choice => prompt_new_section(input, output)?,
        Ok(n) if n == dump_choice => DEFAULT_SECTION.to_string(),
        _ => {
            warn!("Invalid section choice '{}', using {}", answer, DEFAULT_SECTION);
            DEFAULT_SECTION.to_string()
        }
    };

    debug!("Selected section '{}'", section);
    Ok(section)
}

fn prompt_new_section(input: &mut dyn BufRead, output: &mut dyn Write) -> Result<String> {
    write!(output, "Enter new Header Name: ")?;
    output.flush()?;

    match read_answer(input)? {
        Some(name) if !name.is_empty() => Ok(name),
        _ => {
            warn!("No header name given, using {}", DEFAULT_SECTION);
            Ok(DEFAULT_SECTION.to_string())
        }
    }
}

/// Ask for an optional caption; empty when skipped or at end of input
pub fn prompt_caption(input: &mut dyn BufRead, output: &mut dyn Write) -> Result<String> {
    write!(output, "Optional Caption (Enter for none): ")?;
    output.flush()?;
    Ok(read_answer(input)?.unwrap_or_default())
}

/// Section and caption of a log entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryLabels {
    pub section: String,
    pub caption: String,
}

/// Trimmed section name, or [`DEFAULT_SECTION`] when blank
pub fn section_or_default(name: &str) -> String {
    match name.trim() {
        "" => DEFAULT_SECTION.to_string(),
        name => name.to_string(),
    }
}

/// Resolve the section and caption of a log entry
///
/// Values given on the command line are used as is, except that a blank section
/// means `DUMP`. Missing values are asked on `input`; without one they default to
/// `DUMP` and an empty caption. The note's headers are only read for the menu.
pub fn entry_labels(
    note: &Path,
    section: Option<String>,
    caption: Option<String>,
    mut input: Option<&mut dyn BufRead>,
    output: &mut dyn Write,
) -> Result<EntryLabels> {
    let section = match (section, input.as_deref_mut()) {
        (Some(section), _) => section_or_default(&section),
        (None, Some(input)) => select_section(&headers(note)?, input, output)?,
        (None, None) => DEFAULT_SECTION.to_string(),
    };

    let caption = match (caption, input) {
        (Some(caption), _) => caption,
        (None, Some(input)) => prompt_caption(input, output)?,
        (None, None) => String::new(),
    };

    Ok(EntryLabels { section, caption })
}
