use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};
use log::debug;

use super::operations::{append_log, require_context, switch_target, take_screenshot};
use super::prompt::{entry_labels, prompt_input};
use crate::capture::capture_content;
use crate::clipboard::CommandClipboard;
use crate::markdown::headers::headers;
use crate::state::load_context;
use crate::utils::{format_path_with_tilde, get_editor, get_notes_root, get_state_file};

const NO_CONTEXT_LOG: &str = "[!] No active context. Run 'note switch <name>' first.";
const NO_CONTEXT_SHOT: &str = "[!] No context set.";

#[derive(Parser)]
#[command(name = "note")]
#[command(version = "0.1.0")]
#[command(about = "Headless per-target note taker for penetration tests", long_about = None)]
pub struct Cli {
    /// Directory holding one folder per target [default: ~/oscp-notes]
    #[arg(long, global = true, env = "OSCP_NOTES_ROOT")]
    pub root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Set current machine context, creating its workspace on first use
    Switch {
        /// Machine name (used as the workspace directory name)
        name: String,
        /// Machine IP
        #[arg(long)]
        ip: Option<String>,
        /// Operating system (linux/windows)
        #[arg(long)]
        os: Option<String>,
    },
    /// Log piped text or editor content to the current note
    Log {
        /// Section to append to (skips the section menu)
        #[arg(short, long)]
        section: Option<String>,
        /// Caption for the entry (skips the caption prompt)
        #[arg(short, long)]
        caption: Option<String>,
    },
    /// Save clipboard image to the current note
    Shot {
        /// Caption for the image
        #[arg(short, long, default_value = "")]
        caption: String,
    },
    /// Show the active context
    Status,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Switch { name, ip, os }) => {
            run_switch(cli.root, &name, ip.as_deref(), os.as_deref())?;
        }
        Some(Commands::Log { section, caption }) => {
            run_log(section, caption)?;
        }
        Some(Commands::Shot { caption }) => {
            run_shot(&caption)?;
        }
        Some(Commands::Status) => {
            show_status()?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

fn run_switch(
    root: Option<PathBuf>,
    name: &str,
    ip: Option<&str>,
    os: Option<&str>,
) -> Result<()> {
    let root = get_notes_root(root)?;
    let state_file = get_state_file()?;
    debug!("Notes root {}, state file {}", root.display(), state_file.display());

    let outcome = switch_target(&root, &state_file, name, ip, os)?;
    if outcome.created {
        println!("[+] Creating new workspace for: {}", name);
    }
    println!("[OK] Context set to: {}", outcome.context.name);
    Ok(())
}

fn run_log(section: Option<String>, caption: Option<String>) -> Result<()> {
    let context = require_context(&get_state_file()?, NO_CONTEXT_LOG)?;

    let captured = capture_content(&get_editor())?;
    if captured.is_empty() {
        println!("[!] Empty content. Aborting.");
        return Ok(());
    }

    let mut input = match (&section, &caption) {
        (Some(_), Some(_)) => None,
        _ => prompt_input(captured.source),
    };
    let labels = entry_labels(
        &context.path,
        section,
        caption,
        input.as_mut().map(|input| &mut **input as &mut dyn BufRead),
        &mut io::stdout(),
    )?;

    append_log(&context, &labels.section, &labels.caption, &captured.text, Local::now())?;
    println!("[OK] Appended to '{}' in {}", labels.section, context.name);
    Ok(())
}

fn run_shot(caption: &str) -> Result<()> {
    let context = require_context(&get_state_file()?, NO_CONTEXT_SHOT)?;

    let mut clipboard = CommandClipboard::new()?;
    println!("[*] Grabbing clipboard...");

    let filename = take_screenshot(&context, &mut clipboard, caption, Local::now())?;
    println!("[OK] Screenshot saved: {}", filename);
    Ok(())
}

fn show_status() -> Result<()> {
    let Some(context) = load_context(&get_state_file()?) else {
        println!("No active context");
        return Ok(());
    };

    println!("Active target: {}", context.name);
    println!("Note file: {}", format_path_with_tilde(&context.path));
    println!("IP: {}", context.ip.as_deref().unwrap_or("-"));

    if context.path.exists() {
        println!("Sections: {}", headers(&context.path)?.join(", "));
    } else {
        println!("Note file missing");
    }

    Ok(())
}
