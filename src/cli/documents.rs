//! `aurelion read|write|session` commands
//!
//! # Usage
//! ```bash
//! aurelion read Floor_01_Foundation/career-master.md
//! aurelion write goals.md --floor 5 --content "# Goals"
//! cat notes.md | aurelion write notes.md --floor action
//! aurelion session
//! ```

use std::io::Read;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use super::utils::{open_documents, print_json};
use crate::config::Config;
use crate::core::floor::Floor;

#[derive(Args, Debug)]
pub struct ReadArgs {
    /// Path relative to the memory root
    pub path: String,

    /// Output as JSON (with size and line count)
    #[arg(long)]
    pub json: bool,
}

pub fn run_read(args: ReadArgs, config: &Config) -> Result<()> {
    let store = open_documents(config)?;
    let doc = store.read(&args.path)?;

    if args.json {
        return print_json(&doc);
    }

    print!("{}", doc.content);
    if !doc.content.ends_with('\n') {
        println!();
    }
    Ok(())
}

#[derive(Args, Debug)]
pub struct WriteArgs {
    /// File name or relative path
    pub path: String,

    /// Floor to store the document on (1-5 or name)
    #[arg(short, long)]
    pub floor: Floor,

    /// Document content (reads stdin when omitted)
    #[arg(long)]
    pub content: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run_write(args: WriteArgs, config: &Config) -> Result<()> {
    let store = open_documents(config)?;

    let content = match args.content {
        Some(c) => c,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read content from stdin")?;
            buf
        }
    };

    let written = store.write(&args.path, &content, args.floor)?;

    if args.json {
        return print_json(&written);
    }

    println!(
        "✅ Wrote {} ({} chars) on floor {} ({})",
        written.written.cyan(),
        written.size_chars,
        written.floor,
        written.floor_name
    );
    Ok(())
}

#[derive(Args, Debug)]
pub struct SessionArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run_session(args: SessionArgs, config: &Config) -> Result<()> {
    let store = open_documents(config)?;
    let context = store.session_context();

    if args.json {
        return print_json(&context);
    }

    match &context.handoff {
        Some(handoff) => {
            println!("📝 Latest handoff: {}\n", handoff.path.cyan());
            println!("{}\n", handoff.preview);
        }
        None => println!("📝 No handoff note on floor 4.\n"),
    }

    if context.goals.is_empty() {
        println!("🎯 No goals on floor 5.");
    } else {
        println!("🎯 Goals:");
        for goal in &context.goals {
            println!("\n  {}", goal.path.bold());
            for line in goal.preview.lines() {
                println!("    {}", line);
            }
        }
    }
    Ok(())
}
