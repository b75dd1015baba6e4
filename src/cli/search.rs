//! `aurelion search` command
//!
//! Full-text search across the markdown documents on the floors.
//!
//! # Usage
//! ```bash
//! aurelion search "promotion"
//! aurelion search "mentor" --floor 3
//! ```

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use super::utils::{open_documents, print_json};
use crate::config::Config;
use crate::core::floor::Floor;

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search terms (case-insensitive substring)
    pub query: String,

    /// Limit to one floor (1-5 or name)
    #[arg(short, long)]
    pub floor: Option<Floor>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: SearchArgs, config: &Config) -> Result<()> {
    let store = open_documents(config)?;
    let results = store.search(&args.query, args.floor);

    if args.json {
        return print_json(&results);
    }

    if results.is_empty() {
        println!("No documents found matching \"{}\".", args.query);
        return Ok(());
    }

    println!("🔍 Found {} document(s):\n", results.len());
    for hit in &results {
        println!(
            "  {} {}",
            hit.path.cyan(),
            format!("[{}]", hit.floor_name).dimmed()
        );
        if !hit.snippet.is_empty() {
            println!("    {}", hit.snippet);
        }
    }
    Ok(())
}
