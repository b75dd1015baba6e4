//! `aurelion floors` and `aurelion ls` commands
//!
//! Browse the five-floor structure.
//!
//! # Usage
//! ```bash
//! aurelion floors          # Floor table with catalogued document counts
//! aurelion ls 3            # Documents stored in Floor_03_Networks/
//! aurelion ls networks --json
//! ```

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use tabled::{Table, Tabled};

use super::utils::{open_documents, print_json};
use crate::config::Config;
use crate::core::floor::Floor;

#[derive(Args, Debug)]
pub struct FloorsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Tabled)]
struct FloorRow {
    #[tabled(rename = "#")]
    number: u8,
    #[tabled(rename = "Floor")]
    name: &'static str,
    #[tabled(rename = "Purpose")]
    title: &'static str,
    #[tabled(rename = "Directory")]
    directory: &'static str,
    #[tabled(rename = "Catalogued")]
    documents: usize,
}

pub fn run_floors(args: FloorsArgs, config: &Config) -> Result<()> {
    let rows: Vec<FloorRow> = Floor::all()
        .into_iter()
        .map(|floor| FloorRow {
            number: floor.number(),
            name: floor.name(),
            title: floor.title(),
            directory: floor.directory(),
            documents: config.catalog.floors.documents(floor).len(),
        })
        .collect();

    if args.json {
        let json: Vec<_> = rows
            .iter()
            .map(|r| {
                serde_json::json!({
                    "floor": r.number,
                    "name": r.name,
                    "title": r.title,
                    "directory": r.directory,
                    "catalogued_documents": r.documents,
                })
            })
            .collect();
        return print_json(&json);
    }

    println!("🏛️  AURELION library floors\n");
    println!("{}", Table::new(rows));
    Ok(())
}

#[derive(Args, Debug)]
pub struct LsArgs {
    /// Floor number (1-5) or name
    pub floor: Floor,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run_ls(args: LsArgs, config: &Config) -> Result<()> {
    let store = open_documents(config)?;
    let listing = store.list_floor(args.floor);

    if args.json {
        return print_json(&listing);
    }

    println!(
        "📂 Floor {} ({}): {} document(s)\n",
        listing.floor,
        listing.floor_name.bold(),
        listing.document_count
    );
    if let Some(note) = &listing.note {
        println!("  {}", note.yellow());
    }
    for doc in &listing.documents {
        println!("  {}", doc);
    }
    Ok(())
}
