//! `aurelion concept|floor|tag|related` commands
//!
//! Query the knowledge graph and the floor/tag catalogs.
//!
//! # Usage
//! ```bash
//! aurelion concept "career advancement"
//! aurelion floor 3
//! aurelion tag strat --json
//! aurelion related career --hops 3 --summary
//! ```

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use super::utils::{open_engine, print_json};
use crate::config::Config;
use crate::core::floor::floor_name;
use crate::core::library::LibraryQueryEngine;
use crate::core::reference::{FileReference, RelatedConcept};

/// Output options shared by query commands
#[derive(Args, Debug)]
pub struct OutputArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Print the session summary after the results
    #[arg(long)]
    pub summary: bool,
}

#[derive(Args, Debug)]
pub struct ConceptArgs {
    /// Concept search term (partial, case-insensitive)
    pub term: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug)]
pub struct FloorArgs {
    /// Floor number (1-5)
    #[arg(allow_negative_numbers = true)]
    pub floor: i64,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug)]
pub struct TagArgs {
    /// Tag or tag fragment
    pub tag: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug)]
pub struct RelatedArgs {
    /// Starting concept id or label
    pub concept: String,

    /// Maximum hops (default: library.default_max_hops)
    #[arg(long, allow_negative_numbers = true)]
    pub hops: Option<i64>,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn run_concept(args: ConceptArgs, config: &Config) -> Result<()> {
    let engine = open_engine(config);
    let files = engine.search_by_concept(&args.term);
    print_files(&files, &format!("concept \"{}\"", args.term), &args.output)?;
    finish(&engine, &args.output)
}

pub fn run_floor(args: FloorArgs, config: &Config) -> Result<()> {
    let engine = open_engine(config);
    let files = engine.search_by_floor(args.floor);
    let heading = format!("Floor {} ({})", args.floor, floor_name(args.floor));
    print_files(&files, &heading, &args.output)?;
    finish(&engine, &args.output)
}

pub fn run_tag(args: TagArgs, config: &Config) -> Result<()> {
    let engine = open_engine(config);
    let files = engine.search_by_tag(&args.tag);
    print_files(&files, &format!("tag \"{}\"", args.tag), &args.output)?;
    finish(&engine, &args.output)
}

pub fn run_related(args: RelatedArgs, config: &Config) -> Result<()> {
    let engine = open_engine(config);
    let hops = args.hops.unwrap_or(config.library.default_max_hops);
    let related = engine.related_concepts(&args.concept, hops);

    if args.output.json {
        print_json(&related)?;
    } else {
        print_related(&related, &args.concept, hops);
    }
    finish(&engine, &args.output)
}

fn print_files(files: &[FileReference], heading: &str, output: &OutputArgs) -> Result<()> {
    if output.json {
        return print_json(&files);
    }

    if files.is_empty() {
        println!("No documents found for {}.", heading);
        return Ok(());
    }

    println!("📚 {}: {} document(s)\n", heading.bold(), files.len());
    for file in files {
        let mut details = Vec::new();
        if let Some(concept) = &file.concept {
            details.push(format!("concept: {}", concept));
        }
        if let Some(floor) = file.floor {
            details.push(format!("floor {} ({})", floor, floor_name(floor as i64)));
        }
        if let Some(tag) = &file.tag {
            details.push(format!("tag: {}", tag));
        }

        if details.is_empty() {
            println!("  {}", file.name.cyan());
        } else {
            println!("  {}  {}", file.name.cyan(), details.join(", ").dimmed());
        }
    }
    Ok(())
}

fn print_related(related: &[RelatedConcept], start: &str, hops: i64) {
    if related.is_empty() {
        println!("No related concepts found for \"{}\".", start);
        return;
    }

    println!(
        "🔗 Concepts related to {} (max {} hops): {}\n",
        start.bold(),
        hops,
        related.len()
    );
    for concept in related {
        println!("  {} {}", concept.label.green(), format!("({})", concept.id).dimmed());
        for file in &concept.files {
            println!("    └── {}", file);
        }
    }
}

/// Print the session summary when asked
fn finish(engine: &LibraryQueryEngine, output: &OutputArgs) -> Result<()> {
    if !output.summary {
        return Ok(());
    }

    let summary = engine.session_summary();
    if output.json {
        return print_json(&summary);
    }

    println!("\n📊 Session summary");
    println!("  Total queries: {}", summary.total_queries);
    for (query_type, count) in &summary.by_type {
        println!("  ├── {}: {}", query_type, count);
    }
    Ok(())
}
