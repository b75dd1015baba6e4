//! CLI module - Command definitions and handlers

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod browse;
pub mod config;
pub mod documents;
pub mod init;
pub mod query;
pub mod search;
pub mod serve;
pub mod utils;

/// aurelion - 5-floor personal knowledge library
///
/// Query the concept graph, browse floors and manage markdown documents.
#[derive(Parser, Debug)]
#[command(name = "aurelion")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path
    #[arg(short, long, global = true, env = "AURELION_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a memory store (config + floor directories)
    Init(init::InitArgs),

    /// Find documents through concepts in the knowledge graph
    Concept(query::ConceptArgs),

    /// List catalogued documents on a floor
    Floor(query::FloorArgs),

    /// Find documents by tag
    Tag(query::TagArgs),

    /// Walk related concepts from a starting concept
    Related(query::RelatedArgs),

    /// Show the five floors
    Floors(browse::FloorsArgs),

    /// List documents stored in a floor directory
    Ls(browse::LsArgs),

    /// Full-text search across floor documents
    Search(search::SearchArgs),

    /// Print a document
    Read(documents::ReadArgs),

    /// Write a document onto a floor
    Write(documents::WriteArgs),

    /// Show the latest handoff note and current goals
    Session(documents::SessionArgs),

    /// Show effective configuration
    Config(config::ConfigArgs),

    /// Start MCP server (stdio)
    Serve(serve::ServeArgs),
}
