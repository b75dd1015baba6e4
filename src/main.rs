//! aurelion CLI - Entry point
//!
//! Usage: aurelion <command> [options]

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use aurelion::cli::{Cli, Commands};
use aurelion::config::Config;

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing (stderr; stdout carries command output and MCP frames)
    let filter = if cli.verbose {
        EnvFilter::new("aurelion=debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    // Init runs before any config exists, so config is loaded per command
    let config_path = cli.config.clone();
    let load = || Config::load_with(config_path.as_deref());

    match cli.command {
        Commands::Init(args) => aurelion::cli::init::run(args),
        Commands::Concept(args) => aurelion::cli::query::run_concept(args, &load()?),
        Commands::Floor(args) => aurelion::cli::query::run_floor(args, &load()?),
        Commands::Tag(args) => aurelion::cli::query::run_tag(args, &load()?),
        Commands::Related(args) => aurelion::cli::query::run_related(args, &load()?),
        Commands::Floors(args) => aurelion::cli::browse::run_floors(args, &load()?),
        Commands::Ls(args) => aurelion::cli::browse::run_ls(args, &load()?),
        Commands::Search(args) => aurelion::cli::search::run(args, &load()?),
        Commands::Read(args) => aurelion::cli::documents::run_read(args, &load()?),
        Commands::Write(args) => aurelion::cli::documents::run_write(args, &load()?),
        Commands::Session(args) => aurelion::cli::documents::run_session(args, &load()?),
        Commands::Config(args) => aurelion::cli::config::run(args, &load()?),
        Commands::Serve(args) => aurelion::cli::serve::run(args, load()?),
    }
}
