//! `aurelion init` command
//!
//! Initializes a memory store.
//!
//! # Usage
//! ```bash
//! aurelion init                    # Initialize in current directory
//! aurelion init /path/to/memory    # Initialize in specific path
//! aurelion init --force            # Overwrite existing config
//! ```

use anyhow::{bail, Result};
use clap::Args;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::core::documents::DocumentStore;
use crate::core::floor::Floor;

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path to initialize (default: current directory)
    pub path: Option<PathBuf>,

    /// Force re-initialization
    #[arg(short, long)]
    pub force: bool,
}

pub fn run(args: InitArgs) -> Result<()> {
    // 1. Determine target path
    let base_path = args.path.unwrap_or_else(|| PathBuf::from("."));
    let base_path = std::fs::canonicalize(&base_path).unwrap_or(base_path);

    // 2. Check if already initialized
    if is_initialized(&base_path) && !args.force {
        bail!(
            "Directory {} is already initialized. Use --force to reinitialize.",
            base_path.display()
        );
    }

    println!("🚀 Initializing AURELION memory in: {}", base_path.display());

    // 3. Create floor directories
    DocumentStore::new(&base_path).init_floors()?;

    // 4. Create config file pointing at this store
    let mut config = Config::default();
    config.library.memory_path = Some(base_path.clone());
    let config_path = base_path.join(".aurelion").join("config.toml");
    config.save_to(&config_path)?;

    println!("\n✅ Initialized memory store");
    println!("   Config: {}", config_path.display());
    for floor in Floor::all() {
        println!("   Floor {}: {}/", floor.number(), floor.directory());
    }
    println!("\nNext steps:");
    println!("  Put your graph in {}", config.graph_path().display());
    println!("  aurelion floors");
    println!("  aurelion concept \"career\"");

    Ok(())
}

/// Check if a directory already has a config
fn is_initialized(path: &Path) -> bool {
    path.join(".aurelion").join("config.toml").exists()
}
