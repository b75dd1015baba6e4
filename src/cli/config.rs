//! `aurelion config` command
//!
//! Show the effective configuration.
//!
//! # Usage
//! ```bash
//! aurelion config           # Effective config as TOML
//! aurelion config --path    # Where config is looked up
//! ```

use anyhow::Result;
use clap::Args;

use crate::config::{Config, MEMORY_PATH_ENV};

#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Show config file locations
    #[arg(long)]
    pub path: bool,
}

pub fn run(args: ConfigArgs, config: &Config) -> Result<()> {
    if args.path {
        match Config::global_config_path() {
            Some(global) => println!("Global: {}", global.display()),
            None => println!("Global: (no home directory)"),
        }
        match Config::find_local_config() {
            Some(local) => println!("Local:  {}", local.display()),
            None => println!("Local:  (none found)"),
        }
        println!();
        match config.memory_root() {
            Some(root) => println!("✓ Memory root: {}", root.display()),
            None => println!("⚠ No memory root ({} not set)", MEMORY_PATH_ENV),
        }
        println!("✓ Graph: {}", config.graph_path().display());
        return Ok(());
    }

    print!("{}", toml::to_string_pretty(config)?);
    Ok(())
}
