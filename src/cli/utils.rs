//! CLI utility functions
//!
//! Common helpers shared across CLI commands:
//! - Opening the query engine and document store from config
//! - JSON output

use anyhow::{Context, Result};
use serde::Serialize;

use crate::config::{Config, MEMORY_PATH_ENV};
use crate::core::documents::DocumentStore;
use crate::core::library::LibraryQueryEngine;

/// Open the document store at the configured memory root
///
/// # Errors
/// Returns an error if no memory root is configured or it does not exist.
pub fn open_documents(config: &Config) -> Result<DocumentStore> {
    let root = config.memory_root().with_context(|| {
        format!(
            "{} is not set. Set it (or library.memory_path in config) to the root of your memory store.",
            MEMORY_PATH_ENV
        )
    })?;

    if !root.exists() {
        anyhow::bail!("Memory path does not exist: {}", root.display());
    }

    Ok(DocumentStore::new(root))
}

/// Open the query engine; a missing graph file yields an empty graph
pub fn open_engine(config: &Config) -> LibraryQueryEngine {
    LibraryQueryEngine::from_config(config)
}

/// Print a value as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
