//! MCP Server state management

use crate::config::{Config, MEMORY_PATH_ENV};
use crate::core::documents::DocumentStore;
use crate::core::library::LibraryQueryEngine;

/// MCP Server state - holds all runtime data
pub struct ServerState {
    /// Graph query engine; its journal is this connection's session
    pub engine: LibraryQueryEngine,
    /// Markdown store (None when no memory path is configured)
    pub documents: Option<DocumentStore>,
    /// Effective configuration
    pub config: Config,
    /// Whether client has sent initialize
    pub initialized: bool,
}

impl ServerState {
    pub fn new(engine: LibraryQueryEngine, documents: Option<DocumentStore>, config: Config) -> Self {
        Self {
            engine,
            documents,
            config,
            initialized: false,
        }
    }

    /// Build engine and document store from configuration
    pub fn from_config(config: Config) -> Self {
        let engine = LibraryQueryEngine::from_config(&config);
        let documents = config.memory_root().map(DocumentStore::new);
        Self::new(engine, documents, config)
    }

    /// Document store, or an error telling the caller how to configure one
    pub fn documents(&self) -> Result<&DocumentStore, String> {
        self.documents.as_ref().ok_or_else(|| {
            format!(
                "{} is not set. Set it (or library.memory_path) to the root of your memory store.",
                MEMORY_PATH_ENV
            )
        })
    }
}
