//! aurelion - 5-floor personal knowledge library
//!
//! A fixed taxonomy of five floors (Foundation, Systems, Networks, Action,
//! Vision) files markdown documents; a concept graph links documents to
//! topics. The query engine answers concept, floor, tag and related-concept
//! queries and journals every query of the session.
//!
//! ## Key Concepts
//!
//! - **Floors**: five fixed categories, each a directory under the memory root
//! - **Concept graph**: `knowledge_graph.json`, read once, never mutated
//! - **Total queries**: "not found" is an empty result, never an error
//! - **Session journal**: one entry per query, gone when the process ends

pub mod cli;
pub mod config;
pub mod core;
pub mod mcp;

pub use core::documents::DocumentStore;
pub use core::floor::Floor;
pub use core::graph::{GraphNode, GraphStore};
pub use core::journal::{QueryJournal, QueryType};
pub use core::library::LibraryQueryEngine;
pub use core::reference::{FileReference, RelatedConcept};
pub use mcp::run_mcp_server;
