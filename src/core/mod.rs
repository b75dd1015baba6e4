//! Core module - Business logic
//!
//! The concept graph, the floor/tag catalogs, the query engine and the
//! markdown document store.

pub mod catalog;
pub mod concept;
pub mod documents;
pub mod floor;
pub mod graph;
pub mod journal;
pub mod library;
pub mod reference;
pub mod walker;

pub use catalog::{FloorCatalog, TagCatalog, TagEntry};
pub use documents::{DocumentError, DocumentStore};
pub use floor::Floor;
pub use graph::{GraphNode, GraphStore};
pub use journal::{QueryJournal, QueryLogEntry, QueryType, SessionSummary};
pub use library::LibraryQueryEngine;
pub use reference::{FileReference, RelatedConcept};
