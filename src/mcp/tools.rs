//! MCP Tool argument structs
//!
//! Simple structs for deserializing tool arguments.

use serde::{Deserialize, Serialize};

/// Find documents through concepts in the knowledge graph
#[derive(Debug, Deserialize, Serialize)]
pub struct LibraryConceptTool {
    /// Search term, matched against concept labels and ids
    pub concept: String,
}

/// List catalogued documents on a floor
#[derive(Debug, Deserialize, Serialize)]
pub struct LibraryFloorTool {
    /// Floor number (1-5)
    pub floor: i64,
}

/// Find documents by tag
#[derive(Debug, Deserialize, Serialize)]
pub struct LibraryTagTool {
    /// Tag or tag fragment (e.g. 'career', 'strat')
    pub tag: String,
}

/// Walk the concept graph from a starting concept
#[derive(Debug, Deserialize, Serialize)]
pub struct LibraryRelatedTool {
    /// Starting concept id or label
    pub concept: String,
    /// Hop budget (default: library.default_max_hops)
    #[serde(default)]
    pub max_hops: Option<i64>,
}

/// Full-text search across floor documents
#[derive(Debug, Deserialize, Serialize)]
pub struct MemorySearchTool {
    /// Search terms
    pub query: String,
    /// Optional floor (1-5) to scope the search
    #[serde(default)]
    pub floor: Option<i64>,
}

/// Read a document
#[derive(Debug, Deserialize, Serialize)]
pub struct MemoryReadTool {
    /// Path relative to the memory root
    pub path: String,
}

/// Write or update a document
#[derive(Debug, Deserialize, Serialize)]
pub struct MemoryWriteTool {
    /// File name or relative path
    pub path: String,
    /// Full markdown content
    pub content: String,
    /// Floor (1-5) to store the document on
    pub floor: i64,
}

/// List documents on a floor directory
#[derive(Debug, Deserialize, Serialize)]
pub struct MemoryFloorTool {
    /// Floor number (1-5)
    pub floor: i64,
}
