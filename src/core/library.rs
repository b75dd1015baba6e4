//! Library - Query engine facade
//!
//! Composes the concept graph, the floor/tag catalogs and the related-concept
//! walk, and journals every query it answers.
//!
//! # Key Points
//! - No query fails: "nothing found" is an empty Vec
//! - Exactly one journal entry per call, written after the result is known
//! - Graph and catalogs are immutable, so `&self` is enough for every query

use std::path::Path;

use tracing::info;

use super::catalog::{FloorCatalog, TagCatalog};
use super::concept::ConceptSearcher;
use super::graph::GraphStore;
use super::journal::{QueryJournal, QueryLogEntry, QueryType, SessionSummary};
use super::reference::{FileReference, RelatedConcept};
use super::walker::RelatedConceptWalker;
use crate::config::Config;

/// Knowledge library query engine
pub struct LibraryQueryEngine {
    graph: GraphStore,
    floors: FloorCatalog,
    tags: TagCatalog,
    journal: QueryJournal,
}

impl LibraryQueryEngine {
    pub fn new(
        graph: GraphStore,
        floors: FloorCatalog,
        tags: TagCatalog,
        journal: QueryJournal,
    ) -> Self {
        Self {
            graph,
            floors,
            tags,
            journal,
        }
    }

    /// Engine over `graph` with the default catalogs and a fresh session
    pub fn with_graph(graph: GraphStore) -> Self {
        Self::new(
            graph,
            FloorCatalog::default(),
            TagCatalog::default(),
            QueryJournal::new(),
        )
    }

    /// Load the graph file and catalogs named by `config`
    pub fn from_config(config: &Config) -> Self {
        let graph_path = config.graph_path();
        Self::open(&graph_path, config)
    }

    /// Load the graph from `graph_path`, catalogs from `config`
    pub fn open(graph_path: &Path, config: &Config) -> Self {
        let graph = GraphStore::load(graph_path);
        info!(
            graph = %graph_path.display(),
            nodes = graph.len(),
            "Library opened"
        );

        Self::new(
            graph,
            config.catalog.floors.clone(),
            config.catalog.tags.clone(),
            QueryJournal::new(),
        )
    }

    pub fn graph(&self) -> &GraphStore {
        &self.graph
    }

    pub fn floors(&self) -> &FloorCatalog {
        &self.floors
    }

    pub fn tags(&self) -> &TagCatalog {
        &self.tags
    }

    pub fn journal(&self) -> &QueryJournal {
        &self.journal
    }

    /// Documents of every concept whose label or id contains `concept`
    pub fn search_by_concept(&self, concept: &str) -> Vec<FileReference> {
        let files = ConceptSearcher::new(&self.graph).search(concept);
        self.journal.record(QueryType::Concept, concept, files.len());
        files
    }

    /// Documents catalogued on a floor (1-5)
    pub fn search_by_floor(&self, floor: i64) -> Vec<FileReference> {
        let files = self.floors.search(floor);
        self.journal
            .record(QueryType::Floor, format!("Floor {}", floor), files.len());
        files
    }

    /// Documents under every tag key containing `tag`
    pub fn search_by_tag(&self, tag: &str) -> Vec<FileReference> {
        let files = self.tags.search(tag);
        self.journal.record(QueryType::Tag, tag, files.len());
        files
    }

    /// Concepts along a greedy walk of up to `max_hops` hops
    pub fn related_concepts(&self, concept: &str, max_hops: i64) -> Vec<RelatedConcept> {
        let related = RelatedConceptWalker::new(&self.graph).walk(concept, max_hops);
        self.journal
            .record(QueryType::RelatedConcepts, concept, related.len());
        related
    }

    pub fn query_history(&self) -> Vec<QueryLogEntry> {
        self.journal.history()
    }

    pub fn session_summary(&self) -> SessionSummary {
        self.journal.summary()
    }
}
