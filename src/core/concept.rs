//! Concept search over the graph

use super::graph::{GraphNode, GraphStore};
use super::reference::FileReference;

/// Finds concept nodes by label/id substring
pub struct ConceptSearcher<'a> {
    graph: &'a GraphStore,
}

impl<'a> ConceptSearcher<'a> {
    pub fn new(graph: &'a GraphStore) -> Self {
        Self { graph }
    }

    /// Nodes whose lowercased label or id contains the lowercased term
    pub fn matching_nodes(&self, term: &str) -> Vec<&'a GraphNode> {
        let term = term.to_lowercase();

        self.graph
            .all_nodes()
            .iter()
            .filter(|node| {
                let label = node.label.as_deref().unwrap_or_default().to_lowercase();
                label.contains(&term) || node.id.to_lowercase().contains(&term)
            })
            .collect()
    }

    /// One reference per file location of every matching node
    pub fn search(&self, term: &str) -> Vec<FileReference> {
        self.matching_nodes(term)
            .into_iter()
            .flat_map(|node| {
                node.file_locations.iter().map(move |loc| {
                    FileReference::new(loc.clone())
                        .with_concept(node.label.clone())
                        .with_floor(node.floor)
                })
            })
            .collect()
    }
}
