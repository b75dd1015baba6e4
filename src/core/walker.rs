//! Related-concept walk
//!
//! A bounded greedy walk: each hop reports *every* neighbor of the current
//! node but only continues through the first one. Results are the
//! concatenation of the neighbor sets seen along that single path, so a
//! concept can appear more than once.
//!
//! The walk stops when
//! - `max_hops` hops have been taken,
//! - the current node was already visited (cycle), or
//! - the current node has no resolvable neighbors.

use std::collections::HashSet;

use super::graph::{GraphNode, GraphStore};
use super::reference::RelatedConcept;

/// Walks `connects_to` edges from a starting concept
pub struct RelatedConceptWalker<'a> {
    graph: &'a GraphStore,
}

impl<'a> RelatedConceptWalker<'a> {
    pub fn new(graph: &'a GraphStore) -> Self {
        Self { graph }
    }

    /// Related concepts reachable from `start` within `max_hops` hops
    pub fn walk(&self, start: &str, max_hops: i64) -> Vec<RelatedConcept> {
        let hops = usize::try_from(max_hops).unwrap_or(0);

        let mut current = start.to_lowercase();
        let mut visited: HashSet<String> = HashSet::new();
        let mut related = Vec::new();

        for _ in 0..hops {
            let node = self.graph.resolve(&current);

            // Unresolved keys are tracked by name so they still count as visited
            let key = node.map_or_else(|| current.clone(), |n| n.id.to_lowercase());
            if !visited.insert(key) {
                break;
            }

            let neighbors = node.map(|n| self.neighbors(n)).unwrap_or_default();
            let Some(first) = neighbors.first() else {
                break;
            };

            current = first.label.to_lowercase();
            related.extend(neighbors);
        }

        related
    }

    /// Direct neighbors that exist in the graph, in edge order
    pub fn neighbors(&self, node: &GraphNode) -> Vec<RelatedConcept> {
        node.connects_to
            .iter()
            .filter_map(|id| self.graph.lookup(id).map(|n| (id, n)))
            .map(|(id, n)| RelatedConcept {
                id: id.clone(),
                label: n.display_label().to_string(),
                files: n.file_locations.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_cycle() -> GraphStore {
        GraphStore::from_nodes(vec![
            GraphNode::new("a")
                .with_label("Career")
                .with_connections(vec!["b".into()])
                .with_files(vec!["x.md".into()]),
            GraphNode::new("b")
                .with_label("Skills")
                .with_connections(vec!["a".into()]),
        ])
    }

    fn ids(results: &[RelatedConcept]) -> Vec<&str> {
        results.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_zero_or_negative_hops() {
        let graph = two_cycle();
        let walker = RelatedConceptWalker::new(&graph);
        assert!(walker.walk("a", 0).is_empty());
        assert!(walker.walk("a", -4).is_empty());
    }

    #[test]
    fn test_single_hop() {
        let graph = two_cycle();
        let results = RelatedConceptWalker::new(&graph).walk("a", 1);
        assert_eq!(
            results,
            vec![RelatedConcept {
                id: "b".into(),
                label: "Skills".into(),
                files: vec![],
            }]
        );
    }

    #[test]
    fn test_two_hops_revisits_start_as_neighbor() {
        let graph = two_cycle();
        let results = RelatedConceptWalker::new(&graph).walk("a", 2);
        assert_eq!(ids(&results), vec!["b", "a"]);
        assert_eq!(results[1].label, "Career");
        assert_eq!(results[1].files, vec!["x.md".to_string()]);
    }

    #[test]
    fn test_cycle_guard_stops_walk() {
        let graph = two_cycle();
        // Third hop lands back on "a", which was already visited
        let results = RelatedConceptWalker::new(&graph).walk("a", 100);
        assert_eq!(ids(&results), vec!["b", "a"]);
    }

    #[test]
    fn test_self_loop() {
        let graph = GraphStore::from_nodes(vec![GraphNode::new("loop")
            .with_connections(vec!["loop".into()])]);
        let results = RelatedConceptWalker::new(&graph).walk("LOOP", 10);
        assert_eq!(ids(&results), vec!["loop"]);
    }

    #[test]
    fn test_reports_all_neighbors_follows_first() {
        let graph = GraphStore::from_nodes(vec![
            GraphNode::new("root").with_connections(vec!["left".into(), "right".into()]),
            GraphNode::new("left").with_connections(vec!["deep".into()]),
            GraphNode::new("right").with_connections(vec!["never".into()]),
            GraphNode::new("deep"),
            GraphNode::new("never"),
        ]);
        let results = RelatedConceptWalker::new(&graph).walk("root", 5);
        assert_eq!(ids(&results), vec!["left", "right", "deep"]);
    }

    #[test]
    fn test_dangling_edges_are_skipped() {
        let graph = GraphStore::from_nodes(vec![
            GraphNode::new("start").with_connections(vec!["ghost".into(), "real".into()]),
            GraphNode::new("real").with_connections(vec!["ghost".into()]),
        ]);
        let results = RelatedConceptWalker::new(&graph).walk("start", 3);
        // "real" has only a dangling edge, so the walk ends there
        assert_eq!(ids(&results), vec!["real"]);
    }

    #[test]
    fn test_unknown_start() {
        let graph = two_cycle();
        assert!(RelatedConceptWalker::new(&graph).walk("nowhere", 3).is_empty());
    }

    #[test]
    fn test_length_bounded_on_long_cycle() {
        let n = 50;
        let nodes = (0..n).map(|i| {
            GraphNode::new(format!("n{i}"))
                .with_connections(vec![format!("n{}", (i + 1) % n), format!("n{}", (i + 2) % n)])
        });
        let graph = GraphStore::from_nodes(nodes);
        let walker = RelatedConceptWalker::new(&graph);

        assert_eq!(walker.walk("n0", 7).len(), 7 * 2);
        // Whole cycle walked once, then the guard trips
        assert_eq!(walker.walk("n0", 1000).len(), n * 2);
    }
}
