//! Graph - In-memory concept graph
//!
//! Loads `knowledge_graph.json` (nodes live under `knowledge_graph.nodes`)
//! into an index keyed by lowercased node id.
//!
//! # Key Points
//! - Read-only after load
//! - A missing or unreadable source yields an empty graph, never an error
//! - `connects_to` may name nodes that don't exist; lookups just miss

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

/// A concept node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    /// Unique key within the graph
    pub id: String,

    /// Display label (falls back to `id` when absent)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Loose floor association (1-5)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor: Option<u8>,

    /// Documents associated with this concept
    #[serde(default)]
    pub file_locations: Vec<String>,

    /// Neighbor node ids (may dangle)
    #[serde(default)]
    pub connects_to: Vec<String>,
}

impl GraphNode {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: None,
            floor: None,
            file_locations: Vec::new(),
            connects_to: Vec::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_floor(mut self, floor: u8) -> Self {
        self.floor = Some(floor);
        self
    }

    pub fn with_files(mut self, files: Vec<String>) -> Self {
        self.file_locations = files;
        self
    }

    pub fn with_connections(mut self, ids: Vec<String>) -> Self {
        self.connects_to = ids;
        self
    }

    /// Label shown to callers
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.id)
    }
}

/// Node attributes as they appear in the source file (id is the map key)
///
/// `label` and `floor` are read loosely: a value of the wrong type drops
/// that field, not the node.
#[derive(Debug, Deserialize)]
struct NodeAttributes {
    #[serde(default)]
    label: Option<Value>,
    #[serde(default)]
    floor: Option<Value>,
    #[serde(default)]
    file_locations: Vec<String>,
    #[serde(default)]
    connects_to: Vec<String>,
}

/// Concept graph store
#[derive(Debug, Default)]
pub struct GraphStore {
    /// Nodes in load order
    nodes: Vec<GraphNode>,
    /// Lowercased id -> position in `nodes`
    index: HashMap<String, usize>,
}

impl GraphStore {
    /// Empty graph
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from nodes in order. A repeated id replaces the earlier node.
    pub fn from_nodes(nodes: impl IntoIterator<Item = GraphNode>) -> Self {
        let mut store = Self::default();
        for node in nodes {
            store.insert(node);
        }
        store
    }

    /// Load from a JSON file, degrading to an empty graph on any failure
    pub fn load(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Could not read knowledge graph, starting empty");
                return Self::empty();
            }
        };

        match serde_json::from_str::<Value>(&content) {
            Ok(value) => {
                let store = Self::from_value(&value);
                debug!(path = %path.display(), nodes = store.len(), "Knowledge graph loaded");
                store
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Could not parse knowledge graph, starting empty");
                Self::empty()
            }
        }
    }

    /// Build from an already-parsed document (`{"knowledge_graph": {"nodes": {...}}}`)
    pub fn from_value(value: &Value) -> Self {
        let Some(nodes) = value
            .get("knowledge_graph")
            .and_then(|g| g.get("nodes"))
            .and_then(Value::as_object)
        else {
            warn!("Knowledge graph has no knowledge_graph.nodes object, starting empty");
            return Self::empty();
        };

        let mut store = Self::default();
        for (id, attrs) in nodes {
            match NodeAttributes::deserialize(attrs) {
                Ok(attrs) => store.insert(GraphNode {
                    id: id.clone(),
                    label: loose_label(id, attrs.label),
                    floor: loose_floor(id, attrs.floor),
                    file_locations: attrs.file_locations,
                    connects_to: attrs.connects_to,
                }),
                Err(e) => warn!(node = %id, error = %e, "Skipping malformed graph node"),
            }
        }
        store
    }

    fn insert(&mut self, node: GraphNode) {
        let key = node.id.to_lowercase();
        match self.index.get(&key) {
            Some(&pos) => self.nodes[pos] = node,
            None => {
                self.index.insert(key, self.nodes.len());
                self.nodes.push(node);
            }
        }
    }

    /// Case-insensitive lookup by id
    pub fn lookup(&self, id: &str) -> Option<&GraphNode> {
        self.index
            .get(&id.to_lowercase())
            .map(|&pos| &self.nodes[pos])
    }

    /// Case-insensitive lookup by id, then by label
    pub fn resolve(&self, key: &str) -> Option<&GraphNode> {
        let key = key.to_lowercase();
        self.lookup(&key).or_else(|| {
            self.nodes
                .iter()
                .find(|n| n.label.as_deref().is_some_and(|l| l.to_lowercase() == key))
        })
    }

    /// All nodes in load order
    pub fn all_nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

fn loose_label(id: &str, value: Option<Value>) -> Option<String> {
    match value? {
        Value::String(label) => Some(label),
        Value::Null => None,
        other => {
            debug!(node = %id, label = %other, "Ignoring non-string label");
            None
        }
    }
}

fn loose_floor(id: &str, value: Option<Value>) -> Option<u8> {
    let value = value?;
    let floor = match &value {
        Value::Number(n) => n.as_u64().and_then(|n| u8::try_from(n).ok()),
        Value::String(s) => s.trim().parse::<u8>().ok(),
        _ => None,
    };
    if floor.is_none() && !value.is_null() {
        debug!(node = %id, floor = %value, "Ignoring unusable floor");
    }
    floor
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    fn sample() -> Value {
        json!({
            "knowledge_graph": {
                "nodes": {
                    "career": {
                        "label": "Career Advancement",
                        "floor": 1,
                        "file_locations": ["01_Career_Master.md"],
                        "connects_to": ["skills", "ghost"]
                    },
                    "skills": { "label": "Skills" },
                    "Network": { "connects_to": ["career"] }
                }
            }
        })
    }

    #[test]
    fn test_from_value_keeps_file_order() {
        let store = GraphStore::from_value(&sample());
        let ids: Vec<_> = store.all_nodes().iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["career", "skills", "Network"]);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let store = GraphStore::from_value(&sample());
        assert_eq!(store.lookup("CAREER").unwrap().floor, Some(1));
        assert_eq!(store.lookup("network").unwrap().id, "Network");
        assert!(store.lookup("ghost").is_none());
    }

    #[test]
    fn test_resolve_falls_back_to_label() {
        let store = GraphStore::from_value(&sample());
        assert_eq!(store.resolve("career advancement").unwrap().id, "career");
        assert_eq!(store.resolve("Skills").unwrap().id, "skills");
        assert!(store.resolve("nothing").is_none());
    }

    #[test]
    fn test_display_label_defaults_to_id() {
        let store = GraphStore::from_value(&sample());
        assert_eq!(store.lookup("network").unwrap().display_label(), "Network");
        assert_eq!(store.lookup("skills").unwrap().display_label(), "Skills");
    }

    #[test]
    fn test_missing_file_gives_empty_graph() {
        let dir = tempdir().unwrap();
        let store = GraphStore::load(&dir.path().join("missing.json"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_invalid_json_gives_empty_graph() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("knowledge_graph.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(GraphStore::load(&path).is_empty());
    }

    #[test]
    fn test_wrong_shape_gives_empty_graph() {
        assert!(GraphStore::from_value(&json!({"nodes": {}})).is_empty());
        assert!(GraphStore::from_value(&json!([])).is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("knowledge_graph.json");
        std::fs::write(&path, serde_json::to_string(&sample()).unwrap()).unwrap();

        let store = GraphStore::load(&path);
        assert_eq!(store.len(), 3);
        assert_eq!(
            store.lookup("career").unwrap().connects_to,
            vec!["skills".to_string(), "ghost".to_string()]
        );
    }

    #[test]
    fn test_malformed_node_is_skipped() {
        let value = json!({
            "knowledge_graph": {
                "nodes": {
                    "good": { "label": "Good" },
                    "bad": { "file_locations": "not-a-list" }
                }
            }
        });
        let store = GraphStore::from_value(&value);
        assert_eq!(store.len(), 1);
        assert!(store.lookup("bad").is_none());
    }

    #[test]
    fn test_mistyped_fields_keep_the_node() {
        let value = json!({
            "knowledge_graph": {
                "nodes": {
                    "career": { "label": "Career", "floor": "1", "file_locations": ["x.md"] },
                    "odd": { "label": 42, "floor": 900, "connects_to": ["career"] },
                    "hub": { "floor": [1], "connects_to": ["career"] }
                }
            }
        });
        let store = GraphStore::from_value(&value);
        assert_eq!(store.len(), 3);

        let career = store.lookup("career").unwrap();
        assert_eq!(career.floor, Some(1));
        assert_eq!(career.file_locations, vec!["x.md".to_string()]);

        let odd = store.lookup("odd").unwrap();
        assert_eq!(odd.label, None);
        assert_eq!(odd.floor, None);
        assert_eq!(odd.connects_to, vec!["career".to_string()]);

        assert_eq!(store.lookup("hub").unwrap().floor, None);
    }

    #[test]
    fn test_duplicate_id_last_wins() {
        let store = GraphStore::from_nodes(vec![
            GraphNode::new("a").with_label("First"),
            GraphNode::new("b"),
            GraphNode::new("A").with_label("Second"),
        ]);
        assert_eq!(store.len(), 2);
        assert_eq!(store.lookup("a").unwrap().display_label(), "Second");
        assert_eq!(store.all_nodes()[0].id, "A");
    }

    #[test]
    fn test_case_variant_ids_merge_for_concept_search() {
        let store = GraphStore::from_value(&json!({
            "knowledge_graph": {
                "nodes": {
                    "Career": { "label": "Career", "file_locations": ["first.md"] },
                    "career": { "label": "Career", "file_locations": ["second.md"] }
                }
            }
        }));
        assert_eq!(store.len(), 1);

        let files = crate::core::concept::ConceptSearcher::new(&store).search("career");
        let names: Vec<_> = files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["second.md"]);
    }
}
