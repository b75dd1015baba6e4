//! Catalogs - Static floor and tag tables
//!
//! Both catalogs are plain configuration: the defaults below ship with the
//! library and can be replaced from `config.toml` (`[catalog.floors]` and
//! `[[catalog.tags]]`). They are not derived from the concept graph.

use serde::{Deserialize, Serialize};

use super::floor::Floor;
use super::reference::FileReference;

/// Floor number -> documents
///
/// Floors left out of `[catalog.floors]` keep their built-in lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FloorCatalog {
    pub foundation: Vec<String>,
    pub systems: Vec<String>,
    pub networks: Vec<String>,
    pub action: Vec<String>,
    pub vision: Vec<String>,
}

impl Default for FloorCatalog {
    fn default() -> Self {
        Self {
            foundation: docs(&[
                "00_Hub_Index.md",
                "01_Career_Master.md",
                "02_Skills_Inventory.md",
                "03_Daily_Operations.md",
            ]),
            systems: docs(&["10_Glossary.md", "11_Transmittal_Standards.md"]),
            networks: docs(&["18_Network_Map.md", "21_Background_Story.md"]),
            action: docs(&["06_Project_Template.md", "26_Decision_Tree.md"]),
            vision: docs(&["32_Personality_Framework.md", "35_Strategic_Plan.md"]),
        }
    }
}

impl FloorCatalog {
    /// Documents configured for a floor
    pub fn documents(&self, floor: Floor) -> &[String] {
        match floor {
            Floor::Foundation => &self.foundation,
            Floor::Systems => &self.systems,
            Floor::Networks => &self.networks,
            Floor::Action => &self.action,
            Floor::Vision => &self.vision,
        }
    }

    /// Documents on a floor; empty for numbers outside 1..=5
    pub fn search(&self, floor: i64) -> Vec<FileReference> {
        let Some(floor) = Floor::from_number(floor) else {
            return Vec::new();
        };

        self.documents(floor)
            .iter()
            .map(|name| FileReference::new(name.clone()).with_floor(Some(floor.number())))
            .collect()
    }
}

/// One tag key and its documents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagEntry {
    pub tag: String,
    #[serde(default)]
    pub documents: Vec<String>,
}

/// Tag key -> documents, in configured order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagCatalog {
    entries: Vec<TagEntry>,
}

impl Default for TagCatalog {
    fn default() -> Self {
        Self::new(vec![
            entry("career", &["01_Career_Master.md", "02_Skills_Inventory.md"]),
            entry("strategy", &["35_Strategic_Plan.md"]),
            entry("daily", &["03_Daily_Operations.md"]),
            entry("frameworks", &["32_Personality_Framework.md"]),
            entry("network", &["18_Network_Map.md"]),
            entry("investigation", &["06_Project_Template.md", "26_Decision_Tree.md"]),
        ])
    }
}

impl TagCatalog {
    pub fn new(entries: Vec<TagEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[TagEntry] {
        &self.entries
    }

    /// Documents for every key that contains the lowercased `tag`
    ///
    /// Matching is one-way: "car" matches key "career", "careers" does not.
    pub fn search(&self, tag: &str) -> Vec<FileReference> {
        let needle = tag.to_lowercase();

        self.entries
            .iter()
            .filter(|e| e.tag.contains(&needle))
            .flat_map(|e| {
                e.documents
                    .iter()
                    .map(|name| FileReference::new(name.clone()).with_tag(e.tag.clone()))
            })
            .collect()
    }
}

fn docs(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn entry(tag: &str, names: &[&str]) -> TagEntry {
    TagEntry {
        tag: tag.to_string(),
        documents: docs(names),
    }
}
