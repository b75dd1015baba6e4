//! Query result records

use serde::{Deserialize, Serialize};

/// A document returned by a library query
///
/// Only `name` is always present; each entry point fills in the
/// field it searched by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReference {
    /// Document path
    pub name: String,

    /// Label of the concept that referenced the document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concept: Option<String>,

    /// Floor number (1-5)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor: Option<u8>,

    /// Catalog tag key that matched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl FileReference {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            concept: None,
            floor: None,
            tag: None,
        }
    }

    pub fn with_concept(mut self, concept: Option<String>) -> Self {
        self.concept = concept;
        self
    }

    pub fn with_floor(mut self, floor: Option<u8>) -> Self {
        self.floor = floor;
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }
}

/// A concept reached by a related-concept walk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedConcept {
    pub id: String,
    pub label: String,
    pub files: Vec<String>,
}
