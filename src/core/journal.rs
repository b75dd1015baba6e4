//! Query journal - Per-session log of library queries
//!
//! Append-only and unbounded for the life of the session. Appends go
//! through a mutex so one journal can be shared by concurrent callers
//! while keeping call order.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use ulid::Ulid;

/// Kind of library query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryType {
    Concept,
    Floor,
    Tag,
    RelatedConcepts,
}

impl QueryType {
    pub fn as_str(self) -> &'static str {
        match self {
            QueryType::Concept => "concept",
            QueryType::Floor => "floor",
            QueryType::Tag => "tag",
            QueryType::RelatedConcepts => "related_concepts",
        }
    }
}

impl std::fmt::Display for QueryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One journaled query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryLogEntry {
    pub timestamp: DateTime<Utc>,
    pub query_type: QueryType,
    pub query: String,
    pub results_count: usize,
}

/// Aggregate view of a session
///
/// `session_start` is left out while the journal is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_start: Option<DateTime<Utc>>,
    pub total_queries: usize,
    pub by_type: BTreeMap<QueryType, usize>,
}

/// Session query log
#[derive(Debug)]
pub struct QueryJournal {
    session_id: String,
    session_start: DateTime<Utc>,
    entries: Mutex<Vec<QueryLogEntry>>,
}

impl Default for QueryJournal {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryJournal {
    /// Start a new session
    pub fn new() -> Self {
        Self {
            session_id: format!("session-{}", Ulid::new()),
            session_start: Utc::now(),
            entries: Mutex::new(Vec::new()),
        }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn session_start(&self) -> DateTime<Utc> {
        self.session_start
    }

    // A poisoned lock still holds a consistent Vec; recording must not fail.
    fn lock(&self) -> MutexGuard<'_, Vec<QueryLogEntry>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Append an entry stamped with the current time
    pub fn record(&self, query_type: QueryType, query: impl Into<String>, results_count: usize) {
        let entry = QueryLogEntry {
            timestamp: Utc::now(),
            query_type,
            query: query.into(),
            results_count,
        };
        debug!(
            session = %self.session_id,
            query_type = %entry.query_type,
            query = %entry.query,
            results = entry.results_count,
            "Query recorded"
        );
        self.lock().push(entry);
    }

    /// Snapshot of all entries in call order
    pub fn history(&self) -> Vec<QueryLogEntry> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn summary(&self) -> SessionSummary {
        let entries = self.lock();
        if entries.is_empty() {
            return SessionSummary {
                session_start: None,
                total_queries: 0,
                by_type: BTreeMap::new(),
            };
        }

        let mut by_type = BTreeMap::new();
        for entry in entries.iter() {
            *by_type.entry(entry.query_type).or_insert(0) += 1;
        }

        SessionSummary {
            session_start: Some(self.session_start),
            total_queries: entries.len(),
            by_type,
        }
    }
}
