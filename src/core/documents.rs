//! Documents - Markdown files on the library floors
//!
//! Layout under the memory root:
//!
//! ```text
//! <root>/
//!   knowledge_graph.json
//!   Floor_01_Foundation/...
//!   Floor_02_Systems/...
//!   Floor_03_Networks/...
//!   Floor_04_Action/      # handoff / session notes live here
//!   Floor_05_Vision/      # goals live here
//! ```

use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};
use std::time::SystemTime;

use serde::Serialize;
use tracing::{debug, warn};
use walkdir::WalkDir;

use super::floor::Floor;

const SNIPPET_CHARS: usize = 200;
const HANDOFF_PREVIEW_CHARS: usize = 800;
const GOAL_PREVIEW_LINES: usize = 6;
const MAX_GOALS: usize = 5;

/// Document store errors
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("Document not found: {0}")]
    NotFound(String),

    #[error("Path escapes the memory root: {0}")]
    OutsideRoot(String),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type DocumentResult<T> = Result<T, DocumentError>;

/// Full-text hit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentMatch {
    pub path: String,
    pub floor: u8,
    pub floor_name: String,
    pub snippet: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub path: String,
    pub content: String,
    pub size_chars: usize,
    pub lines: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WrittenDocument {
    pub written: String,
    pub floor: u8,
    pub floor_name: String,
    pub size_chars: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FloorListing {
    pub floor: u8,
    pub floor_name: String,
    pub document_count: usize,
    pub documents: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Preview {
    pub path: String,
    pub preview: String,
}

/// What to restore at the start of a session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionContext {
    pub handoff: Option<Preview>,
    pub goals: Vec<Preview>,
}

/// Markdown document store rooted at the memory path
#[derive(Debug, Clone)]
pub struct DocumentStore {
    root: PathBuf,
}

impl DocumentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Case-insensitive substring search over `*.md` files
    pub fn search(&self, query: &str, floor: Option<Floor>) -> Vec<DocumentMatch> {
        let needle = query.to_lowercase();
        let floors = match floor {
            Some(f) => vec![f],
            None => Floor::all().to_vec(),
        };

        let mut results = Vec::new();
        for floor in floors {
            for file in self.markdown_files(floor) {
                let content = match read_lossy(&file) {
                    Ok(content) => content,
                    Err(e) => {
                        warn!(path = %file.display(), error = %e, "Skipping unreadable document");
                        continue;
                    }
                };
                if !content.to_lowercase().contains(&needle) {
                    continue;
                }

                let snippet: String = content
                    .lines()
                    .find(|line| line.to_lowercase().contains(&needle))
                    .map(|line| line.trim().chars().take(SNIPPET_CHARS).collect())
                    .unwrap_or_default();

                results.push(DocumentMatch {
                    path: self.relative(&file),
                    floor: floor.number(),
                    floor_name: floor.name().to_string(),
                    snippet,
                });
            }
        }

        debug!(query, hits = results.len(), "Document search");
        results
    }

    pub fn read(&self, doc_path: &str) -> DocumentResult<Document> {
        let full = self.resolve(doc_path)?;
        if !full.is_file() {
            return Err(DocumentError::NotFound(doc_path.to_string()));
        }

        let content = read_lossy(&full).map_err(|e| io_error(&full, e))?;
        Ok(Document {
            path: doc_path.to_string(),
            size_chars: content.chars().count(),
            lines: content.matches('\n').count() + 1,
            content,
        })
    }

    /// Write a document onto a floor, creating directories as needed
    ///
    /// Paths not already under the floor directory are placed there.
    pub fn write(
        &self,
        doc_path: &str,
        content: &str,
        floor: Floor,
    ) -> DocumentResult<WrittenDocument> {
        let dir = floor.directory();
        let first = Path::new(doc_path).components().next();
        let doc_path = if first == Some(Component::Normal(OsStr::new(dir))) {
            doc_path.to_string()
        } else {
            format!("{}/{}", dir, doc_path.trim_start_matches('/'))
        };

        let full = self.resolve(&doc_path)?;
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).map_err(|e| io_error(parent, e))?;
        }
        std::fs::write(&full, content).map_err(|e| io_error(&full, e))?;

        debug!(path = %doc_path, floor = floor.number(), "Document written");
        Ok(WrittenDocument {
            written: doc_path,
            floor: floor.number(),
            floor_name: floor.name().to_string(),
            size_chars: content.chars().count(),
        })
    }

    pub fn list_floor(&self, floor: Floor) -> FloorListing {
        let dir = self.root.join(floor.directory());
        if !dir.is_dir() {
            return FloorListing {
                floor: floor.number(),
                floor_name: floor.name().to_string(),
                document_count: 0,
                documents: Vec::new(),
                note: Some("Floor directory does not exist yet".to_string()),
            };
        }

        let mut documents: Vec<String> = self
            .markdown_files(floor)
            .iter()
            .map(|p| self.relative(p))
            .collect();
        documents.sort();

        FloorListing {
            floor: floor.number(),
            floor_name: floor.name().to_string(),
            document_count: documents.len(),
            documents,
            note: None,
        }
    }

    /// Latest handoff note (Floor 4) and current goals (Floor 5)
    pub fn session_context(&self) -> SessionContext {
        let mut context = SessionContext::default();

        let action = self.root.join(Floor::Action.directory());
        let handoffs = newest_first(top_level_markdown(&action, "handoff"));
        let candidates = if handoffs.is_empty() {
            newest_first(top_level_markdown(&action, "session"))
        } else {
            handoffs
        };
        if let Some(latest) = candidates.first() {
            if let Ok(content) = read_lossy(latest) {
                context.handoff = Some(Preview {
                    path: self.relative(latest),
                    preview: content.chars().take(HANDOFF_PREVIEW_CHARS).collect(),
                });
            }
        }

        let vision = self.root.join(Floor::Vision.directory());
        let mut goals = top_level_markdown(&vision, "");
        goals.sort();
        for goal in goals.iter().take(MAX_GOALS) {
            let Ok(content) = read_lossy(goal) else {
                continue;
            };
            context.goals.push(Preview {
                path: self.relative(goal),
                preview: content
                    .lines()
                    .take(GOAL_PREVIEW_LINES)
                    .collect::<Vec<_>>()
                    .join("\n"),
            });
        }

        context
    }

    /// Create the five floor directories
    pub fn init_floors(&self) -> DocumentResult<()> {
        for floor in Floor::all() {
            let dir = self.root.join(floor.directory());
            std::fs::create_dir_all(&dir).map_err(|e| io_error(&dir, e))?;
        }
        Ok(())
    }

    /// All `*.md` files under a floor directory, recursively
    fn markdown_files(&self, floor: Floor) -> Vec<PathBuf> {
        let dir = self.root.join(floor.directory());
        if !dir.is_dir() {
            return Vec::new();
        }

        WalkDir::new(&dir)
            .sort_by_file_name()
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_file() && is_markdown(e.path()))
            .map(|e| e.into_path())
            .collect()
    }

    /// Join a relative document path onto the root, rejecting escapes
    fn resolve(&self, doc_path: &str) -> DocumentResult<PathBuf> {
        let relative = Path::new(doc_path);
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes || doc_path.trim().is_empty() {
            return Err(DocumentError::OutsideRoot(doc_path.to_string()));
        }
        Ok(self.root.join(relative))
    }

    /// Path relative to the root with `/` separators
    fn relative(&self, path: &Path) -> String {
        let rel = path.strip_prefix(&self.root).unwrap_or(path);
        rel.components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }
}

fn io_error(path: &Path, source: std::io::Error) -> DocumentError {
    DocumentError::Io {
        path: path.display().to_string(),
        source,
    }
}

/// Read a file as text, replacing bytes that are not valid UTF-8
fn read_lossy(path: &Path) -> std::io::Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn is_markdown(path: &Path) -> bool {
    path.extension().map_or(false, |ext| ext == "md")
}

/// `*.md` files directly in `dir` whose name contains `needle`
fn top_level_markdown(dir: &Path, needle: &str) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };

    entries
        .filter_map(Result::ok)
        .map(|e| e.path())
        .filter(|p| p.is_file() && is_markdown(p))
        .filter(|p| {
            p.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.contains(needle))
        })
        .collect()
}

fn newest_first(mut paths: Vec<PathBuf>) -> Vec<PathBuf> {
    paths.sort_by_key(|p| {
        std::cmp::Reverse(
            std::fs::metadata(p)
                .and_then(|m| m.modified())
                .unwrap_or(SystemTime::UNIX_EPOCH),
        )
    });
    paths
}
