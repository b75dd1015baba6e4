//! Document handlers for MCP (search, read, write, floor listing, session context)

use serde_json::Value;

use super::{parse_args, to_text, ToolResult};
use crate::core::floor::Floor;
use crate::mcp::state::ServerState;
use crate::mcp::tools::{MemoryFloorTool, MemoryReadTool, MemorySearchTool, MemoryWriteTool};

fn floor_arg(number: i64) -> Result<Floor, String> {
    Floor::from_number(number).ok_or_else(|| format!("Invalid floor number: {}. Use 1-5.", number))
}

/// Full-text search
pub fn do_search(state: &ServerState, args: &Value) -> ToolResult {
    let tool_args: MemorySearchTool = parse_args(args)?;
    let store = state.documents()?;

    let floor = tool_args.floor.map(floor_arg).transpose()?;
    let results = store.search(&tool_args.query, floor);

    if results.is_empty() {
        return Ok(format!(
            "No documents found matching \"{}\".",
            tool_args.query
        ));
    }
    to_text(&results)
}

pub fn do_read(state: &ServerState, args: &Value) -> ToolResult {
    let tool_args: MemoryReadTool = parse_args(args)?;
    let doc = state
        .documents()?
        .read(&tool_args.path)
        .map_err(|e| e.to_string())?;
    to_text(&doc)
}

pub fn do_write(state: &ServerState, args: &Value) -> ToolResult {
    let tool_args: MemoryWriteTool = parse_args(args)?;
    let floor = floor_arg(tool_args.floor)?;
    let written = state
        .documents()?
        .write(&tool_args.path, &tool_args.content, floor)
        .map_err(|e| e.to_string())?;
    to_text(&written)
}

pub fn do_floor(state: &ServerState, args: &Value) -> ToolResult {
    let tool_args: MemoryFloorTool = parse_args(args)?;
    let floor = floor_arg(tool_args.floor)?;
    to_text(&state.documents()?.list_floor(floor))
}

/// Latest handoff note and current goals
pub fn do_session(state: &ServerState) -> ToolResult {
    to_text(&state.documents()?.session_context())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::core::documents::DocumentStore;
    use crate::core::graph::GraphStore;
    use crate::core::library::LibraryQueryEngine;
    use serde_json::json;
    use tempfile::tempdir;

    fn state(root: Option<&std::path::Path>) -> ServerState {
        ServerState::new(
            LibraryQueryEngine::with_graph(GraphStore::empty()),
            root.map(DocumentStore::new),
            Config::default(),
        )
    }

    #[test]
    fn test_write_then_read_and_search() {
        let dir = tempdir().unwrap();
        let state = state(Some(dir.path()));

        let text = do_write(
            &state,
            &json!({"path": "goals.md", "content": "# Goals\nShip the book", "floor": 5}),
        )
        .unwrap();
        let written: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(written["written"], "Floor_05_Vision/goals.md");

        let doc: Value =
            serde_json::from_str(&do_read(&state, &json!({"path": "Floor_05_Vision/goals.md"})).unwrap())
                .unwrap();
        assert_eq!(doc["lines"], 2);

        let hits: Value =
            serde_json::from_str(&do_search(&state, &json!({"query": "book", "floor": 5})).unwrap())
                .unwrap();
        assert_eq!(hits[0]["snippet"], "Ship the book");
    }

    #[test]
    fn test_no_hits_message() {
        let dir = tempdir().unwrap();
        let state = state(Some(dir.path()));
        let text = do_search(&state, &json!({"query": "zebra"})).unwrap();
        assert_eq!(text, "No documents found matching \"zebra\".");
    }

    #[test]
    fn test_invalid_floor() {
        let dir = tempdir().unwrap();
        let state = state(Some(dir.path()));
        let err = do_floor(&state, &json!({"floor": 6})).unwrap_err();
        assert!(err.contains("Invalid floor number: 6"));
    }

    #[test]
    fn test_missing_document() {
        let dir = tempdir().unwrap();
        let state = state(Some(dir.path()));
        let err = do_read(&state, &json!({"path": "Floor_01_Foundation/x.md"})).unwrap_err();
        assert!(err.starts_with("Document not found"));
    }

    #[test]
    fn test_unconfigured_memory_path() {
        let state = state(None);
        let err = do_session(&state).unwrap_err();
        assert!(err.contains("AURELION_MEMORY_PATH"));
    }
}
