//! Library query handlers for MCP (concept, floor, tag, related, history, summary)

use serde_json::Value;

use super::{parse_args, to_text, ToolResult};
use crate::mcp::state::ServerState;
use crate::mcp::tools::{LibraryConceptTool, LibraryFloorTool, LibraryRelatedTool, LibraryTagTool};

/// Documents linked to matching concepts
pub fn do_concept(state: &ServerState, args: &Value) -> ToolResult {
    let tool_args: LibraryConceptTool = parse_args(args)?;
    to_text(&state.engine.search_by_concept(&tool_args.concept))
}

/// Catalogued documents on a floor
pub fn do_floor(state: &ServerState, args: &Value) -> ToolResult {
    let tool_args: LibraryFloorTool = parse_args(args)?;
    to_text(&state.engine.search_by_floor(tool_args.floor))
}

/// Documents under matching tag keys
pub fn do_tag(state: &ServerState, args: &Value) -> ToolResult {
    let tool_args: LibraryTagTool = parse_args(args)?;
    to_text(&state.engine.search_by_tag(&tool_args.tag))
}

/// Related concepts along a greedy walk
pub fn do_related(state: &ServerState, args: &Value) -> ToolResult {
    let tool_args: LibraryRelatedTool = parse_args(args)?;
    let max_hops = tool_args
        .max_hops
        .unwrap_or(state.config.library.default_max_hops);
    to_text(&state.engine.related_concepts(&tool_args.concept, max_hops))
}

/// Every query of this session, oldest first
pub fn do_history(state: &ServerState) -> ToolResult {
    to_text(&state.engine.query_history())
}

/// Query counts for this session
pub fn do_summary(state: &ServerState) -> ToolResult {
    let summary = state.engine.session_summary();
    let mut value = serde_json::to_value(&summary).map_err(|e| e.to_string())?;
    if let Value::Object(map) = &mut value {
        map.insert(
            "session_id".to_string(),
            Value::String(state.engine.journal().session_id().to_string()),
        );
    }
    to_text(&value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::core::graph::{GraphNode, GraphStore};
    use crate::core::library::LibraryQueryEngine;
    use serde_json::json;

    fn state() -> ServerState {
        let graph = GraphStore::from_nodes(vec![
            GraphNode::new("career")
                .with_label("Career")
                .with_floor(1)
                .with_files(vec!["01_Career_Master.md".into()])
                .with_connections(vec!["skills".into()]),
            GraphNode::new("skills")
                .with_label("Skills")
                .with_connections(vec!["career".into()]),
        ]);
        ServerState::new(LibraryQueryEngine::with_graph(graph), None, Config::default())
    }

    #[test]
    fn test_concept_returns_json_list() {
        let state = state();
        let text = do_concept(&state, &json!({"concept": "career"})).unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value[0]["name"], "01_Career_Master.md");
        assert_eq!(value[0]["floor"], 1);
    }

    #[test]
    fn test_related_uses_default_hops() {
        let state = state();
        let text = do_related(&state, &json!({"concept": "career"})).unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_invalid_params() {
        let state = state();
        let err = do_floor(&state, &json!({"floor": "three"})).unwrap_err();
        assert!(err.starts_with("Invalid params"));
    }

    #[test]
    fn test_summary_includes_session_id() {
        let state = state();
        do_tag(&state, &json!({"tag": "daily"})).unwrap();
        do_floor(&state, &json!({"floor": 7})).unwrap();

        let value: Value = serde_json::from_str(&do_summary(&state).unwrap()).unwrap();
        assert_eq!(value["total_queries"], 2);
        assert_eq!(value["by_type"]["tag"], 1);
        assert!(value["session_id"].as_str().unwrap().starts_with("session-"));

        let history: Value = serde_json::from_str(&do_history(&state).unwrap()).unwrap();
        assert_eq!(history[1]["query"], "Floor 7");
        assert_eq!(history[1]["results_count"], 0);
    }
}
