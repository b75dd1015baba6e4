//! MCP Tool handlers
//!
//! Each module handles a group of related tools.

pub mod documents;
pub mod library;

use serde_json::Value;

use super::state::ServerState;

/// Result type for tool handlers
pub type ToolResult = Result<String, String>;

/// Dispatch a tool call to the appropriate handler
pub fn dispatch_tool(state: &mut ServerState, name: &str, args: &Value) -> ToolResult {
    match name {
        // Graph query tools (journaled)
        "library_concept" => library::do_concept(state, args),
        "library_floor" => library::do_floor(state, args),
        "library_tag" => library::do_tag(state, args),
        "library_related" => library::do_related(state, args),

        // Session journal tools
        "library_history" => library::do_history(state),
        "library_summary" => library::do_summary(state),

        // Document tools
        "memory_search" => documents::do_search(state, args),
        "memory_read" => documents::do_read(state, args),
        "memory_write" => documents::do_write(state, args),
        "memory_floor" => documents::do_floor(state, args),
        "memory_session" => documents::do_session(state),

        _ => Err(format!("Unknown tool: {}", name)),
    }
}

/// Deserialize tool arguments, mapping failures to a tool error
fn parse_args<T: serde::de::DeserializeOwned>(args: &Value) -> Result<T, String> {
    serde_json::from_value(args.clone()).map_err(|e| format!("Invalid params: {}", e))
}

/// Pretty JSON for tool output
fn to_text<T: serde::Serialize>(value: &T) -> ToolResult {
    serde_json::to_string_pretty(value).map_err(|e| format!("Serialization error: {}", e))
}
