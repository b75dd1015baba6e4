//! MCP Server implementation for the aurelion library
//!
//! Implements the Model Context Protocol (JSON-RPC 2.0, one frame per line)
//! directly without external SDK dependencies.

use std::io::{BufRead, BufReader, Write};

use serde_json::{json, Value};
use tracing::{debug, info, warn};

use super::handlers::dispatch_tool;
use super::jsonrpc::{tool_result, JsonRpcRequest, JsonRpcResponse, RpcFailure, ToolCall};
use super::state::ServerState;
use crate::config::Config;

/// MCP Server handler
pub struct McpServer {
    state: ServerState,
}

impl McpServer {
    pub fn new(state: ServerState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &ServerState {
        &self.state
    }

    /// Handle a JSON-RPC request
    pub fn handle_request(&mut self, request: &JsonRpcRequest) -> Option<JsonRpcResponse> {
        // Notifications (no id) don't get responses
        let Some(id) = request.id.clone() else {
            match request.method.as_str() {
                "notifications/initialized" => {
                    self.state.initialized = true;
                    info!("MCP: Client initialized");
                }
                "notifications/cancelled" => {
                    debug!("MCP: Request cancelled");
                }
                _ => {
                    warn!(method = %request.method, "MCP: Unknown notification");
                }
            }
            return None;
        };

        let result = match request.method.as_str() {
            "initialize" => self.handle_initialize(&request.params),
            "tools/list" => self.handle_list_tools(&request.params),
            "tools/call" => self.handle_call_tool(&request.params),
            "ping" => Ok(json!({})),
            _ => Err(RpcFailure::UnknownMethod(request.method.clone())),
        };

        Some(match result {
            Ok(value) => JsonRpcResponse::success(id, value),
            Err(failure) => JsonRpcResponse::failure(id, failure),
        })
    }

    fn handle_initialize(&self, _params: &Value) -> Result<Value, RpcFailure> {
        Ok(json!({
            "protocolVersion": "2024-11-05",
            "capabilities": {
                "tools": {
                    "listChanged": false
                }
            },
            "serverInfo": {
                "name": self.state.config.server.name,
                "version": env!("CARGO_PKG_VERSION"),
                "sessionId": self.state.engine.journal().session_id()
            },
            "instructions": self.state.config.server.instructions
        }))
    }

    fn handle_list_tools(&self, _params: &Value) -> Result<Value, RpcFailure> {
        let floor_schema = json!({
            "type": "integer",
            "description": "Floor number (1=Foundation, 2=Systems, 3=Networks, 4=Action, 5=Vision)",
            "minimum": 1,
            "maximum": 5
        });

        Ok(json!({
            "tools": [
                {
                    "name": "library_concept",
                    "description": "Find documents linked to concepts in the knowledge graph. Partial, case-insensitive match on concept labels and ids. Example: library_concept({\"concept\": \"career\"})",
                    "inputSchema": {
                        "type": "object",
                        "properties": {
                            "concept": { "type": "string", "description": "Concept search term" }
                        },
                        "required": ["concept"]
                    }
                },
                {
                    "name": "library_floor",
                    "description": "List the catalogued documents on one floor of the library.",
                    "inputSchema": {
                        "type": "object",
                        "properties": { "floor": floor_schema },
                        "required": ["floor"]
                    }
                },
                {
                    "name": "library_tag",
                    "description": "Find documents by tag. A fragment matches every tag containing it, e.g. 'strat' matches 'strategy'.",
                    "inputSchema": {
                        "type": "object",
                        "properties": {
                            "tag": { "type": "string", "description": "Tag or tag fragment" }
                        },
                        "required": ["tag"]
                    }
                },
                {
                    "name": "library_related",
                    "description": "Walk the concept graph from a starting concept and list the related concepts met along the way, with their documents.",
                    "inputSchema": {
                        "type": "object",
                        "properties": {
                            "concept": { "type": "string", "description": "Starting concept id or label" },
                            "max_hops": { "type": "integer", "description": "Maximum hops (default: 2)", "default": self.state.config.library.default_max_hops }
                        },
                        "required": ["concept"]
                    }
                },
                {
                    "name": "library_history",
                    "description": "Every library query issued in this session, oldest first.",
                    "inputSchema": { "type": "object", "properties": {} }
                },
                {
                    "name": "library_summary",
                    "description": "Query counts by type for this session.",
                    "inputSchema": { "type": "object", "properties": {} }
                },
                {
                    "name": "memory_search",
                    "description": "Search the memory store for documents containing a query. Optionally scope to one floor.",
                    "inputSchema": {
                        "type": "object",
                        "properties": {
                            "query": { "type": "string", "description": "Search terms" },
                            "floor": floor_schema
                        },
                        "required": ["query"]
                    }
                },
                {
                    "name": "memory_read",
                    "description": "Read the full content of a document, e.g. Floor_01_Foundation/career-master.md",
                    "inputSchema": {
                        "type": "object",
                        "properties": {
                            "path": { "type": "string", "description": "Path relative to the memory root" }
                        },
                        "required": ["path"]
                    }
                },
                {
                    "name": "memory_write",
                    "description": "Write or update a document. The floor decides which directory it lands in.",
                    "inputSchema": {
                        "type": "object",
                        "properties": {
                            "path": { "type": "string", "description": "File name or relative path" },
                            "content": { "type": "string", "description": "Full document content (markdown)" },
                            "floor": floor_schema
                        },
                        "required": ["path", "content", "floor"]
                    }
                },
                {
                    "name": "memory_floor",
                    "description": "List every document stored in a floor directory.",
                    "inputSchema": {
                        "type": "object",
                        "properties": { "floor": floor_schema },
                        "required": ["floor"]
                    }
                },
                {
                    "name": "memory_session",
                    "description": "Load the active session context: latest handoff note from Floor 4 and current goals from Floor 5. Use at the start of a session.",
                    "inputSchema": { "type": "object", "properties": {} }
                }
            ]
        }))
    }

    fn handle_call_tool(&mut self, params: &Value) -> Result<Value, RpcFailure> {
        let call = ToolCall::from_params(params)?;
        Ok(tool_result(dispatch_tool(
            &mut self.state,
            call.name,
            call.arguments,
        )))
    }
}

/// Serve line-delimited JSON-RPC frames until the reader is exhausted
pub fn serve<R: BufRead, W: Write>(
    server: &mut McpServer,
    reader: R,
    mut writer: W,
) -> anyhow::Result<()> {
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        debug!("MCP: Received: {}", truncate(&line));

        let response = match serde_json::from_str::<JsonRpcRequest>(&line) {
            Ok(request) => server.handle_request(&request),
            Err(e) => Some(JsonRpcResponse::parse_error(&e)),
        };

        if let Some(response) = response {
            let json = serde_json::to_string(&response)?;
            debug!("MCP: Sending: {}", truncate(&json));
            writeln!(writer, "{}", json)?;
            writer.flush()?;
        }
    }

    Ok(())
}

fn truncate(s: &str) -> &str {
    match s.char_indices().nth(100) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Run the stdio MCP server
pub fn run_mcp_server(config: Config) -> anyhow::Result<()> {
    info!("aurelion MCP server starting");

    let mut server = McpServer::new(ServerState::from_config(config));

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    serve(&mut server, BufReader::new(stdin.lock()), stdout.lock())?;

    let summary = server.state().engine.session_summary();
    info!(
        queries = summary.total_queries,
        "aurelion MCP server stopping"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::graph::{GraphNode, GraphStore};
    use crate::mcp::jsonrpc::{INVALID_PARAMS, METHOD_NOT_FOUND, PARSE_ERROR};
    use crate::core::library::LibraryQueryEngine;

    fn server() -> McpServer {
        let graph = GraphStore::from_nodes(vec![GraphNode::new("strategy")
            .with_label("Strategy")
            .with_files(vec!["35_Strategic_Plan.md".into()])]);
        McpServer::new(ServerState::new(
            LibraryQueryEngine::with_graph(graph),
            None,
            Config::default(),
        ))
    }

    fn run(server: &mut McpServer, input: &str) -> Vec<Value> {
        let mut out = Vec::new();
        serve(server, input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn test_initialize_and_list_tools() {
        let mut server = server();
        let responses = run(
            &mut server,
            concat!(
                r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{}}"#,
                "\n",
                r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
                "\n",
                r#"{"jsonrpc":"2.0","id":2,"method":"tools/list"}"#,
                "\n"
            ),
        );

        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0]["result"]["serverInfo"]["name"], "aurelion-memory");
        let tools = responses[1]["result"]["tools"].as_array().unwrap();
        assert_eq!(tools.len(), 11);
        assert!(server.state().initialized);
    }

    #[test]
    fn test_tool_call_is_journaled() {
        let mut server = server();
        let responses = run(
            &mut server,
            concat!(
                r#"{"jsonrpc":"2.0","id":1,"method":"tools/call","params":{"name":"library_concept","arguments":{"concept":"strat"}}}"#,
                "\n",
                r#"{"jsonrpc":"2.0","id":2,"method":"tools/call","params":{"name":"library_summary","arguments":{}}}"#,
                "\n"
            ),
        );

        let text = responses[0]["result"]["content"][0]["text"].as_str().unwrap();
        let files: Value = serde_json::from_str(text).unwrap();
        assert_eq!(files[0]["name"], "35_Strategic_Plan.md");

        let summary_text = responses[1]["result"]["content"][0]["text"].as_str().unwrap();
        let summary: Value = serde_json::from_str(summary_text).unwrap();
        assert_eq!(summary["total_queries"], 1);
    }

    #[test]
    fn test_errors() {
        let mut server = server();
        let responses = run(
            &mut server,
            concat!(
                "this is not json\n",
                r#"{"jsonrpc":"2.0","id":1,"method":"resources/list"}"#,
                "\n",
                r#"{"jsonrpc":"2.0","id":2,"method":"tools/call","params":{"name":"nope"}}"#,
                "\n",
                r#"{"jsonrpc":"2.0","id":3,"method":"tools/call","params":{}}"#,
                "\n"
            ),
        );

        assert_eq!(responses[0]["error"]["code"], PARSE_ERROR);
        assert_eq!(responses[1]["error"]["code"], METHOD_NOT_FOUND);
        assert_eq!(responses[2]["result"]["isError"], true);
        assert_eq!(
            responses[2]["result"]["content"][0]["text"],
            "Error: Unknown tool: nope"
        );
        assert_eq!(responses[3]["error"]["code"], INVALID_PARAMS);
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        let long = "é".repeat(150);
        assert_eq!(truncate(&long).chars().count(), 100);
        assert_eq!(truncate("short"), "short");
    }
}
