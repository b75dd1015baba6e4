//! JSON-RPC 2.0 framing for the library server
//!
//! One request or notification per line in, one response per line out.
//! Tool failures are not protocol errors: they travel inside a successful
//! `tools/call` result with `isError: true`.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

pub const PARSE_ERROR: i64 = -32700;
pub const METHOD_NOT_FOUND: i64 = -32601;
pub const INVALID_PARAMS: i64 = -32602;

/// Incoming frame; `id` is absent for notifications
#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    pub id: Option<Value>,
    pub method: String,
    #[serde(default)]
    pub params: Value,
}

/// Why a frame could not be answered with a result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RpcFailure {
    /// The line was not a JSON-RPC request
    Parse(String),
    UnknownMethod(String),
    /// `tools/call` without a string `name`
    MissingToolName,
}

impl RpcFailure {
    pub fn code(&self) -> i64 {
        match self {
            RpcFailure::Parse(_) => PARSE_ERROR,
            RpcFailure::UnknownMethod(_) => METHOD_NOT_FOUND,
            RpcFailure::MissingToolName => INVALID_PARAMS,
        }
    }

    pub fn message(&self) -> String {
        match self {
            RpcFailure::Parse(e) => format!("Parse error: {}", e),
            RpcFailure::UnknownMethod(m) => format!("Method not found: {}", m),
            RpcFailure::MissingToolName => "Missing tool name".to_string(),
        }
    }
}

/// Name and arguments of a `tools/call` request
#[derive(Debug)]
pub struct ToolCall<'a> {
    pub name: &'a str,
    pub arguments: &'a Value,
}

impl<'a> ToolCall<'a> {
    pub fn from_params(params: &'a Value) -> Result<Self, RpcFailure> {
        let name = params["name"]
            .as_str()
            .ok_or(RpcFailure::MissingToolName)?;
        Ok(Self {
            name,
            arguments: &params["arguments"],
        })
    }
}

/// `tools/call` result body for a handler outcome
pub fn tool_result(outcome: Result<String, String>) -> Value {
    match outcome {
        Ok(text) => json!({
            "content": [{ "type": "text", "text": text }]
        }),
        Err(e) => json!({
            "content": [{ "type": "text", "text": format!("Error: {}", e) }],
            "isError": true
        }),
    }
}

#[derive(Debug, Serialize)]
pub struct JsonRpcError {
    pub code: i64,
    pub message: String,
}

/// Outgoing frame
#[derive(Debug, Serialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: &'static str,
    pub id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

impl JsonRpcResponse {
    pub fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result: Some(result),
            error: None,
        }
    }

    pub fn failure(id: Value, failure: RpcFailure) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result: None,
            error: Some(JsonRpcError {
                code: failure.code(),
                message: failure.message(),
            }),
        }
    }

    /// Response to a line that did not parse; the id is unknown
    pub fn parse_error(e: &serde_json::Error) -> Self {
        Self::failure(Value::Null, RpcFailure::Parse(e.to_string()))
    }
}
