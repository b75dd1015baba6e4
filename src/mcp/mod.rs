//! MCP (Model Context Protocol) Server
//!
//! Exposes the library over stdio JSON-RPC for AI clients.
//!
//! # Tools
//! - `library_concept` / `library_floor` / `library_tag` / `library_related` - Graph queries
//! - `library_history` / `library_summary` - Session query journal
//! - `memory_search` - Full-text search across floor documents
//! - `memory_read` / `memory_write` - Document access
//! - `memory_floor` - List a floor directory
//! - `memory_session` - Latest handoff note and current goals

mod handlers;
mod jsonrpc;
mod server;
mod state;
mod tools;

pub use server::{run_mcp_server, serve, McpServer};
pub use state::ServerState;
