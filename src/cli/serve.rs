//! Serve command - Start MCP server

use anyhow::Result;
use clap::Args;

use crate::config::Config;

/// Start MCP server for AI integration
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Transport mode (only stdio is supported)
    #[arg(long, default_value = "stdio")]
    pub transport: String,
}

pub fn run(args: ServeArgs, config: Config) -> Result<()> {
    match args.transport.as_str() {
        "stdio" => {
            eprintln!("🚀 Starting MCP server (transport: stdio)");
            eprintln!("📂 Graph: {}", config.graph_path().display());
            crate::mcp::run_mcp_server(config)
        }
        other => anyhow::bail!("Unknown transport: {}. Use 'stdio'.", other),
    }
}
