//! labtrace MCP Server - Main entry point

use labtrace_mcp::McpServer;
use std::env;
use std::path::PathBuf;
use tracing::Level;

fn main() {
    // Initialize tracing (log to stderr; stdout belongs to the protocol)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(Level::INFO)
        .init();

    // Get project file from environment or use default
    let project_path = env::var("LABTRACE_PROJECT")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("project.ttl"));

    let server = McpServer::new(project_path);

    // Run server (blocks until stdin closes)
    if let Err(e) = server.run() {
        eprintln!("MCP server error: {}", e);
        std::process::exit(1);
    }
}
