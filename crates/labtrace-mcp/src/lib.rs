//! labtrace MCP Server
//!
//! Model Context Protocol server for recording research provenance from AI
//! clients (Claude Desktop, Cline, etc.).
//!
//! Provides 6 MCP tools:
//! - `add_question` - Record a research question
//! - `add_evidence` - Record evidence from literature
//! - `add_hypothesis` - Record a testable hypothesis
//! - `add_method` - Record an experimental method
//! - `get_provenance_graph` - Export the graph as Turtle
//! - `get_provenance_graph_json` - Project evidence/questions as JSON
//!
//! # Example
//!
//! ```no_run
//! use labtrace_mcp::McpServer;
//!
//! let server = McpServer::new("project.ttl".into());
//! server.run().unwrap();
//! ```

#![warn(missing_docs)]

mod error;
mod protocol;
mod server;
mod tools;

pub use error::McpError;
pub use protocol::JsonRpcRequest;
pub use server::McpServer;
