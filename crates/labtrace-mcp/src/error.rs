//! Error types for MCP server operations.

use labtrace_domain::ValidationError;
use labtrace_store::StoreError;
use thiserror::Error;

/// MCP server error types
#[derive(Error, Debug)]
pub enum McpError {
    /// Invalid request format or parameters
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Tool not found
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    /// A record draft or reference failed validation
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Storage layer error
    #[error("Store error: {0}")]
    Store(StoreError),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<StoreError> for McpError {
    fn from(err: StoreError) -> Self {
        // Validation failures are caller-correctable and keep their own
        // JSON-RPC code; everything else is a server-side store fault.
        match err {
            StoreError::Validation(validation) => McpError::Validation(validation),
            other => McpError::Store(other),
        }
    }
}

impl McpError {
    /// Convert to JSON-RPC error code
    pub fn error_code(&self) -> i32 {
        match self {
            McpError::InvalidRequest(_) => -32600,
            McpError::ToolNotFound(_) => -32601,
            McpError::Validation(_) => -32602,
            McpError::Store(_) => -32000,
            McpError::Json(_) => -32700,
            McpError::Io(_) => -32000,
        }
    }
}
