//! MCP server implementation

use serde_json::{json, Value};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;
use tracing::{debug, error, info};

use crate::error::McpError;
use crate::protocol::*;
use crate::tools;

/// MCP Server
///
/// Handles Model Context Protocol requests via stdio transport. Every tool
/// call is one synchronous store round-trip against the project file; the
/// server holds no graph state between requests.
pub struct McpServer {
    project_path: PathBuf,
}

impl McpServer {
    /// Create a new MCP server
    ///
    /// # Arguments
    ///
    /// * `project_path` - Default project file used when a tool call does
    ///   not carry its own `project_path`
    pub fn new(project_path: PathBuf) -> Self {
        Self { project_path }
    }

    /// Run the MCP server (stdio transport)
    ///
    /// Reads JSON-RPC requests from stdin and writes responses to stdout.
    pub fn run(&self) -> Result<(), McpError> {
        info!(project = %self.project_path.display(), "MCP server started");

        let stdin = std::io::stdin();
        let reader = BufReader::new(stdin);
        let mut stdout = std::io::stdout();

        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            debug!("Received request: {}", line);

            let request: JsonRpcRequest = match serde_json::from_str(&line) {
                Ok(req) => req,
                Err(e) => {
                    error!("Failed to parse request: {}", e);
                    let error_response =
                        JsonRpcError::new(None, -32700, format!("Parse error: {}", e));
                    let error_value = serde_json::to_value(&error_response).unwrap();
                    self.write_response(&mut stdout, &error_value)?;
                    continue;
                }
            };

            let response = self.handle_request(request);
            self.write_response(&mut stdout, &response)?;
        }

        info!("MCP server stopped");
        Ok(())
    }

    /// Handle a JSON-RPC request
    pub fn handle_request(&self, request: JsonRpcRequest) -> Value {
        let id = request.id.clone();

        match request.method.as_str() {
            "initialize" => self.handle_initialize(id),
            "tools/list" => self.handle_tools_list(id),
            "tools/call" => self.handle_tool_call(id, request.params),
            _ => {
                let error = JsonRpcError::new(
                    id,
                    -32601,
                    format!("Method not found: {}", request.method),
                );
                serde_json::to_value(error).unwrap()
            }
        }
    }

    /// Handle initialize request
    fn handle_initialize(&self, id: Option<Value>) -> Value {
        let response = InitializeResponse {
            protocol_version: "0.1.0",
            server_info: ServerInfo {
                name: "labtrace-mcp",
                version: env!("CARGO_PKG_VERSION"),
            },
            capabilities: Capabilities {
                tools: ToolsCapability { supported: true },
            },
        };

        let json_response = JsonRpcResponse::new(id, serde_json::to_value(response).unwrap());
        serde_json::to_value(json_response).unwrap()
    }

    /// Handle tools/list request
    fn handle_tools_list(&self, id: Option<Value>) -> Value {
        let tools = vec![
            self.tool_definition_add_question(),
            self.tool_definition_add_evidence(),
            self.tool_definition_add_hypothesis(),
            self.tool_definition_add_method(),
            self.tool_definition_get_graph(),
            self.tool_definition_get_graph_json(),
        ];

        let response = ToolListResponse { tools };
        let json_response = JsonRpcResponse::new(id, serde_json::to_value(response).unwrap());
        serde_json::to_value(json_response).unwrap()
    }

    /// Handle tools/call request
    fn handle_tool_call(&self, id: Option<Value>, params: Value) -> Value {
        let tool_name = match params.get("name").and_then(|v| v.as_str()) {
            Some(name) => name,
            None => {
                let error = JsonRpcError::new(id, -32602, "Missing tool name".to_string());
                return serde_json::to_value(error).unwrap();
            }
        };

        let tool_params = match params.get("arguments") {
            Some(args) => args.clone(),
            None => json!({}),
        };

        let result = match tool_name {
            "add_question" => self.call_add_question(tool_params),
            "add_evidence" => self.call_add_evidence(tool_params),
            "add_hypothesis" => self.call_add_hypothesis(tool_params),
            "add_method" => self.call_add_method(tool_params),
            "get_provenance_graph" => self.call_get_graph(tool_params),
            "get_provenance_graph_json" => self.call_get_graph_json(tool_params),
            _ => {
                let error =
                    JsonRpcError::new(id, -32601, format!("Tool not found: {}", tool_name));
                return serde_json::to_value(error).unwrap();
            }
        };

        match result {
            Ok(value) => {
                let response = JsonRpcResponse::new(id, value);
                serde_json::to_value(response).unwrap()
            }
            Err(e) => {
                let error = JsonRpcError::new(id, e.error_code(), e.to_string());
                serde_json::to_value(error).unwrap()
            }
        }
    }

    fn call_add_question(&self, params: Value) -> Result<Value, McpError> {
        let params: tools::QuestionParams = serde_json::from_value(params)?;
        let result = tools::handle_add_question(&self.project_path, params)?;
        Ok(serde_json::to_value(result)?)
    }

    fn call_add_evidence(&self, params: Value) -> Result<Value, McpError> {
        let params: tools::EvidenceParams = serde_json::from_value(params)?;
        let result = tools::handle_add_evidence(&self.project_path, params)?;
        Ok(serde_json::to_value(result)?)
    }

    fn call_add_hypothesis(&self, params: Value) -> Result<Value, McpError> {
        let params: tools::HypothesisParams = serde_json::from_value(params)?;
        let result = tools::handle_add_hypothesis(&self.project_path, params)?;
        Ok(serde_json::to_value(result)?)
    }

    fn call_add_method(&self, params: Value) -> Result<Value, McpError> {
        let params: tools::MethodParams = serde_json::from_value(params)?;
        let result = tools::handle_add_method(&self.project_path, params)?;
        Ok(serde_json::to_value(result)?)
    }

    fn call_get_graph(&self, params: Value) -> Result<Value, McpError> {
        let params: tools::GraphParams = serde_json::from_value(params)?;
        let turtle = tools::handle_get_graph(&self.project_path, params)?;
        Ok(Value::String(turtle))
    }

    fn call_get_graph_json(&self, params: Value) -> Result<Value, McpError> {
        let params: tools::GraphParams = serde_json::from_value(params)?;
        let result = tools::handle_get_graph_json(&self.project_path, params)?;
        Ok(serde_json::to_value(result)?)
    }

    /// Write response to stdout
    fn write_response<W: Write>(&self, writer: &mut W, response: &Value) -> Result<(), McpError> {
        let response_str = serde_json::to_string(response)?;
        writeln!(writer, "{}", response_str)?;
        writer.flush()?;
        debug!("Sent response: {}", response_str);
        Ok(())
    }

    // Tool definitions for tools/list response
    fn tool_definition_add_question(&self) -> ToolDefinition {
        ToolDefinition {
            name: "add_question",
            description: "Add a research question to the knowledge graph",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "label": {"type": "string", "description": "The question text"},
                    "agent": {"type": "string", "description": "URI of the recording agent"},
                    "project_path": {"type": "string", "description": "Path to the project Turtle file"}
                },
                "required": ["label", "agent"]
            }),
        }
    }

    fn tool_definition_add_evidence(&self) -> ToolDefinition {
        ToolDefinition {
            name: "add_evidence",
            description: "Add evidence from literature to the knowledge graph",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "content": {"type": "string", "description": "Summary of the finding"},
                    "citation": {"type": "string", "description": "Formatted bibliographic citation"},
                    "source": {"type": "string", "description": "DOI or URL of the source publication"},
                    "agent": {"type": "string", "description": "URI of the capturing agent"},
                    "project_path": {"type": "string", "description": "Path to the project Turtle file"},
                    "relates_to_question": {"type": "string", "description": "URI of the question this evidence addresses"}
                },
                "required": ["content", "citation", "source", "agent"]
            }),
        }
    }

    fn tool_definition_add_hypothesis(&self) -> ToolDefinition {
        ToolDefinition {
            name: "add_hypothesis",
            description: "Add a testable hypothesis derived from recorded evidence",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "label": {"type": "string", "description": "The hypothesis statement"},
                    "agent": {"type": "string", "description": "URI of the recording agent"},
                    "project_path": {"type": "string", "description": "Path to the project Turtle file"},
                    "derived_from": {
                        "type": "array",
                        "description": "URIs of supporting evidence or premises",
                        "items": {"type": "string"}
                    }
                },
                "required": ["label", "agent"]
            }),
        }
    }

    fn tool_definition_add_method(&self) -> ToolDefinition {
        ToolDefinition {
            name: "add_method",
            description: "Add an experimental method with its configured parameters",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "label": {"type": "string", "description": "Short name of the method"},
                    "method": {"type": "string", "description": "Methodology description (e.g. 'GAMESS MRCI')"},
                    "parameters": {
                        "type": "array",
                        "description": "Configured parameters as name=value strings",
                        "items": {"type": "string"}
                    },
                    "agent": {"type": "string", "description": "URI of the recording agent"},
                    "project_path": {"type": "string", "description": "Path to the project Turtle file"},
                    "derived_from": {"type": "string", "description": "URI of the hypothesis the method was designed for"}
                },
                "required": ["label", "agent"]
            }),
        }
    }

    fn tool_definition_get_graph(&self) -> ToolDefinition {
        ToolDefinition {
            name: "get_provenance_graph",
            description: "Return the current provenance graph in Turtle format",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "project_path": {"type": "string", "description": "Path to the project Turtle file"}
                }
            }),
        }
    }

    fn tool_definition_get_graph_json(&self) -> ToolDefinition {
        ToolDefinition {
            name: "get_provenance_graph_json",
            description: "Return evidence and questions as JSON for tree-view rendering",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "project_path": {"type": "string", "description": "Path to the project Turtle file"}
                }
            }),
        }
    }
}
