//! Protocol dispatcher
//!
//! Maps JSON-RPC method names to handlers over the fixed capability catalog.
//! The method table is closed: everything outside it answers `-32601`.

mod handlers;

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use serde_json::{json, Value};

use crate::protocol::{
    JsonRpcError, JsonRpcRequest, JsonRpcResponse, McpTool, ServerInfo, Tool,
    DEFAULT_PROTOCOL_VERSION,
};
use crate::{prompts, resources};

pub use handlers::*;

/// Either side of a JSON-RPC exchange, serialized untagged
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum McpResponse {
    Success(JsonRpcResponse),
    Error(JsonRpcError),
}

impl McpResponse {
    /// True for the error envelope
    pub fn is_error(&self) -> bool {
        matches!(self, McpResponse::Error(_))
    }
}

/// Dispatcher over the fixed MCP method table
pub struct McpDispatcher {
    server_info: ServerInfo,
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl McpDispatcher {
    /// Create a dispatcher with the given identity and tool catalog
    pub fn new(server_info: ServerInfo, tools: Vec<Arc<dyn Tool>>) -> Self {
        let tools = tools
            .into_iter()
            .map(|tool| (tool.definition().name, tool))
            .collect();
        Self { server_info, tools }
    }

    /// Server identity used in the initialize handshake
    pub fn server_info(&self) -> &ServerInfo {
        &self.server_info
    }

    /// Number of registered tools
    pub fn tool_count(&self) -> usize {
        self.tools.len()
    }

    /// Resolve one JSON-RPC request to a response envelope.
    ///
    /// Returns `None` for notifications, which expect no reply.
    pub async fn dispatch(&self, request: JsonRpcRequest) -> Option<McpResponse> {
        let id = request.id.clone().unwrap_or(Value::Null);

        if !request.is_valid() {
            return Some(McpResponse::Error(JsonRpcError::invalid_request(
                id,
                "jsonrpc must be '2.0'".to_string(),
            )));
        }

        let params = request.params.unwrap_or(Value::Null);

        let response = match request.method.as_str() {
            "initialize" => self.handle_initialize(id, &params),
            "notifications/initialized" => return None,
            "ping" => McpResponse::Success(JsonRpcResponse::new(id, json!({}))),
            "tools/list" => self.handle_tools_list(id),
            "resources/list" => self.handle_resources_list(id),
            "prompts/list" => self.handle_prompts_list(id),
            "resources/read" => self.handle_resources_read(id, &params),
            "prompts/get" => self.handle_prompts_get(id, &params),
            "tools/call" => self.handle_tools_call(id, &params).await,
            _ => McpResponse::Error(JsonRpcError::method_not_found(id, request.method)),
        };

        Some(response)
    }

    fn handle_initialize(&self, id: Value, params: &Value) -> McpResponse {
        // Echo the client's requested version; fall back to our default.
        let protocol_version = params
            .get("protocolVersion")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_PROTOCOL_VERSION);

        let result = json!({
            "protocolVersion": protocol_version,
            "capabilities": {
                "tools": {},
                "resources": {},
                "prompts": {},
                "logging": {}
            },
            "serverInfo": {
                "name": self.server_info.name,
                "version": self.server_info.version
            }
        });
        McpResponse::Success(JsonRpcResponse::new(id, result))
    }

    fn handle_tools_list(&self, id: Value) -> McpResponse {
        let tools: Vec<McpTool> = self.tools.values().map(|t| t.definition()).collect();
        McpResponse::Success(JsonRpcResponse::new(id, json!({ "tools": tools })))
    }

    fn handle_resources_list(&self, id: Value) -> McpResponse {
        let resources = resources::get_all_resources();
        McpResponse::Success(JsonRpcResponse::new(id, json!({ "resources": resources })))
    }

    fn handle_prompts_list(&self, id: Value) -> McpResponse {
        let prompts = prompts::get_all_prompts();
        McpResponse::Success(JsonRpcResponse::new(id, json!({ "prompts": prompts })))
    }

    fn handle_resources_read(&self, id: Value, params: &Value) -> McpResponse {
        let Some(uri) = params.get("uri").and_then(Value::as_str) else {
            return McpResponse::Error(JsonRpcError::invalid_params(
                id,
                "Missing resource URI".to_string(),
            ));
        };

        match resources::read_resource(uri) {
            Some((mime_type, text)) => McpResponse::Success(JsonRpcResponse::new(
                id,
                json!({
                    "contents": [{
                        "uri": uri,
                        "mimeType": mime_type,
                        "text": text
                    }]
                }),
            )),
            None => McpResponse::Error(JsonRpcError::new(
                id,
                -32602,
                format!("Unknown resource: {}", uri),
                Some(json!({"uri": uri})),
            )),
        }
    }

    fn handle_prompts_get(&self, id: Value, params: &Value) -> McpResponse {
        let Some(name) = params.get("name").and_then(Value::as_str) else {
            return McpResponse::Error(JsonRpcError::invalid_params(
                id,
                "Missing prompt name".to_string(),
            ));
        };

        let arguments = params.get("arguments").cloned().unwrap_or(json!({}));

        match prompts::render_prompt(name, &arguments) {
            Some((description, text)) => McpResponse::Success(JsonRpcResponse::new(
                id,
                json!({
                    "description": description,
                    "messages": [{
                        "role": "user",
                        "content": {
                            "type": "text",
                            "text": text
                        }
                    }]
                }),
            )),
            None => McpResponse::Error(JsonRpcError::new(
                id,
                -32602,
                format!("Unknown prompt: {}", name),
                Some(json!({"prompt": name})),
            )),
        }
    }

    /// tools/call never surfaces a JSON-RPC error: unknown tools and every
    /// execution failure render as text content so callers always receive a
    /// parseable tool result.
    async fn handle_tools_call(&self, id: Value, params: &Value) -> McpResponse {
        let Some(tool_name) = extract_tool_name(params) else {
            return McpResponse::Success(JsonRpcResponse::new(
                id,
                error_response("Missing tool name".to_string()),
            ));
        };

        let Some(tool) = self.tools.get(tool_name) else {
            return McpResponse::Success(JsonRpcResponse::new(
                id,
                error_response(format!("Unknown tool: {}", tool_name)),
            ));
        };

        let arguments = extract_arguments(params);

        match tool.execute(arguments).await {
            Ok(result) => McpResponse::Success(JsonRpcResponse::new(id, result)),
            Err(e) => McpResponse::Success(JsonRpcResponse::new(
                id,
                error_response(e.to_string()),
            )),
        }
    }
}
