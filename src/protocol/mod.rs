//! Protocol types for MCP and JSON-RPC communication
//!
//! This module contains all protocol-related types and traits.

mod jsonrpc;
mod mcp;

pub use jsonrpc::{
    ErrorObject, JsonRpcError, JsonRpcNotification, JsonRpcRequest, JsonRpcResponse,
};
pub use mcp::{McpPrompt, McpResource, McpTool, PromptArgument, ServerInfo, Tool};

/// Protocol version advertised when the client does not request one
pub const DEFAULT_PROTOCOL_VERSION: &str = "2024-11-05";
