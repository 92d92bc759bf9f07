//! MTR Next Train MCP Server
//!
//! A thin gateway exposing Hong Kong MTR real-time train schedules through
//! the Model Context Protocol (MCP): JSON-RPC 2.0 over an SSE transport.
//!
//! # Capabilities
//!
//! - **2 Tools**: `get_next_train_schedule` (human-readable) and
//!   `get_next_train_structured` (machine-readable JSON report)
//! - **2 Resources**: `mtr://stations/list`, `mtr://lines/map`
//! - **3 Prompts**: `check_next_train`, `plan_mtr_journey`, `compare_stations`
//!
//! # Modules
//!
//! - `protocol`: MCP and JSON-RPC protocol types
//! - `server`: protocol dispatcher over the fixed method table
//! - `api`: axum router, SSE transport, session registry
//! - `mtr`: upstream schedule client, station tables, formatting
//! - `tools`, `resources`, `prompts`: the capability catalog
//! - `config`: environment-driven configuration
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use tokio::sync::oneshot;
//! use mtr_mcp::api::{serve, McpState};
//! use mtr_mcp::mtr::MtrClient;
//! use mtr_mcp::protocol::ServerInfo;
//! use mtr_mcp::server::McpDispatcher;
//! use mtr_mcp::tools::get_all_tools;
//!
//! #[tokio::main]
//! async fn main() -> std::io::Result<()> {
//!     let dispatcher = McpDispatcher::new(ServerInfo::default(), get_all_tools(MtrClient::default()));
//!     let state = Arc::new(McpState::new(dispatcher));
//!     let (ready, _) = oneshot::channel();
//!     serve("127.0.0.1:8000".parse().unwrap(), state, ready, std::future::pending()).await
//! }
//! ```

pub mod api;
pub mod config;
pub mod mtr;
pub mod prompts;
pub mod protocol;
pub mod resources;
pub mod server;
pub mod tools;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use api::{McpState, SessionRegistry};
pub use config::ServerConfig;
pub use mtr::MtrClient;
pub use protocol::{McpPrompt, McpResource, McpTool, ServerInfo, Tool};
pub use server::{McpDispatcher, McpResponse};
pub use types::McpResult;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
