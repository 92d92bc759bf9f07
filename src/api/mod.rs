//! HTTP API: router, MCP transport endpoints, and server startup

pub mod http;
pub mod sse;

pub use http::{create_router, serve};
pub use sse::{McpState, Session, SessionGuard, SessionRegistry};
