//! HTTP server setup with Axum

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tokio::sync::oneshot;
use tower_http::cors::{Any, CorsLayer};

use super::sse::handler::{messages_handler, sse_get_handler, sse_post_handler};
use super::sse::McpState;
use crate::protocol::DEFAULT_PROTOCOL_VERSION;
use crate::utils::time::iso8601_now;
use crate::{prompts, resources};

/// Create the Axum router with all endpoints
pub fn create_router(state: Arc<McpState>) -> Router {
    // CORS configuration - allow all origins so browser-based MCP clients
    // and the MCP Inspector can connect
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/sse", get(sse_get_handler).post(sse_post_handler))
        .route("/messages/", post(messages_handler))
        .route("/health", get(health_handler))
        .route("/info", get(info_handler))
        .layer(cors)
        .with_state(state)
}

/// Bind the listener, report readiness, and serve until shutdown resolves.
///
/// The bound address is sent over the readiness channel once the socket is
/// live, so callers await the signal instead of polling.
pub async fn serve(
    addr: SocketAddr,
    state: Arc<McpState>,
    ready: oneshot::Sender<SocketAddr>,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;
    let app = create_router(state);

    // Receiver may have been dropped; the server runs regardless.
    let _ = ready.send(local_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}

/// GET /health
async fn health_handler(State(state): State<Arc<McpState>>) -> Json<serde_json::Value> {
    Json(json!({
        "status": if state.is_running() { "healthy" } else { "unhealthy" },
        "service": "mtr-mcp-server",
        "active_sessions": state.sessions.count(),
        "timestamp": iso8601_now(),
    }))
}

/// GET /info
async fn info_handler(State(state): State<Arc<McpState>>) -> Json<serde_json::Value> {
    let info = state.dispatcher.server_info();
    Json(json!({
        "server": {
            "name": info.name,
            "version": info.version,
        },
        "protocol_version": DEFAULT_PROTOCOL_VERSION,
        "status": state.status_label(),
        "capabilities": {
            "tools": state.dispatcher.tool_count(),
            "resources": resources::get_all_resources().len(),
            "prompts": prompts::get_all_prompts().len(),
        },
        "active_sessions": state.sessions.count(),
        "endpoints": {
            "sse": "/sse",
            "messages": "/messages/",
            "health": "/health",
            "info": "/info",
        },
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mtr::MtrClient;
    use crate::protocol::ServerInfo;
    use crate::server::McpDispatcher;
    use crate::tools::get_all_tools;
    use axum::body::Body;
    use axum::http::Request;
    use tower::util::ServiceExt;

    fn test_router() -> Router {
        let client = MtrClient::default();
        let dispatcher = McpDispatcher::new(ServerInfo::default(), get_all_tools(client));
        create_router(Arc::new(McpState::new(dispatcher)))
    }

    #[tokio::test]
    async fn test_health_check() {
        let app = test_router();

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
    }

    #[tokio::test]
    async fn test_info_reports_capability_counts() {
        let app = test_router();

        let response = app
            .oneshot(Request::builder().uri("/info").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["capabilities"]["tools"], 2);
        assert_eq!(value["capabilities"]["resources"], 2);
        assert_eq!(value["capabilities"]["prompts"], 3);
        assert_eq!(value["status"], "running");
    }
}
