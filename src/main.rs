//! MTR MCP Server - Binary Entry Point

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::sync::oneshot;
use tracing::info;

use mtr_mcp::api::{serve, McpState};
use mtr_mcp::config::ServerConfig;
use mtr_mcp::mtr::MtrClient;
use mtr_mcp::protocol::ServerInfo;
use mtr_mcp::server::McpDispatcher;
use mtr_mcp::tools::get_all_tools;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env();

    let client = MtrClient::with_timeout(config.api_url.clone(), config.fetch_timeout);
    let dispatcher = McpDispatcher::new(ServerInfo::default(), get_all_tools(client));
    let state = Arc::new(McpState::new(dispatcher).with_heartbeat_interval(config.heartbeat_interval));

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .with_context(|| format!("invalid bind address {}:{}", config.host, config.port))?;

    info!("Starting MTR MCP Server");
    info!("Upstream schedule API: {}", config.api_url);

    // Flip the running flag before the listener drains so late heartbeats
    // report "stopped".
    let shutdown_state = state.clone();
    let shutdown = async move {
        let _ = tokio::signal::ctrl_c().await;
        shutdown_state.set_running(false);
        info!("Shutdown signal received, draining connections");
    };

    let (ready_tx, ready_rx) = oneshot::channel();
    let server = tokio::spawn(serve(addr, state, ready_tx, shutdown));

    let bound = match ready_rx.await {
        Ok(addr) => addr,
        Err(_) => {
            // serve() exited before signalling readiness; surface its error
            server.await?.context("server failed to start")?;
            anyhow::bail!("server exited before reporting readiness");
        }
    };
    info!("Listening on http://{}", bound);
    info!("SSE endpoint:      http://{}/sse", bound);
    info!("Messages endpoint: http://{}/messages/", bound);
    info!("2 tools, 2 resources, 3 prompts registered");

    server.await?.context("server error")?;
    Ok(())
}
