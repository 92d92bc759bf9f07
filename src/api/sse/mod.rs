//! SSE (Server-Sent Events) transport for MCP over HTTP
//!
//! ## Endpoints
//! - `GET /sse` - legacy stream: endpoint frame, then heartbeats
//! - `POST /sse` - current protocol: initialize opens the stream, anything
//!   else is answered synchronously
//! - `POST /messages/` - JSON-RPC requests against an existing session

pub mod handler;
pub mod session;

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use serde_json::json;

use crate::protocol::JsonRpcNotification;
use crate::server::McpDispatcher;
use crate::utils::time::iso8601_now;

pub use session::{Session, SessionGuard, SessionRegistry};

/// Default pause between heartbeat frames
pub const DEFAULT_HEARTBEAT_INTERVAL: Duration = Duration::from_secs(30);

/// Shared state for the MCP transport endpoints
pub struct McpState {
    /// Protocol dispatcher over the fixed capability catalog
    pub dispatcher: McpDispatcher,
    /// Active session registry
    pub sessions: SessionRegistry,
    /// Flipped to false when shutdown begins; reported in heartbeats
    running: AtomicBool,
    /// Pause between heartbeat frames
    pub heartbeat_interval: Duration,
}

impl McpState {
    pub fn new(dispatcher: McpDispatcher) -> Self {
        Self {
            dispatcher,
            sessions: SessionRegistry::new(),
            running: AtomicBool::new(true),
            heartbeat_interval: DEFAULT_HEARTBEAT_INTERVAL,
        }
    }

    /// Override the heartbeat pause (tests use short intervals)
    pub fn with_heartbeat_interval(mut self, interval: Duration) -> Self {
        self.heartbeat_interval = interval;
        self
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    pub fn set_running(&self, running: bool) {
        self.running.store(running, Ordering::SeqCst);
    }

    /// Status word used by heartbeats, /health and /info
    pub fn status_label(&self) -> &'static str {
        if self.is_running() {
            "running"
        } else {
            "stopped"
        }
    }

    /// Build the heartbeat notification for one session tick
    pub fn heartbeat(&self, counter: u64) -> JsonRpcNotification {
        JsonRpcNotification::new(
            "notifications/message".to_string(),
            json!({
                "counter": counter,
                "timestamp": iso8601_now(),
                "status": self.status_label(),
            }),
        )
    }
}
