//! SSE and MCP HTTP handlers

use std::convert::Infallible;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{
        sse::{Event, Sse},
        IntoResponse, Response,
    },
    Json,
};
use futures::Stream;
use serde::Deserialize;
use serde_json::Value;

use super::{McpState, SessionGuard};
use crate::protocol::{JsonRpcError, JsonRpcRequest};

/// Frame stream for one established session.
///
/// Emits the given frame first, then heartbeats until the client disconnects.
/// The guard inside the stream removes the session from the registry no
/// matter how the stream ends.
fn session_stream(
    state: Arc<McpState>,
    session_id: String,
    first: Event,
) -> impl Stream<Item = Result<Event, Infallible>> {
    // Constructed outside the stream body so the generator owns the guard
    // from the start; a stream dropped before its first poll still cleans up.
    let guard = SessionGuard::new(state.sessions.clone(), session_id);

    async_stream::stream! {
        let _guard = guard;

        yield Ok::<_, Infallible>(first);

        let mut counter: u64 = 0;
        loop {
            tokio::time::sleep(state.heartbeat_interval).await;
            counter += 1;
            let note = state.heartbeat(counter);
            let Ok(data) = serde_json::to_string(&note) else {
                break;
            };
            yield Ok(Event::default().event("message").data(data));
        }
    }
}

/// GET /sse - legacy protocol.
///
/// Opens the stream immediately; the first frame is an `endpoint` event
/// telling the client where to POST messages for this session.
pub async fn sse_get_handler(State(state): State<Arc<McpState>>) -> impl IntoResponse {
    let session = state.sessions.create();
    tracing::info!(session_id = %session.id, "SSE stream opened (legacy GET)");

    let endpoint = format!("/messages/?session_id={}", session.id);
    let first = Event::default().event("endpoint").data(endpoint);

    Sse::new(session_stream(state, session.id, first))
}

/// POST /sse - current protocol.
///
/// An `initialize` request upgrades the connection to a stream whose first
/// frame carries the initialize result. Any other method is answered
/// synchronously as a plain JSON-RPC response.
pub async fn sse_post_handler(
    State(state): State<Arc<McpState>>,
    Json(request): Json<JsonRpcRequest>,
) -> Response {
    if !request.is_valid() || request.method != "initialize" {
        return dispatch_response(&state, request).await;
    }

    let session = state.sessions.create();
    tracing::info!(session_id = %session.id, "SSE stream opened (initialize)");

    let first = match state.dispatcher.dispatch(request).await {
        Some(response) => match serde_json::to_string(&response) {
            Ok(data) => Event::default().event("message").data(data),
            Err(e) => {
                state.sessions.remove(&session.id);
                tracing::error!(error = %e, "failed to frame initialize result");
                return StatusCode::INTERNAL_SERVER_ERROR.into_response();
            }
        },
        // initialize always produces a response; an empty frame would only
        // mean the method table changed underneath us.
        None => {
            state.sessions.remove(&session.id);
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    Sse::new(session_stream(state, session.id, first)).into_response()
}

/// Query parameters for POST /messages/
#[derive(Debug, Deserialize)]
pub struct MessagesParams {
    pub session_id: Option<String>,
}

/// POST /messages/ - JSON-RPC requests against an existing session.
///
/// A missing session id is fatal to the request. An unknown id is logged and
/// the request proceeds: the first message may race the registry insert.
pub async fn messages_handler(
    State(state): State<Arc<McpState>>,
    Query(params): Query<MessagesParams>,
    Json(request): Json<JsonRpcRequest>,
) -> Response {
    let Some(session_id) = params.session_id else {
        let id = request.id.clone().unwrap_or(Value::Null);
        let error =
            JsonRpcError::invalid_request(id, "Missing session_id query parameter".to_string());
        return (StatusCode::BAD_REQUEST, Json(error)).into_response();
    };

    if !state.sessions.exists(&session_id) {
        tracing::warn!(session_id = %session_id, "message posted for unknown session");
    }

    dispatch_response(&state, request).await
}

async fn dispatch_response(state: &McpState, request: JsonRpcRequest) -> Response {
    match state.dispatcher.dispatch(request).await {
        Some(response) => (StatusCode::OK, Json(response)).into_response(),
        None => StatusCode::ACCEPTED.into_response(),
    }
}
