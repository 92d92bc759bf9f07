//! Dispatcher-level tests for the MCP method table

use serde_json::{json, Value};

use mtr_mcp::mtr::MtrClient;
use mtr_mcp::protocol::{JsonRpcRequest, ServerInfo};
use mtr_mcp::server::McpDispatcher;
use mtr_mcp::tools::get_all_tools;

fn dispatcher() -> McpDispatcher {
    McpDispatcher::new(ServerInfo::default(), get_all_tools(MtrClient::default()))
}

fn request(value: Value) -> JsonRpcRequest {
    serde_json::from_value(value).unwrap()
}

async fn dispatch(value: Value) -> Value {
    let response = dispatcher()
        .dispatch(request(value))
        .await
        .expect("expected a response");
    serde_json::to_value(&response).unwrap()
}

#[tokio::test]
async fn test_invalid_version_echoes_id() {
    let response = dispatch(json!({"jsonrpc": "1.0", "id": 7, "method": "ping"})).await;
    assert_eq!(response["error"]["code"], -32600);
    assert_eq!(response["id"], 7);

    // id may be any scalar; a string id comes back unchanged too
    let response =
        dispatch(json!({"jsonrpc": "2.1", "id": "abc", "method": "tools/list"})).await;
    assert_eq!(response["error"]["code"], -32600);
    assert_eq!(response["id"], "abc");
}

#[tokio::test]
async fn test_unknown_method_named_in_error() {
    let response =
        dispatch(json!({"jsonrpc": "2.0", "id": 1, "method": "trains/teleport"})).await;
    assert_eq!(response["error"]["code"], -32601);
    assert!(response["error"]["message"]
        .as_str()
        .unwrap()
        .contains("trains/teleport"));
}

#[tokio::test]
async fn test_initialize_defaults_protocol_version() {
    let response = dispatch(json!({"jsonrpc": "2.0", "id": 1, "method": "initialize"})).await;
    let result = &response["result"];
    assert_eq!(result["protocolVersion"], "2024-11-05");
    assert_eq!(result["serverInfo"]["name"], "mtr_next_train");
    for capability in ["tools", "resources", "prompts", "logging"] {
        assert!(result["capabilities"].get(capability).is_some());
    }
}

#[tokio::test]
async fn test_initialize_echoes_requested_version() {
    let response = dispatch(json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "initialize",
        "params": {"protocolVersion": "2025-03-26"}
    }))
    .await;
    assert_eq!(response["result"]["protocolVersion"], "2025-03-26");
}

#[tokio::test]
async fn test_tools_list_has_two_tools() {
    let response = dispatch(json!({"jsonrpc": "2.0", "id": 1, "method": "tools/list"})).await;
    let tools = response["result"]["tools"].as_array().unwrap();
    assert_eq!(tools.len(), 2);

    let mut names: Vec<&str> = tools.iter().map(|t| t["name"].as_str().unwrap()).collect();
    names.sort_unstable();
    assert_eq!(names, ["get_next_train_schedule", "get_next_train_structured"]);
    for tool in tools {
        assert!(tool["inputSchema"]["properties"].get("line").is_some());
        assert!(tool["inputSchema"]["properties"].get("sta").is_some());
    }
}

#[tokio::test]
async fn test_resources_list_has_two_resources() {
    let response =
        dispatch(json!({"jsonrpc": "2.0", "id": 1, "method": "resources/list"})).await;
    let resources = response["result"]["resources"].as_array().unwrap();
    assert_eq!(resources.len(), 2);
}

#[tokio::test]
async fn test_prompts_list_has_three_prompts() {
    let response = dispatch(json!({"jsonrpc": "2.0", "id": 1, "method": "prompts/list"})).await;
    let prompts = response["result"]["prompts"].as_array().unwrap();
    assert_eq!(prompts.len(), 3);
}

#[tokio::test]
async fn test_read_station_list_names_every_line() {
    let response = dispatch(json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "resources/read",
        "params": {"uri": "mtr://stations/list"}
    }))
    .await;

    let contents = response["result"]["contents"].as_array().unwrap();
    assert_eq!(contents.len(), 1);
    assert_eq!(contents[0]["uri"], "mtr://stations/list");
    assert_eq!(contents[0]["mimeType"], "text/plain");

    let text = contents[0]["text"].as_str().unwrap();
    for code in ["TKL", "AEL", "ISL", "TCL", "TML", "EAL", "SIL", "TWL", "KTL", "DRL"] {
        assert!(text.contains(code), "station list is missing line {}", code);
    }
}

#[tokio::test]
async fn test_read_unknown_resource() {
    let response = dispatch(json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "resources/read",
        "params": {"uri": "mtr://stations/secret"}
    }))
    .await;
    assert_eq!(response["error"]["code"], -32602);
}

#[tokio::test]
async fn test_get_prompt_substitutes_arguments() {
    let response = dispatch(json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "prompts/get",
        "params": {"name": "check_next_train", "arguments": {"line": "TKL", "station": "TKO"}}
    }))
    .await;

    let messages = response["result"]["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0]["role"], "user");

    let text = messages[0]["content"]["text"].as_str().unwrap();
    assert!(text.contains("TKL"));
    assert!(text.contains("TKO"));
}

#[tokio::test]
async fn test_get_prompt_missing_arguments_default_to_empty() {
    let response = dispatch(json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "prompts/get",
        "params": {"name": "check_next_train"}
    }))
    .await;
    assert!(response.get("error").is_none());
    assert_eq!(response["result"]["messages"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_get_unknown_prompt() {
    let response = dispatch(json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "prompts/get",
        "params": {"name": "summon_train"}
    }))
    .await;
    assert_eq!(response["error"]["code"], -32602);
}

#[tokio::test]
async fn test_call_unknown_tool_is_not_a_protocol_error() {
    let response = dispatch(json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "tools/call",
        "params": {"name": "teleport", "arguments": {}}
    }))
    .await;

    // Failures surface as tool content, never as a JSON-RPC error.
    assert!(response.get("error").is_none());
    let result = &response["result"];
    assert_eq!(result["isError"], true);
    assert!(result["content"][0]["text"]
        .as_str()
        .unwrap()
        .contains("teleport"));
}

#[tokio::test]
async fn test_ping() {
    let response = dispatch(json!({"jsonrpc": "2.0", "id": 9, "method": "ping"})).await;
    assert_eq!(response["result"], json!({}));
    assert_eq!(response["id"], 9);
}

#[tokio::test]
async fn test_initialized_notification_has_no_response() {
    let response = dispatcher()
        .dispatch(request(json!({
            "jsonrpc": "2.0",
            "method": "notifications/initialized"
        })))
        .await;
    assert!(response.is_none());
}
