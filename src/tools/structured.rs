//! Machine-readable next-train schedule tool

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::mtr::{resolve_line_code, resolve_station_code, FetchError, MtrClient};
use crate::protocol::{McpTool, Tool};
use crate::types::McpResult;

/// Empty-dataset error code tag
const CODE_EMPTY: &str = "NT-204";
/// Fetch-timeout error code tag
const CODE_TIMEOUT: &str = "TIMEOUT";
/// Catch-all error code tag
const CODE_EXCEPTION: &str = "EXCEPTION";

/// Tool returning a fixed JSON report for programmatic agents.
///
/// The report shape is stable across every outcome: `up`/`down` are always
/// arrays, `error` is `null` on success or `{code, message}` on failure, and
/// `suggestions` carries remediation hints keyed by the failure category.
pub struct NextTrainStructuredTool {
    client: MtrClient,
}

impl NextTrainStructuredTool {
    pub fn new(client: MtrClient) -> Self {
        Self { client }
    }

    fn report(
        line: &str,
        sta: &str,
        timestamp: Value,
        up: Vec<Value>,
        down: Vec<Value>,
        raw: Value,
        error: Value,
        suggestions: &[&str],
    ) -> Value {
        json!({
            "resolved_line": line,
            "resolved_station": sta,
            "timestamp": timestamp,
            "up": up,
            "down": down,
            "raw": raw,
            "error": error,
            "suggestions": suggestions
        })
    }
}

/// Project the upstream train list down to the four documented fields
fn normalize_trains(trains: Option<&Value>) -> Vec<Value> {
    trains
        .and_then(Value::as_array)
        .map(|list| {
            list.iter()
                .map(|t| {
                    json!({
                        "dest": t.get("dest").cloned().unwrap_or(Value::Null),
                        "ttnt": t.get("ttnt").cloned().unwrap_or(Value::Null),
                        "plat": t.get("plat").cloned().unwrap_or(Value::Null),
                        "time": t.get("time").cloned().unwrap_or(Value::Null),
                    })
                })
                .collect()
        })
        .unwrap_or_default()
}

#[async_trait]
impl Tool for NextTrainStructuredTool {
    fn definition(&self) -> McpTool {
        McpTool {
            name: "get_next_train_structured".to_string(),
            description: "Get next train arrivals as structured JSON for programmatic agents: resolved codes, timestamp, up/down train lists, raw payload, error and suggestions.".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "line": {
                        "type": "string",
                        "description": "MTR line name or code, e.g. 'Tseung Kwan O Line' or 'TKL'"
                    },
                    "sta": {
                        "type": "string",
                        "description": "Station name or code, e.g. 'Tseung Kwan O' or 'TKO'"
                    },
                    "lang": {
                        "type": "string",
                        "enum": ["EN", "TC"],
                        "description": "Language: 'EN' for English or 'TC' for Traditional Chinese",
                        "default": "EN"
                    }
                },
                "required": ["line", "sta"]
            }),
        }
    }

    async fn execute(&self, params: Value) -> McpResult<Value> {
        let line = params.get("line").and_then(Value::as_str).unwrap_or("");
        let sta = params.get("sta").and_then(Value::as_str).unwrap_or("");
        let lang = params.get("lang").and_then(Value::as_str).unwrap_or("EN");

        let line_code = resolve_line_code(line);
        let station_code = resolve_station_code(sta);

        let report = match self.client.get_schedule(&line_code, &station_code, lang).await {
            Ok(data) => {
                let timestamp = data.get("curr_time").cloned().unwrap_or(Value::Null);

                if let Some(wrapper) = data.get("error") {
                    let error = json!({
                        "code": wrapper.get("errorCode").cloned().unwrap_or(Value::Null),
                        "message": wrapper.get("errorMsg").cloned().unwrap_or(Value::Null),
                    });
                    Self::report(
                        &line_code,
                        &station_code,
                        timestamp,
                        vec![],
                        vec![],
                        data.clone(),
                        error,
                        &[
                            "Check station name or code",
                            "Try using the station code (e.g., TKO)",
                            "Try again later if real-time data is unavailable",
                        ],
                    )
                } else {
                    let first_entry = data
                        .get("data")
                        .and_then(Value::as_object)
                        .and_then(|m| m.values().next());

                    match first_entry {
                        Some(trains) => {
                            let up = normalize_trains(trains.get("UP"));
                            let down = normalize_trains(trains.get("DOWN"));
                            Self::report(
                                &line_code,
                                &station_code,
                                timestamp,
                                up,
                                down,
                                data.clone(),
                                Value::Null,
                                &[],
                            )
                        }
                        None => Self::report(
                            &line_code,
                            &station_code,
                            timestamp,
                            vec![],
                            vec![],
                            data.clone(),
                            json!({"code": CODE_EMPTY, "message": "The contents are empty!"}),
                            &["Station may not have realtime data right now"],
                        ),
                    }
                }
            }
            Err(FetchError::Http { status, body }) => Self::report(
                &line_code,
                &station_code,
                Value::Null,
                vec![],
                vec![],
                Value::Null,
                json!({"code": format!("HTTP-{}", status), "message": body}),
                &["Check network/API status"],
            ),
            Err(FetchError::Timeout) => Self::report(
                &line_code,
                &station_code,
                Value::Null,
                vec![],
                vec![],
                Value::Null,
                json!({"code": CODE_TIMEOUT, "message": "Request timed out"}),
                &["Try again"],
            ),
            Err(FetchError::Request(msg)) => Self::report(
                &line_code,
                &station_code,
                Value::Null,
                vec![],
                vec![],
                Value::Null,
                json!({"code": CODE_EXCEPTION, "message": msg}),
                &["Check server logs"],
            ),
        };

        Ok(json!({
            "content": [{
                "type": "text",
                "text": serde_json::to_string(&report)?
            }]
        }))
    }
}
