//! Human-readable next-train schedule tool

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::mtr::{format_train_schedule, resolve_line_code, resolve_station_code, FetchError, MtrClient};
use crate::protocol::{McpTool, Tool};
use crate::types::McpResult;

/// Tool returning a formatted, human-readable train schedule.
///
/// Accepts both station/line names and codes. Upstream failures are rendered
/// as text; the tool never propagates an error past the dispatcher.
pub struct NextTrainScheduleTool {
    client: MtrClient,
}

impl NextTrainScheduleTool {
    pub fn new(client: MtrClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for NextTrainScheduleTool {
    fn definition(&self) -> McpTool {
        McpTool {
            name: "get_next_train_schedule".to_string(),
            description: "Get the next train arrival schedule for an MTR line and station as human-readable text. Accepts both names (e.g. 'Tseung Kwan O', 'Island Line') and codes (e.g. 'TKO', 'ISL').".to_string(),
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

        // Surface name-to-code conversions so callers see what was queried.
        let mut notes = String::new();
        if !line.eq_ignore_ascii_case(&line_code) {
            notes.push_str(&format!("Resolved line: '{}' -> '{}'\n", line, line_code));
        }
        if !sta.eq_ignore_ascii_case(&station_code) {
            notes.push_str(&format!("Resolved station: '{}' -> '{}'\n", sta, station_code));
        }

        let text = match self.client.get_schedule(&line_code, &station_code, lang).await {
            Ok(data) => {
                let schedule = format_train_schedule(&data);
                if notes.is_empty() {
                    schedule
                } else {
                    format!("{}\n{}", notes.trim_end(), schedule)
                }
            }
            Err(FetchError::Http { status, .. }) => {
                format!("Error: API request failed with status {}", status)
            }
            Err(FetchError::Timeout) => "Error: request timed out. Please try again.".to_string(),
            Err(err) => format!("Error: {}", err),
        };

        Ok(json!({
            "content": [{
                "type": "text",
                "text": text
            }]
        }))
    }
}
