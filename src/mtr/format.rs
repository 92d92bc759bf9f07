//! Human-readable rendering of upstream schedule payloads

use serde_json::Value;

/// Format a schedule payload into human-readable text.
///
/// Handles the three payload shapes the upstream API produces: an error
/// wrapper, an empty data map, and the normal per-station train lists.
pub fn format_train_schedule(data: &Value) -> String {
    if let Some(error) = data.get("error") {
        let code = error
            .get("errorCode")
            .and_then(Value::as_str)
            .unwrap_or("unknown");
        let msg = error
            .get("errorMsg")
            .and_then(Value::as_str)
            .unwrap_or("unknown error");
        return format!("Warning: MTR API returned error {}: {}", code, msg);
    }

    // Payloads are keyed by "<LINE>-<STA>"; one key per request.
    let first_entry = data
        .get("data")
        .and_then(Value::as_object)
        .and_then(|m| m.iter().next());
    let Some((station_key, trains)) = first_entry else {
        return "Warning: no real-time data is available for this station right now.".to_string();
    };

    let mut out = Vec::new();
    out.push(format!("Next trains at {}", station_key));
    if let Some(curr) = data.get("curr_time").and_then(Value::as_str) {
        out.push(format!("Updated: {}", curr));
    }

    out.push(render_direction("Upbound", trains.get("UP")));
    out.push(render_direction("Downbound", trains.get("DOWN")));

    out.join("\n")
}

fn render_direction(label: &str, trains: Option<&Value>) -> String {
    let list = trains.and_then(Value::as_array);
    let Some(list) = list.filter(|l| !l.is_empty()) else {
        return format!("\n{}: no trains scheduled", label);
    };

    let mut lines = vec![format!("\n{}:", label)];
    for (i, train) in list.iter().enumerate() {
        let dest = train.get("dest").and_then(Value::as_str).unwrap_or("?");
        let plat = train.get("plat").and_then(Value::as_str).unwrap_or("?");
        let time = train.get("time").and_then(Value::as_str).unwrap_or("?");
        let ttnt = train.get("ttnt").and_then(Value::as_str).unwrap_or("?");
        lines.push(format!(
            "  {}. To {} | Platform {} | {} ({} min)",
            i + 1,
            dest,
            plat,
            time,
            ttnt
        ));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_payload() -> Value {
        json!({
            "curr_time": "2025-10-21 11:03:35",
            "data": {
                "TKL-TKO": {
                    "UP": [
                        {"dest": "POA", "ttnt": "2", "plat": "1", "time": "2025-10-21 11:05:35"},
                        {"dest": "POA", "ttnt": "9", "plat": "1", "time": "2025-10-21 11:12:35"}
                    ],
                    "DOWN": [
                        {"dest": "NOP", "ttnt": "4", "plat": "2", "time": "2025-10-21 11:07:35"}
                    ]
                }
            }
        })
    }

    #[test]
    fn test_format_normal_payload() {
        let text = format_train_schedule(&sample_payload());
        assert!(text.contains("TKL-TKO"));
        assert!(text.contains("Upbound:"));
        assert!(text.contains("Downbound:"));
        assert!(text.contains("To POA | Platform 1"));
        assert!(text.contains("(2 min)"));
    }

    #[test]
    fn test_format_error_wrapper() {
        let payload = json!({
            "error": {"errorCode": "NT-101", "errorMsg": "Invalid station"}
        });
        let text = format_train_schedule(&payload);
        assert!(text.contains("Warning"));
        assert!(text.contains("NT-101"));
        assert!(text.contains("Invalid station"));
    }

    #[test]
    fn test_format_empty_data() {
        let payload = json!({"curr_time": "2025-10-21 11:03:35", "data": {}});
        let text = format_train_schedule(&payload);
        assert!(text.contains("no real-time data"));
    }

    #[test]
    fn test_format_direction_without_trains() {
        let payload = json!({
            "data": {"DRL-DIS": {"UP": []}}
        });
        let text = format_train_schedule(&payload);
        assert!(text.contains("Upbound: no trains scheduled"));
        assert!(text.contains("Downbound: no trains scheduled"));
    }
}
