//! Named prompt templates
//!
//! Each prompt renders a fixed natural-language template. Arguments are not
//! validated; missing ones default to the empty string.

use serde_json::Value;

use crate::protocol::{McpPrompt, PromptArgument};

fn arg(name: &str, description: &str, required: bool) -> PromptArgument {
    PromptArgument {
        name: name.to_string(),
        description: description.to_string(),
        required,
    }
}

/// The fixed prompt catalog for prompts/list
pub fn get_all_prompts() -> Vec<McpPrompt> {
    vec![
        McpPrompt {
            name: "check_next_train".to_string(),
            description: "Quick train schedule check for one station".to_string(),
            arguments: vec![
                arg("line", "MTR line name or code", true),
                arg("station", "Station name or code", true),
            ],
        },
        McpPrompt {
            name: "plan_mtr_journey".to_string(),
            description: "Plan an MTR journey between two stations".to_string(),
            arguments: vec![
                arg("origin", "Origin station", true),
                arg("destination", "Destination station", true),
            ],
        },
        McpPrompt {
            name: "compare_stations".to_string(),
            description: "Compare train frequencies at multiple stations".to_string(),
            arguments: vec![
                arg("station1", "First station", true),
                arg("station2", "Second station", true),
                arg("station3", "Optional third station", false),
            ],
        },
    ]
}

fn argument(arguments: &Value, name: &str) -> String {
    arguments
        .get(name)
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string()
}

/// Render a prompt by name, returning its description and the materialized
/// user-message text. Unknown names return `None`; the dispatcher maps that
/// to `-32602`.
pub fn render_prompt(name: &str, arguments: &Value) -> Option<(String, String)> {
    match name {
        "check_next_train" => {
            let line = argument(arguments, "line");
            let station = argument(arguments, "station");
            Some((
                "Quick train schedule check for one station".to_string(),
                format!(
                    "Check the next train arrival at {station} station on the {line} line.\n\n\
                     Please use the get_next_train_schedule tool to:\n\
                     1. Get real-time train schedules\n\
                     2. Show both upbound and downbound trains\n\
                     3. Highlight the next arriving train\n\
                     4. Mention any service delays\n\n\
                     Respond in a friendly, conversational way."
                ),
            ))
        }
        "plan_mtr_journey" => {
            let origin = argument(arguments, "origin");
            let destination = argument(arguments, "destination");
            Some((
                "Plan an MTR journey between two stations".to_string(),
                format!(
                    "Help me plan an MTR journey from {origin} to {destination}.\n\n\
                     Please:\n\
                     1. Use the mtr://lines/map resource to find the route\n\
                     2. Check next trains at {origin} using get_next_train_schedule\n\
                     3. Identify any interchange stations needed\n\
                     4. Estimate total journey time\n\
                     5. Provide step-by-step directions\n\n\
                     Be helpful and mention the platform numbers and train destinations."
                ),
            ))
        }
        "compare_stations" => {
            let mut stations = vec![argument(arguments, "station1"), argument(arguments, "station2")];
            let third = argument(arguments, "station3");
            if !third.is_empty() {
                stations.push(third);
            }
            let stations_list = stations.join(", ");
            Some((
                "Compare train frequencies at multiple stations".to_string(),
                format!(
                    "Compare the next train arrivals at these stations: {stations_list}\n\n\
                     Please use get_next_train_structured for each station to:\n\
                     1. Get structured train data programmatically\n\
                     2. Extract wait times for upbound and downbound trains\n\
                     3. Compare which station has the soonest train\n\
                     4. Recommend the best station based on timing\n\n\
                     Present the comparison in a clear table format."
                ),
            ))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_catalog_has_three_prompts() {
        let prompts = get_all_prompts();
        assert_eq!(prompts.len(), 3);
        assert_eq!(prompts[2].arguments.len(), 3);
        assert!(!prompts[2].arguments[2].required);
    }

    #[test]
    fn test_check_next_train_substitutes_arguments() {
        let (_, text) =
            render_prompt("check_next_train", &json!({"line": "TKL", "station": "TKO"})).unwrap();
        assert!(text.contains("TKL"));
        assert!(text.contains("TKO"));
    }

    #[test]
    fn test_missing_arguments_default_to_empty() {
        let (_, text) = render_prompt("plan_mtr_journey", &json!({})).unwrap();
        assert!(text.contains("journey from  to ."));
    }

    #[test]
    fn test_compare_stations_optional_third() {
        let (_, two) =
            render_prompt("compare_stations", &json!({"station1": "TKO", "station2": "NOP"}))
                .unwrap();
        assert!(two.contains("TKO, NOP\n"));

        let (_, three) = render_prompt(
            "compare_stations",
            &json!({"station1": "TKO", "station2": "NOP", "station3": "QUB"}),
        )
        .unwrap();
        assert!(three.contains("TKO, NOP, QUB"));
    }

    #[test]
    fn test_unknown_prompt() {
        assert!(render_prompt("summon_train", &json!({})).is_none());
    }
}
