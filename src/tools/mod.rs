//! MCP tool implementations
//!
//! Two tools wrap the upstream schedule API:
//! - `get_next_train_schedule`: human-readable text
//! - `get_next_train_structured`: fixed JSON report for programmatic agents

pub mod schedule;
pub mod structured;

use std::sync::Arc;

use crate::mtr::MtrClient;
use crate::protocol::Tool;

pub use schedule::NextTrainScheduleTool;
pub use structured::NextTrainStructuredTool;

/// Build the fixed tool catalog against one upstream client
pub fn get_all_tools(client: MtrClient) -> Vec<Arc<dyn Tool>> {
    vec![
        Arc::new(NextTrainScheduleTool::new(client.clone())),
        Arc::new(NextTrainStructuredTool::new(client)),
    ]
}
