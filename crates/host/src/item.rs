use serde::{Deserialize, Serialize};

/// One item of workflow data flowing between nodes.
///
/// The host batches items per node invocation; nodes receive the full
/// batch and return the batch that flows downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowItem {
    /// The item's structured payload.
    pub json: serde_json::Value,
}

impl WorkflowItem {
    /// Create an item from a JSON payload.
    #[must_use]
    pub fn new(json: serde_json::Value) -> Self {
        Self { json }
    }

    /// An item with an empty object payload.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            json: serde_json::Value::Object(serde_json::Map::new()),
        }
    }
}

impl From<serde_json::Value> for WorkflowItem {
    fn from(json: serde_json::Value) -> Self {
        Self::new(json)
    }
}
