//! Test doubles for the host-side ports.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use lowcoder_host::{
    CredentialResolver, CredentialValues, ExecutionHost, ExecutionId, HostError, NodeContext,
    NodeId, WorkflowId,
};
use parking_lot::Mutex;

/// In-memory stand-in for the host's execution machinery.
#[derive(Default)]
pub struct MemoryHost {
    pub waited_until: Mutex<Option<DateTime<Utc>>>,
    pub static_data: Mutex<HashMap<String, serde_json::Value>>,
}

#[async_trait]
impl ExecutionHost for MemoryHost {
    async fn put_execution_to_wait(&self, until: DateTime<Utc>) -> Result<(), HostError> {
        *self.waited_until.lock() = Some(until);
        Ok(())
    }

    fn get_static_data(&self, key: &str) -> Option<serde_json::Value> {
        self.static_data.lock().get(key).cloned()
    }

    fn set_static_data(&self, key: &str, value: serde_json::Value) {
        self.static_data.lock().insert(key.to_owned(), value);
    }
}

/// Resolver handing out one fixed set of credential values.
pub struct FixedCredentials(pub CredentialValues);

#[async_trait]
impl CredentialResolver for FixedCredentials {
    async fn resolve(&self, _credential_type: &str) -> Result<CredentialValues, HostError> {
        Ok(self.0.clone())
    }
}

/// A context over a fresh [`MemoryHost`].
pub fn context(host: Arc<MemoryHost>) -> NodeContext {
    NodeContext::new(ExecutionId::v4(), NodeId::v4(), WorkflowId::v4(), host)
}

/// A context whose `options` parameter is set to the given value.
pub fn context_with_options(host: Arc<MemoryHost>, options: serde_json::Value) -> NodeContext {
    let mut parameters = serde_json::Map::new();
    parameters.insert("options".to_owned(), options);
    context(host).with_parameters(parameters)
}
