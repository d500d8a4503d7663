use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio_util::sync::CancellationToken;

use crate::credential::CredentialValues;
use crate::error::HostError;
use crate::id::{ExecutionId, NodeId, WorkflowId};

/// Port trait for the host's execution machinery.
///
/// The pause/resume state machine and the static-state store live in the
/// host runtime; nodes reach them only through this trait. Static state
/// is scoped to the node identity the context was built for — the host
/// guarantees whatever atomicity its store provides, nothing more.
#[async_trait]
pub trait ExecutionHost: Send + Sync {
    /// Suspend the running execution until `until`, or until an external
    /// resume (e.g. a matching webhook delivery) arrives first.
    async fn put_execution_to_wait(&self, until: DateTime<Utc>) -> Result<(), HostError>;

    /// Read a value from this node's static-state slot.
    fn get_static_data(&self, key: &str) -> Option<serde_json::Value>;

    /// Write a value into this node's static-state slot, overwriting any
    /// previous value under `key`.
    fn set_static_data(&self, key: &str, value: serde_json::Value);
}

/// Port trait for resolving decrypted credential values.
///
/// Implemented by the host's credential store. Resolution includes the
/// host's expiry handling: expirable properties are refreshed via the
/// credential type's pre-authentication before the values are returned.
#[async_trait]
pub trait CredentialResolver: Send + Sync {
    /// Resolve the values for the named credential type.
    async fn resolve(&self, credential_type: &str) -> Result<CredentialValues, HostError>;
}

/// Runtime context provided to a node for one invocation.
///
/// Constructed by the host before calling [`NodeType::execute`] or
/// [`NodeType::webhook`]. Carries identity, the node's configured
/// parameter values, and the ports into the host runtime.
///
/// [`NodeType::execute`]: crate::node::NodeType::execute
/// [`NodeType::webhook`]: crate::node::NodeType::webhook
pub struct NodeContext {
    /// Unique execution run identifier.
    pub execution_id: ExecutionId,
    /// Node in the workflow graph being invoked.
    pub node_id: NodeId,
    /// Workflow this execution belongs to.
    pub workflow_id: WorkflowId,
    /// Cancellation signal, checked cooperatively.
    pub cancellation: CancellationToken,
    /// Configured parameter values for this node instance.
    parameters: serde_json::Map<String, serde_json::Value>,
    /// Execution machinery port.
    host: Arc<dyn ExecutionHost>,
    /// Optional credential store port.
    credentials: Option<Arc<dyn CredentialResolver>>,
}

impl NodeContext {
    /// Create a context with the given identifiers and host port.
    pub fn new(
        execution_id: ExecutionId,
        node_id: NodeId,
        workflow_id: WorkflowId,
        host: Arc<dyn ExecutionHost>,
    ) -> Self {
        Self {
            execution_id,
            node_id,
            workflow_id,
            cancellation: CancellationToken::new(),
            parameters: serde_json::Map::new(),
            host,
            credentials: None,
        }
    }

    /// Attach configured parameter values.
    #[must_use]
    pub fn with_parameters(mut self, parameters: serde_json::Map<String, serde_json::Value>) -> Self {
        self.parameters = parameters;
        self
    }

    /// Attach a credential resolver.
    #[must_use]
    pub fn with_credentials(mut self, resolver: Arc<dyn CredentialResolver>) -> Self {
        self.credentials = Some(resolver);
        self
    }

    /// Use a pre-existing cancellation token.
    #[must_use]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = token;
        self
    }

    /// Read a configured parameter value.
    #[must_use]
    pub fn parameter(&self, key: &str) -> Option<serde_json::Value> {
        self.parameters.get(key).cloned()
    }

    /// Check whether the execution has been cancelled.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::Cancelled`] if the token has been triggered.
    pub fn check_cancelled(&self) -> Result<(), HostError> {
        if self.cancellation.is_cancelled() {
            Err(HostError::Cancelled)
        } else {
            Ok(())
        }
    }

    /// Suspend the running execution until `until` or external resume.
    pub async fn put_execution_to_wait(&self, until: DateTime<Utc>) -> Result<(), HostError> {
        self.host.put_execution_to_wait(until).await
    }

    /// Read this node's static-state slot.
    #[must_use]
    pub fn get_static_data(&self, key: &str) -> Option<serde_json::Value> {
        self.host.get_static_data(key)
    }

    /// Write this node's static-state slot.
    pub fn set_static_data(&self, key: &str, value: serde_json::Value) {
        self.host.set_static_data(key, value);
    }

    /// Resolve decrypted values for the named credential type.
    ///
    /// Returns an error if no credential resolver is attached.
    pub async fn credentials(&self, credential_type: &str) -> Result<CredentialValues, HostError> {
        match &self.credentials {
            Some(resolver) => resolver.resolve(credential_type).await,
            None => Err(HostError::fatal("no credential resolver configured")),
        }
    }
}

impl std::fmt::Debug for NodeContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeContext")
            .field("execution_id", &self.execution_id)
            .field("node_id", &self.node_id)
            .field("workflow_id", &self.workflow_id)
            .field("cancelled", &self.cancellation.is_cancelled())
            .finish_non_exhaustive()
    }
}
