//! # Lowcoder Host Contracts
//!
//! The workflow-host plugin interface as the Lowcoder integration sees it.
//!
//! This crate defines **what** the host and the plugin exchange, not how
//! the host orchestrates executions. The host owns webhook listening,
//! credential storage, expiry tracking, and the pause/resume state
//! machine; the plugin only consumes the port traits declared here and
//! returns the data shapes the host acts on.
//!
//! ## Core Types
//!
//! - [`NodeType`] — a node's runtime behavior (execute + webhook)
//! - [`CredentialType`] — a credential's schema and refresh protocol
//! - [`NodeContext`] — per-invocation identity, parameters, and ports
//! - [`ExecutionHost`] — pause/resume and node-scoped static state
//! - [`WebhookRequest`] / [`WebhookOutcome`] — webhook ingress and dispatch
//! - [`ParameterDef`] — form-field descriptors rendered by the host UI
//! - [`HostError`] — error type surfaced to the host's error reporting

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Runtime context provided to nodes and the host-side port traits.
pub mod context;
/// Credential type contract: schema, pre-authentication, decoration, test.
pub mod credential;
/// Error type surfaced to the host's execution-error reporting.
pub mod error;
/// Identifiers for executions, nodes, and workflows.
pub mod id;
/// Workflow data items passed between nodes.
pub mod item;
/// Node type contract and its static description.
pub mod node;
/// Form-field descriptors and validation rules.
pub mod parameter;
/// Interactive resource search (list-search methods).
pub mod search;
/// Redacting wrapper for secret values.
pub mod secure;
/// Webhook ingress envelope and dispatch outcomes.
pub mod webhook;

pub use context::{CredentialResolver, ExecutionHost, NodeContext};
pub use credential::{
    AuthenticationSpec, CredentialType, CredentialValues, CredentialTestRequest, PreAuthOutcome,
};
pub use error::HostError;
pub use id::{ExecutionId, NodeId, WorkflowId};
pub use item::WorkflowItem;
pub use node::{CredentialRequirement, NodeDescription, NodeType, WebhookDescriptor};
pub use parameter::{
    CheckboxParameter, ExpirableParameter, GroupParameter, HiddenParameter, NoticeParameter,
    NumberParameter, ParameterDef, ParameterMetadata, ResourceMode, ResourceParameter,
    SecretParameter, SelectOption, SelectParameter, TextParameter, ValidationRule,
};
pub use search::{ListSearchItem, ListSearchResult, ResourceSearch};
pub use secure::SecureString;
pub use webhook::{WebhookOutcome, WebhookReply, WebhookReplyBody, WebhookRequest};
