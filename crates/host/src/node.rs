use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::context::NodeContext;
use crate::error::HostError;
use crate::item::WorkflowItem;
use crate::parameter::ParameterDef;
use crate::webhook::{WebhookOutcome, WebhookRequest};

/// A credential this node needs at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialRequirement {
    /// Credential type name, matching [`CredentialType::name`].
    ///
    /// [`CredentialType::name`]: crate::credential::CredentialType::name
    pub name: String,
    /// Whether execution fails without it.
    #[serde(default)]
    pub required: bool,
}

impl CredentialRequirement {
    /// A required credential of the given type.
    #[must_use]
    pub fn required(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: true,
        }
    }
}

/// Declares the webhook endpoint the host registers for a node.
///
/// Method and path are bound to node parameters by key, so the endpoint
/// follows whatever the workflow author configured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookDescriptor {
    /// Descriptor name; `"default"` unless a node has several.
    pub name: String,
    /// Parameter key holding the HTTP method to listen for.
    pub http_method_parameter: String,
    /// Parameter key holding the URL path to register.
    pub path_parameter: String,
    /// Status code the host answers with unless the node overrides it.
    pub response_code: u16,
    /// Whether a delivery re-enters a paused execution rather than
    /// starting a fresh one.
    #[serde(default)]
    pub restart_webhook: bool,
}

impl WebhookDescriptor {
    /// The conventional single-webhook descriptor.
    #[must_use]
    pub fn default_endpoint(
        http_method_parameter: impl Into<String>,
        path_parameter: impl Into<String>,
    ) -> Self {
        Self {
            name: "default".to_owned(),
            http_method_parameter: http_method_parameter.into(),
            path_parameter: path_parameter.into(),
            response_code: 200,
            restart_webhook: false,
        }
    }

    /// Mark deliveries as resuming a paused execution (builder-style).
    #[must_use]
    pub fn restarting(mut self) -> Self {
        self.restart_webhook = true;
        self
    }
}

/// Static description of a node type: identity, UI surface, webhooks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeDescription {
    /// Machine-readable node type name.
    pub name: String,
    /// Human-readable display name.
    pub display_name: String,
    /// Short description shown in the node catalog.
    pub description: String,
    /// Subtitle template shown under the node title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Catalog groups this node appears under.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub group: Vec<String>,
    /// Description schema version.
    pub version: u32,
    /// Credentials required at runtime.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub credentials: Vec<CredentialRequirement>,
    /// Webhook endpoints the host registers.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub webhooks: Vec<WebhookDescriptor>,
    /// Form-field descriptors rendered by the host UI.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<ParameterDef>,
}

impl NodeDescription {
    /// Create a description with the required identity fields.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        display_name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            description: description.into(),
            subtitle: None,
            group: Vec::new(),
            version: 1,
            credentials: Vec::new(),
            webhooks: Vec::new(),
            properties: Vec::new(),
        }
    }

    /// Set the subtitle template (builder-style).
    #[must_use]
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Add a catalog group (builder-style).
    #[must_use]
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group.push(group.into());
        self
    }

    /// Add a credential requirement (builder-style).
    #[must_use]
    pub fn with_credential(mut self, credential: CredentialRequirement) -> Self {
        self.credentials.push(credential);
        self
    }

    /// Add a webhook descriptor (builder-style).
    #[must_use]
    pub fn with_webhook(mut self, webhook: WebhookDescriptor) -> Self {
        self.webhooks.push(webhook);
        self
    }

    /// Add a form-field descriptor (builder-style).
    #[must_use]
    pub fn with_property(mut self, property: ParameterDef) -> Self {
        self.properties.push(property);
        self
    }
}

/// Contract for a node type offered by this plugin.
///
/// The host drives both entry points: [`execute`](Self::execute) when
/// the workflow reaches the node, [`webhook`](Self::webhook) when the
/// host's listener receives a request matching one of the node's
/// registered endpoints.
#[async_trait]
pub trait NodeType: Send + Sync + 'static {
    /// Static description: identity, fields, webhooks.
    fn description(&self) -> &NodeDescription;

    /// Run the node for one batch of input items.
    async fn execute(
        &self,
        items: Vec<WorkflowItem>,
        ctx: &NodeContext,
    ) -> Result<Vec<WorkflowItem>, HostError>;

    /// Handle an inbound webhook delivery.
    ///
    /// Default implementation rejects — only webhook-capable nodes
    /// override this.
    async fn webhook(
        &self,
        _request: WebhookRequest,
        _ctx: &NodeContext,
    ) -> Result<WebhookOutcome, HostError> {
        Err(HostError::fatal("webhook not supported by this node"))
    }
}
