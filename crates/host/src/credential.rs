use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::HostError;
use crate::parameter::ParameterDef;
use crate::secure::SecureString;

/// Decrypted credential values handed to a credential type.
///
/// Keyed by property key. Values are arbitrary JSON because hosts store
/// whatever the property schema declares; accessors narrow to the shapes
/// credential code actually needs. Debug output never shows values.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CredentialValues {
    values: serde_json::Map<String, serde_json::Value>,
}

impl CredentialValues {
    /// Empty value set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property value (builder-style).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Read a property as a string slice, if present and a string.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(serde_json::Value::as_str)
    }

    /// Read a property as a redacting [`SecureString`].
    ///
    /// Missing or non-string values resolve to an empty secret, matching
    /// how hosts treat unset expirable properties.
    #[must_use]
    pub fn get_secret(&self, key: &str) -> SecureString {
        SecureString::new(self.get_str(key).unwrap_or_default())
    }

    /// Raw access to a property value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.values.get(key)
    }
}

impl std::fmt::Debug for CredentialValues {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.values.keys().map(|k| (k, "***")))
            .finish()
    }
}

/// Property updates produced by pre-authentication.
///
/// The host merges these into the stored credential before decorating
/// the pending request. Typically a single expirable property.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PreAuthOutcome {
    updates: serde_json::Map<String, serde_json::Value>,
}

impl PreAuthOutcome {
    /// No updates.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Record an updated property value (builder-style).
    #[must_use]
    pub fn set(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.updates.insert(key.into(), value.into());
        self
    }

    /// The updated properties, keyed by property key.
    #[must_use]
    pub fn updates(&self) -> &serde_json::Map<String, serde_json::Value> {
        &self.updates
    }
}

/// Generic request decoration declared by a credential type.
///
/// Header values may reference credential properties with
/// `{{property_key}}` placeholders; the host substitutes the stored
/// values when decorating an outgoing request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthenticationSpec {
    /// Headers attached to every authenticated request.
    pub headers: Vec<(String, String)>,
}

impl AuthenticationSpec {
    /// Decoration with a single header.
    #[must_use]
    pub fn header(name: impl Into<String>, value_template: impl Into<String>) -> Self {
        Self {
            headers: vec![(name.into(), value_template.into())],
        }
    }

    /// Substitute `{{property}}` placeholders against resolved values.
    ///
    /// Unknown properties resolve to the empty string, mirroring host
    /// expression semantics for unset credential fields.
    #[must_use]
    pub fn resolve(&self, values: &CredentialValues) -> Vec<(String, String)> {
        self.headers
            .iter()
            .map(|(name, template)| (name.clone(), substitute(template, values)))
            .collect()
    }
}

fn substitute(template: &str, values: &CredentialValues) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find("}}") {
            Some(end) => {
                let key = after[..end].trim();
                out.push_str(values.get_str(key).unwrap_or_default());
                rest = &after[end + 2..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

/// The request a host issues to verify a credential.
///
/// Success is any non-error HTTP status; the host applies the
/// credential's [`AuthenticationSpec`] before sending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CredentialTestRequest {
    /// Credential property holding the base URL.
    pub base_url_property: String,
    /// Path appended to the base URL.
    pub path: String,
}

/// Contract for a credential type offered by this plugin.
///
/// The host renders [`properties`](Self::properties) as a form, stores
/// the entered values encrypted, and tracks expirable properties. The
/// refresh protocol is host-driven:
///
/// 1. A request needs the credential and the expirable property is empty
///    or considered stale.
/// 2. The host calls [`pre_authenticate`](Self::pre_authenticate) with
///    the stored values and merges the returned updates.
/// 3. The host decorates the request per
///    [`authentication`](Self::authentication).
///
/// Pre-authentication must be pure apart from its one network exchange —
/// callers never invoke it per request.
#[async_trait]
pub trait CredentialType: Send + Sync + 'static {
    /// Unique credential type name (e.g. `"lowcoderApi"`).
    fn name(&self) -> &str;

    /// Human-readable display name.
    fn display_name(&self) -> &str;

    /// Form-field descriptors rendered by the host UI.
    fn properties(&self) -> Vec<ParameterDef>;

    /// Refresh derived properties (session tokens and the like).
    ///
    /// Called only when the host's expiry tracking demands it.
    async fn pre_authenticate(
        &self,
        values: &CredentialValues,
    ) -> Result<PreAuthOutcome, HostError>;

    /// How authenticated requests are decorated.
    fn authentication(&self) -> AuthenticationSpec;

    /// The credential self-test request.
    fn test_request(&self) -> CredentialTestRequest;
}
