use lowcoder_host::SecureString;
use serde::{Deserialize, Serialize};

/// Input values for the login exchange.
///
/// These mirror the credential form: the base URL of a self-hosted
/// Lowcoder instance, the self-host API token, and the account to log
/// in as. The derived session token is *not* part of this struct — it
/// lives in the host's credential store as an expirable property.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    /// Base URL of the Lowcoder instance, with or without trailing slash.
    pub base_url: String,
    /// `LOWCODER_CE_SELFHOST_TOKEN` API token.
    pub api_token: SecureString,
    /// Login identifier (email).
    pub username: String,
    /// Account password.
    pub password: SecureString,
}

impl Credentials {
    /// Assemble credentials for the login exchange.
    pub fn new(
        base_url: impl Into<String>,
        api_token: impl Into<SecureString>,
        username: impl Into<String>,
        password: impl Into<SecureString>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            api_token: api_token.into(),
            username: username.into(),
            password: password.into(),
        }
    }
}
