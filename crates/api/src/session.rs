use serde::{Deserialize, Serialize};

/// Name of the session cookie issued by the form login, doubling as the
/// header name the API token travels under.
pub const SESSION_COOKIE_NAME: &str = "LOWCODER_CE_SELFHOST_TOKEN";

/// The session cookie value obtained from a login exchange.
///
/// A login response without the expected `Set-Cookie` yields an *absent*
/// token rather than an error — the next authenticated call then fails
/// with whatever status the remote returns, which is the layer that owns
/// that failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(Option<String>);

impl SessionToken {
    /// A present session token.
    #[must_use]
    pub fn some(value: impl Into<String>) -> Self {
        Self(Some(value.into()))
    }

    /// The absent token.
    #[must_use]
    pub fn none() -> Self {
        Self(None)
    }

    /// The raw cookie value, if present.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// Whether a token value is present.
    #[must_use]
    pub fn is_present(&self) -> bool {
        self.0.is_some()
    }

    /// Render the `Cookie` header value for authenticated requests.
    ///
    /// An absent token renders with an empty value; the remote answers
    /// such requests with its own auth error.
    #[must_use]
    pub fn cookie_header(&self) -> String {
        format!("{SESSION_COOKIE_NAME}={}", self.value().unwrap_or_default())
    }
}

impl From<Option<String>> for SessionToken {
    fn from(value: Option<String>) -> Self {
        Self(value)
    }
}
