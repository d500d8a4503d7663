use reqwest::header::{COOKIE, SET_COOKIE};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::apps::{ApplicationListResponse, ApplicationSummary};
use crate::cookie;
use crate::credentials::Credentials;
use crate::error::{ApiError, RequestSummary};
use crate::session::{SessionToken, SESSION_COOKIE_NAME};

const LOGIN_PATH: &str = "/api/auth/form/login";
const CURRENT_USER_PATH: &str = "/api/users/me";
const APPLICATION_LIST_PATH: &str = "/applications/list";

/// Body of the form-login request.
///
/// `register`, `source`, and `auth_id` are fixed by the Lowcoder form
/// auth protocol.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LoginRequest<'a> {
    login_id: &'a str,
    password: &'a str,
    register: &'a str,
    source: &'a str,
    auth_id: &'a str,
}

/// Error payload shape returned by the Lowcoder API.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Client for a self-hosted Lowcoder instance.
///
/// One sequential round trip per operation; session refresh policy is
/// not this client's concern — callers obtain a [`SessionToken`] via
/// [`login`](Self::login) only when the host's expiry tracking says the
/// cached one is gone or stale.
#[derive(Debug, Clone)]
pub struct LowcoderClient {
    http: reqwest::Client,
    base_url: String,
}

impl LowcoderClient {
    /// Create a client for the given base URL.
    ///
    /// One trailing slash is stripped, so configured URLs with and
    /// without it target identical endpoints.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Create a client for the instance the credentials point at.
    #[must_use]
    pub fn from_credentials(credentials: &Credentials) -> Self {
        Self::new(credentials.base_url.clone())
    }

    /// The normalized base URL (no trailing slash).
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Perform the form-login exchange and extract the session cookie.
    ///
    /// A successful response without the expected cookie yields
    /// [`SessionToken::none`] — the downstream authenticated call then
    /// surfaces the remote's own auth failure.
    ///
    /// # Errors
    ///
    /// [`ApiError::Login`] on transport failure or an error status; the
    /// message is the remote payload's `message` field when present.
    pub async fn login(&self, credentials: &Credentials) -> Result<SessionToken, ApiError> {
        let url = self.endpoint(LOGIN_PATH);
        let request = RequestSummary::new("POST", &url);
        let body = LoginRequest {
            login_id: &credentials.username,
            password: credentials.password.expose(),
            register: "false",
            source: "EMAIL",
            auth_id: "EMAIL",
        };

        debug!(url = %url, username = %credentials.username, "logging in to Lowcoder");
        let response = self
            .http
            .post(&url)
            .header(SESSION_COOKIE_NAME, credentials.api_token.expose())
            .json(&body)
            .send()
            .await
            .map_err(|err| ApiError::login(err.to_string(), request.clone()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.message)
                .unwrap_or_else(|| format!("login failed with status {status}"));
            return Err(ApiError::login(message, request));
        }

        let set_cookies = response
            .headers()
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok());
        let token = cookie::find_cookie(set_cookies, SESSION_COOKIE_NAME);

        match token {
            Some(cookie) => {
                debug!("session cookie obtained");
                Ok(SessionToken::some(cookie.value))
            }
            None => {
                warn!(url = %url, "login response carried no session cookie");
                Ok(SessionToken::none())
            }
        }
    }

    /// List applications, optionally filtered by a free-text query.
    ///
    /// Order follows the remote response; no pagination or dedup.
    ///
    /// # Errors
    ///
    /// [`ApiError::Status`] on an error status, [`ApiError::Decode`] on
    /// an unexpected body shape.
    pub async fn list_applications(
        &self,
        session: &SessionToken,
        query: Option<&str>,
    ) -> Result<Vec<ApplicationSummary>, ApiError> {
        let url = self.endpoint(APPLICATION_LIST_PATH);
        let mut builder = self
            .http
            .get(&url)
            .header(COOKIE, session.cookie_header());
        if let Some(query) = query {
            builder = builder.query(&[("query", query)]);
        }
        builder = builder.query(&[("withContainerSize", "false")]);

        debug!(url = %url, query = ?query, "listing Lowcoder applications");
        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body: ApplicationListResponse =
            response.json().await.map_err(|err| ApiError::Decode {
                url,
                detail: err.to_string(),
            })?;
        Ok(body.data)
    }

    /// The credential self-test: fetch the current user.
    ///
    /// Any non-error status counts as a valid credential.
    ///
    /// # Errors
    ///
    /// [`ApiError::Status`] when the remote answers with a 4xx/5xx.
    pub async fn current_user(&self, session: &SessionToken) -> Result<(), ApiError> {
        let url = self.endpoint(CURRENT_USER_PATH);
        let response = self
            .http
            .get(&url)
            .header(COOKIE, session.cookie_header())
            .send()
            .await?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url,
            });
        }
        Ok(())
    }
}
