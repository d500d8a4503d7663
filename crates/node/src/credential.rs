use async_trait::async_trait;
use lowcoder_api::{ApiError, Credentials, LowcoderClient};
use lowcoder_host::{
    AuthenticationSpec, CredentialTestRequest, CredentialType, CredentialValues, ExpirableParameter,
    HiddenParameter, HostError, ParameterDef, PreAuthOutcome, SecretParameter, TextParameter,
};
use tracing::debug;

/// Credential type name, referenced by the node description.
pub const CREDENTIAL_NAME: &str = "lowcoderApi";

/// The Lowcoder API credential.
///
/// Stores the instance URL, the self-host API token, and an account;
/// derives the short-lived session cookie. The cookie lives in the
/// expirable `session_token` property, so the host re-runs
/// [`pre_authenticate`](CredentialType::pre_authenticate) only when the
/// cached cookie is empty or considered stale — never per request.
#[derive(Debug, Clone, Copy, Default)]
pub struct LowcoderApiCredential;

impl LowcoderApiCredential {
    /// Create the credential type.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CredentialType for LowcoderApiCredential {
    fn name(&self) -> &str {
        CREDENTIAL_NAME
    }

    fn display_name(&self) -> &str {
        "Lowcoder API"
    }

    fn properties(&self) -> Vec<ParameterDef> {
        vec![
            ParameterDef::Expirable(ExpirableParameter::new(
                "session_token",
                "Cookie Token",
                ParameterDef::Hidden(HiddenParameter::new("session_token", "Cookie Token")),
            )),
            ParameterDef::Text(TextParameter::new("url", "API Base URL")),
            ParameterDef::Text(TextParameter::new("api_token", "API Token")),
            ParameterDef::Text(TextParameter::new("username", "Username")),
            ParameterDef::Secret(SecretParameter::new("password", "Password")),
        ]
    }

    async fn pre_authenticate(
        &self,
        values: &CredentialValues,
    ) -> Result<PreAuthOutcome, HostError> {
        let base_url = values
            .get_str("url")
            .ok_or_else(|| HostError::validation("credential has no API base URL"))?;
        let credentials = Credentials::new(
            base_url,
            values.get_secret("api_token"),
            values.get_str("username").unwrap_or_default(),
            values.get_secret("password"),
        );

        let client = LowcoderClient::from_credentials(&credentials);
        let session = client.login(&credentials).await.map_err(host_error)?;

        debug!(present = session.is_present(), "session token refreshed");
        // An absent cookie becomes an empty expirable value; the next
        // authenticated call then fails with the remote's own auth error.
        Ok(PreAuthOutcome::none().set("session_token", session.value().unwrap_or_default()))
    }

    fn authentication(&self) -> AuthenticationSpec {
        AuthenticationSpec::header("Cookie", "LOWCODER_CE_SELFHOST_TOKEN={{session_token}}")
    }

    fn test_request(&self) -> CredentialTestRequest {
        CredentialTestRequest {
            base_url_property: "url".to_owned(),
            path: "api/users/me".to_owned(),
        }
    }
}

/// Surface an API failure to the host, keeping the remote message as the
/// error text and the failed request as structured context.
pub(crate) fn host_error(err: ApiError) -> HostError {
    match err {
        ApiError::Login { message, request } => HostError::fatal_with_details(
            message,
            serde_json::json!({
                "method": request.method,
                "url": request.url,
            }),
        ),
        other => HostError::fatal(other.to_string()),
    }
}
