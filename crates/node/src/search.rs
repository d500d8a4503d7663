use async_trait::async_trait;
use lowcoder_api::{LowcoderClient, SessionToken};
use lowcoder_host::{HostError, ListSearchItem, ListSearchResult, NodeContext, ResourceSearch};
use tracing::debug;

use crate::credential::{host_error, CREDENTIAL_NAME};

/// Search-method name referenced by the application selector's list mode.
pub const SEARCH_APPS_METHOD: &str = "search_apps";

/// The application picker's search method.
///
/// Fetches the remote listing on every invocation — results are never
/// cached, so two searches against an unchanged remote return identical
/// sequences.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppSearch;

impl AppSearch {
    /// Create the search method.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ResourceSearch for AppSearch {
    async fn search(
        &self,
        query: Option<&str>,
        ctx: &NodeContext,
    ) -> Result<ListSearchResult, HostError> {
        ctx.check_cancelled()?;

        let values = ctx.credentials(CREDENTIAL_NAME).await?;
        let base_url = values
            .get_str("url")
            .ok_or_else(|| HostError::validation("credential has no API base URL"))?;
        let session = SessionToken::from(values.get_str("session_token").map(str::to_owned));

        let client = LowcoderClient::new(base_url);
        let apps = client
            .list_applications(&session, query)
            .await
            .map_err(host_error)?;
        debug!(count = apps.len(), query = ?query, "application search finished");

        Ok(ListSearchResult::new(
            apps.into_iter()
                .map(|app| ListSearchItem::new(app.display_label(), app.application_id))
                .collect(),
        ))
    }
}
