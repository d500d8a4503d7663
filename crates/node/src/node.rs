use async_trait::async_trait;
use chrono::{DateTime, Utc};
use http::StatusCode;
use lowcoder_host::{
    CredentialRequirement, HostError, NodeContext, NodeDescription, NodeType, WebhookDescriptor,
    WebhookOutcome, WebhookReply, WebhookRequest, WorkflowItem,
};
use tracing::debug;

use crate::bots::is_bot;
use crate::credential::CREDENTIAL_NAME;
use crate::fields;
use crate::options::WebhookOptions;

/// Node type name, as registered with the host.
pub const NODE_NAME: &str = "lowcoder";

/// The fixed far-future wait timestamp: the execution stays parked until
/// an external resume arrives.
pub const WAIT_INDEFINITELY: &str = "3000-01-01T00:00:00.000Z";

/// Static-state key holding the data payloads of the last paused batch.
pub const PREVIOUS_NODE_DATA_KEY: &str = "previousNodeData";

/// Body written when a webhook delivery is rejected as a bot.
const BOT_REJECTION_MESSAGE: &str = "Authorization data is wrong!";

fn wait_until() -> DateTime<Utc> {
    WAIT_INDEFINITELY.parse().expect("fixed wait sentinel parses")
}

/// The Lowcoder node: pause the execution, wait for an external callback.
///
/// The execute path records the incoming batch in static state and parks
/// the execution behind [`WAIT_INDEFINITELY`]. The webhook path decides
/// per delivery: resume the execution with the request envelope
/// (`?type=resume`), or answer the caller directly with a static summary
/// and leave the execution parked.
#[derive(Debug, Clone)]
pub struct LowcoderNode {
    description: NodeDescription,
}

impl LowcoderNode {
    /// Create the node type with its full description.
    #[must_use]
    pub fn new() -> Self {
        let mut description =
            NodeDescription::new(NODE_NAME, "Lowcoder", "Consume Lowcoder API")
                .with_subtitle("app: {{app_id}}")
                .with_group("transform")
                .with_credential(CredentialRequirement::required(CREDENTIAL_NAME))
                .with_webhook(
                    WebhookDescriptor::default_endpoint("http_method", "app_id").restarting(),
                )
                .with_property(fields::app_selector());
        for notice in fields::webhook_notices() {
            description = description.with_property(notice);
        }
        Self {
            description: description
                .with_property(fields::http_method())
                .with_property(fields::options_group()),
        }
    }
}

impl Default for LowcoderNode {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NodeType for LowcoderNode {
    fn description(&self) -> &NodeDescription {
        &self.description
    }

    async fn execute(
        &self,
        items: Vec<WorkflowItem>,
        ctx: &NodeContext,
    ) -> Result<Vec<WorkflowItem>, HostError> {
        ctx.check_cancelled()?;

        // Keep the payloads around so a non-resuming webhook call can
        // still report what the node last saw.
        let payloads: Vec<serde_json::Value> =
            items.iter().map(|item| item.json.clone()).collect();
        ctx.set_static_data(PREVIOUS_NODE_DATA_KEY, serde_json::Value::Array(payloads));

        debug!(execution = %ctx.execution_id, "parking execution until external resume");
        ctx.put_execution_to_wait(wait_until()).await?;

        // Passed through unchanged; the host hands them back downstream
        // once the execution is resumed.
        Ok(items)
    }

    async fn webhook(
        &self,
        request: WebhookRequest,
        ctx: &NodeContext,
    ) -> Result<WebhookOutcome, HostError> {
        let options = WebhookOptions::from_context(ctx);

        if options.ignore_bots && is_bot(request.user_agent()) {
            debug!(user_agent = ?request.user_agent(), "rejecting bot delivery");
            return Ok(WebhookOutcome::direct(
                WebhookReply::text(StatusCode::UNAUTHORIZED, BOT_REJECTION_MESSAGE)
                    .with_header("WWW-Authenticate", "Basic realm=\"Webhook\""),
            ));
        }

        match request.query.get("type").map(String::as_str) {
            Some("resume") => {
                let item = WorkflowItem::new(serde_json::json!({
                    "headers": request.headers_as_json(),
                    "params": request.params,
                    "query": request.query,
                    "body": request.body,
                }));
                debug!(execution = %ctx.execution_id, "resuming execution from webhook");
                Ok(WebhookOutcome::resume_with_status(
                    vec![item],
                    options.response_status(),
                ))
            }
            requested_type => {
                // Absent slot means no execution has paused yet; report
                // an empty sequence rather than nothing at all.
                let previous = ctx
                    .get_static_data(PREVIOUS_NODE_DATA_KEY)
                    .unwrap_or_else(|| serde_json::Value::Array(Vec::new()));
                let reply = WebhookReply::ok_json(serde_json::json!({
                    "message": "Static response: workflow not resumed",
                    "type": requested_type,
                    "previousData": previous,
                }));
                Ok(WebhookOutcome::direct(reply))
            }
        }
    }
}
