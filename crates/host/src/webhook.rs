use std::collections::HashMap;

use http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode};

use crate::item::WorkflowItem;

/// Incoming webhook request forwarded by the host to a node.
///
/// The host owns the HTTP listener; this is the envelope it hands over
/// once a request matches the node's registered path and method. The
/// plugin owns no schema here — everything is forwarded verbatim.
#[derive(Debug, Clone)]
pub struct WebhookRequest {
    /// HTTP method of the inbound request.
    pub method: Method,
    /// Request path as matched by the host's router.
    pub path: String,
    /// HTTP headers.
    pub headers: HeaderMap,
    /// Decoded query parameters.
    pub query: HashMap<String, String>,
    /// Path parameters extracted by the host's router.
    pub params: HashMap<String, String>,
    /// Parsed request body; an empty object when the request had none.
    pub body: serde_json::Value,
}

impl WebhookRequest {
    /// Create a minimal request for the given method and path.
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: HeaderMap::new(),
            query: HashMap::new(),
            params: HashMap::new(),
            body: serde_json::Value::Object(serde_json::Map::new()),
        }
    }

    /// Add a header (builder-style). Invalid names or values are ignored.
    #[must_use]
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        if let (Ok(name), Ok(value)) = (
            name.parse::<HeaderName>(),
            HeaderValue::from_str(value),
        ) {
            self.headers.insert(name, value);
        }
        self
    }

    /// Add a query parameter (builder-style).
    #[must_use]
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Set the body (builder-style).
    #[must_use]
    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = body;
        self
    }

    /// The `User-Agent` header value, if present and valid UTF-8.
    #[must_use]
    pub fn user_agent(&self) -> Option<&str> {
        self.headers
            .get(http::header::USER_AGENT)
            .and_then(|v| v.to_str().ok())
    }

    /// Headers rendered as a JSON object (lossy for non-UTF-8 values).
    #[must_use]
    pub fn headers_as_json(&self) -> serde_json::Value {
        let map: serde_json::Map<String, serde_json::Value> = self
            .headers
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_owned(), serde_json::Value::from(v)))
            })
            .collect();
        serde_json::Value::Object(map)
    }
}

/// Body of a direct webhook reply.
#[derive(Debug, Clone, PartialEq)]
pub enum WebhookReplyBody {
    /// No body.
    Empty,
    /// Plain text body.
    Text(String),
    /// JSON body, sent with a JSON content type.
    Json(serde_json::Value),
}

/// A direct HTTP response the host writes to the webhook caller.
///
/// Used when the node answers the caller itself instead of (or in
/// addition to) feeding data into the workflow.
#[derive(Debug, Clone)]
pub struct WebhookReply {
    /// Response status code.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
    /// Response body.
    pub body: WebhookReplyBody,
}

impl WebhookReply {
    /// A 200 reply with a JSON body.
    #[must_use]
    pub fn ok_json(body: serde_json::Value) -> Self {
        Self {
            status: StatusCode::OK,
            headers: HeaderMap::new(),
            body: WebhookReplyBody::Json(body),
        }
    }

    /// A plain-text reply with the given status.
    #[must_use]
    pub fn text(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: WebhookReplyBody::Text(body.into()),
        }
    }

    /// Add a header (builder-style). Invalid names or values are ignored.
    #[must_use]
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        if let (Ok(name), Ok(value)) = (
            name.parse::<HeaderName>(),
            HeaderValue::from_str(value),
        ) {
            self.headers.insert(name, value);
        }
        self
    }
}

/// What the host should do after a node handled a webhook delivery.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum WebhookOutcome {
    /// Resume the paused execution with the given items.
    ///
    /// The host answers the HTTP caller with `status` and feeds `items`
    /// into the waiting execution.
    Resume {
        /// Workflow data supplied to the resumed execution.
        items: Vec<WorkflowItem>,
        /// HTTP status returned to the webhook caller.
        status: StatusCode,
    },

    /// Write `reply` to the caller and produce no workflow response.
    ///
    /// The paused execution stays paused.
    Direct {
        /// The response written verbatim by the host.
        reply: WebhookReply,
    },
}

impl WebhookOutcome {
    /// Resume with items and a 200 status.
    #[must_use]
    pub fn resume(items: Vec<WorkflowItem>) -> Self {
        Self::Resume {
            items,
            status: StatusCode::OK,
        }
    }

    /// Resume with items and an explicit status.
    #[must_use]
    pub fn resume_with_status(items: Vec<WorkflowItem>, status: StatusCode) -> Self {
        Self::Resume { items, status }
    }

    /// Answer the caller directly without resuming.
    #[must_use]
    pub fn direct(reply: WebhookReply) -> Self {
        Self::Direct { reply }
    }

    /// Returns `true` if this outcome resumes the paused execution.
    #[must_use]
    pub fn resumes_execution(&self) -> bool {
        matches!(self, Self::Resume { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_builder_surface() {
        let req = WebhookRequest::new(Method::POST, "/hooks/abc123")
            .with_header("user-agent", "curl/8.0")
            .with_query("type", "resume")
            .with_body(serde_json::json!({"event": "ping"}));

        assert_eq!(req.method, Method::POST);
        assert_eq!(req.user_agent(), Some("curl/8.0"));
        assert_eq!(req.query.get("type").map(String::as_str), Some("resume"));
        assert_eq!(req.body["event"], "ping");
    }

    #[test]
    fn headers_as_json_uses_lowercase_names() {
        let req = WebhookRequest::new(Method::GET, "/x").with_header("X-Custom", "1");
        let json = req.headers_as_json();
        assert_eq!(json["x-custom"], "1");
    }

    #[test]
    fn user_agent_absent() {
        let req = WebhookRequest::new(Method::GET, "/x");
        assert!(req.user_agent().is_none());
    }

    #[test]
    fn reply_constructors() {
        let reply = WebhookReply::ok_json(serde_json::json!({"ok": true}));
        assert_eq!(reply.status, StatusCode::OK);
        assert!(matches!(reply.body, WebhookReplyBody::Json(_)));

        let reply = WebhookReply::text(StatusCode::UNAUTHORIZED, "no")
            .with_header("www-authenticate", "Basic realm=\"Webhook\"");
        assert_eq!(reply.status, StatusCode::UNAUTHORIZED);
        assert_eq!(
            reply.headers.get("www-authenticate").unwrap(),
            "Basic realm=\"Webhook\""
        );
    }

    #[test]
    fn outcome_predicates() {
        let resume = WebhookOutcome::resume(vec![WorkflowItem::empty()]);
        assert!(resume.resumes_execution());

        let direct = WebhookOutcome::direct(WebhookReply::ok_json(serde_json::json!({})));
        assert!(!direct.resumes_execution());
    }

    #[test]
    fn resume_with_status_keeps_status() {
        let outcome =
            WebhookOutcome::resume_with_status(vec![], StatusCode::ACCEPTED);
        match outcome {
            WebhookOutcome::Resume { status, .. } => assert_eq!(status, StatusCode::ACCEPTED),
            WebhookOutcome::Direct { .. } => panic!("expected Resume"),
        }
    }
}
