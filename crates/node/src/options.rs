use http::StatusCode;
use lowcoder_host::NodeContext;

/// The node's parsed options group.
///
/// Recognized keys are explicit fields; anything else a host hands over
/// is ignored rather than carried around as a loose map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WebhookOptions {
    /// Drop webhook deliveries whose user agent looks like a crawler or
    /// link previewer.
    pub ignore_bots: bool,
    /// Status code for the resume response; `None` means the default 200.
    pub response_code: Option<u16>,
}

impl WebhookOptions {
    /// Parse from the raw `options` parameter value.
    ///
    /// Missing keys and out-of-range values fall back to the defaults —
    /// the options group is entirely optional.
    #[must_use]
    pub fn from_value(value: Option<&serde_json::Value>) -> Self {
        let Some(object) = value.and_then(serde_json::Value::as_object) else {
            return Self::default();
        };
        let ignore_bots = object
            .get("ignore_bots")
            .and_then(serde_json::Value::as_bool)
            .unwrap_or(false);
        let response_code = object
            .get("response_code")
            .and_then(as_status_number)
            .and_then(|code| u16::try_from(code).ok())
            .filter(|code| StatusCode::from_u16(*code).is_ok());
        Self {
            ignore_bots,
            response_code,
        }
    }

    /// Parse from a node invocation context.
    #[must_use]
    pub fn from_context(ctx: &NodeContext) -> Self {
        Self::from_value(ctx.parameter("options").as_ref())
    }

    /// The effective resume response status.
    #[must_use]
    pub fn response_status(&self) -> StatusCode {
        self.response_code
            .and_then(|code| StatusCode::from_u16(code).ok())
            .unwrap_or(StatusCode::OK)
    }
}

/// Number parameters may arrive as integers or floats depending on the
/// host's form serialization.
fn as_status_number(value: &serde_json::Value) -> Option<u64> {
    value.as_u64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= 0.0)
            .map(|f| f as u64)
    })
}
