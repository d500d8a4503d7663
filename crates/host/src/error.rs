/// Error type for node and credential operations.
///
/// The plugin never retries on its own; every failure is surfaced once
/// and left to the host's execution-error and retry policies.
#[derive(Debug, Clone, thiserror::Error)]
#[non_exhaustive]
pub enum HostError {
    /// Permanent failure surfaced to the host's error reporting.
    ///
    /// Failed login exchange, unsupported operation, missing port.
    #[error("{error}")]
    Fatal {
        /// Human-readable error message.
        error: String,
        /// Optional structured details about the failure.
        details: Option<serde_json::Value>,
    },

    /// Input validation failed before any request was issued.
    #[error("validation: {0}")]
    Validation(String),

    /// Execution cancelled via the context's cancellation token.
    #[error("cancelled")]
    Cancelled,
}

impl HostError {
    /// Create a fatal error.
    pub fn fatal(msg: impl Into<String>) -> Self {
        Self::Fatal {
            error: msg.into(),
            details: None,
        }
    }

    /// Create a fatal error with structured details.
    pub fn fatal_with_details(msg: impl Into<String>, details: serde_json::Value) -> Self {
        Self::Fatal {
            error: msg.into(),
            details: Some(details),
        }
    }

    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Returns `true` for validation failures caught before any request.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
