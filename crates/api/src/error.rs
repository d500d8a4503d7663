use serde::{Deserialize, Serialize};

/// The request that failed, carried as error context.
///
/// Method and URL only — bodies and headers stay out of error context so
/// credentials can never leak through error reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestSummary {
    /// HTTP method of the failed request.
    pub method: String,
    /// Target URL of the failed request.
    pub url: String,
}

impl RequestSummary {
    /// Summarize a request by method and URL.
    #[must_use]
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
        }
    }
}

/// Error type for Lowcoder API operations.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ApiError {
    /// The login exchange failed.
    ///
    /// `message` is the remote error payload's `message` field when the
    /// response carried one, otherwise the transport error's own text.
    /// Displays as the bare message so hosts can surface it verbatim.
    #[error("{message}")]
    Login {
        /// Remote or transport error message.
        message: String,
        /// The failed request, as context.
        request: RequestSummary,
    },

    /// An authenticated call returned an error status.
    #[error("request to {url} failed with status {status}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// Target URL of the failed request.
        url: String,
    },

    /// Transport-level failure outside the login exchange.
    #[error(transparent)]
    Request(#[from] reqwest::Error),

    /// A response body did not match the expected shape.
    #[error("unexpected response from {url}: {detail}")]
    Decode {
        /// Target URL of the request.
        url: String,
        /// What failed to decode.
        detail: String,
    },
}

impl ApiError {
    /// Create a login error from a message and the failed request.
    pub fn login(message: impl Into<String>, request: RequestSummary) -> Self {
        Self::Login {
            message: message.into(),
            request,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_error_displays_bare_message() {
        let err = ApiError::login(
            "bad password",
            RequestSummary::new("POST", "http://lowcoder.test/api/auth/form/login"),
        );
        assert_eq!(err.to_string(), "bad password");
    }

    #[test]
    fn login_error_keeps_request_context() {
        let err = ApiError::login("nope", RequestSummary::new("POST", "http://x/login"));
        match err {
            ApiError::Login { request, .. } => {
                assert_eq!(request.method, "POST");
                assert_eq!(request.url, "http://x/login");
            }
            _ => panic!("expected Login"),
        }
    }

    #[test]
    fn status_error_display() {
        let err = ApiError::Status {
            status: 403,
            url: "http://x/applications/list".into(),
        };
        assert_eq!(
            err.to_string(),
            "request to http://x/applications/list failed with status 403"
        );
    }
}
