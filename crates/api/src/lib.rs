//! # Lowcoder API Client
//!
//! The Lowcoder HTTP API surface consumed by the node plugin:
//!
//! - [`LowcoderClient::login`] — the form-login exchange that yields the
//!   short-lived session cookie
//! - [`LowcoderClient::list_applications`] — the application listing
//!   backing the interactive app picker
//! - [`LowcoderClient::current_user`] — the credential self-test
//!
//! Every operation is one sequential request/response round trip. There
//! is no retry, backoff, or caching here — session refresh policy is the
//! host's, via its expirable-credential tracking.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Application records and their listing envelope.
pub mod apps;
/// The authenticated client and the login exchange.
pub mod client;
/// `Set-Cookie` header parsing.
pub mod cookie;
/// Credential input values for the login exchange.
pub mod credentials;
/// Error type for API operations.
pub mod error;
/// The session cookie value.
pub mod session;
/// Application identifier format validation.
pub mod validate;

pub use apps::{ApplicationKind, ApplicationSummary};
pub use client::LowcoderClient;
pub use credentials::Credentials;
pub use error::{ApiError, RequestSummary};
pub use session::{SessionToken, SESSION_COOKIE_NAME};
pub use validate::{application_id_pattern, validate_application_id};
