//! # Lowcoder Node
//!
//! Exposes a self-hosted Lowcoder instance inside the workflow host as
//! one node type plus one credential type:
//!
//! - [`LowcoderNode`] — "pause and wait for an external callback": the
//!   execute path parks the running execution behind an effectively
//!   unbounded wait; the webhook path either resumes it with the inbound
//!   request or answers the caller directly with a static response.
//! - [`LowcoderApiCredential`] — username/password exchange yielding the
//!   short-lived `LOWCODER_CE_SELFHOST_TOKEN` session cookie, refreshed
//!   only when the host's expirable-property tracking asks for it.
//! - [`AppSearch`] — the list-search method behind the application
//!   picker.
//!
//! The pause/resume state machine, webhook listening, and credential
//! storage all live in the host; this crate only returns the data
//! shapes declared in `lowcoder-host`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// User-agent bot classification for the ignore-bots option.
pub mod bots;
/// The Lowcoder API credential type.
pub mod credential;
/// Form-field definitions for the node's configuration surface.
pub mod fields;
/// The node type: execute and webhook dispatch.
pub mod node;
/// The parsed options group.
pub mod options;
/// The application list-search method.
pub mod search;

pub use credential::{LowcoderApiCredential, CREDENTIAL_NAME};
pub use node::{LowcoderNode, NODE_NAME, PREVIOUS_NODE_DATA_KEY, WAIT_INDEFINITELY};
pub use options::WebhookOptions;
pub use search::{AppSearch, SEARCH_APPS_METHOD};
