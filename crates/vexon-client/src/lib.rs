//! # vexon-client
//!
//! Client for the Vexon REST API.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use vexon_client::{ApiClient, ClientConfig};
//! use vexon_core::FileSessionStore;
//!
//! let store = Arc::new(FileSessionStore::new("/tmp/vexon_session.json"));
//! let client = ApiClient::http(ClientConfig::from_env(), store);
//!
//! let resp = client.login("a@b.com", "pw", Some(&captcha)).await;
//! if resp.is_success() {
//!     // session persisted; client.auth_header() now carries the token
//! }
//! ```
//!
//! No request is retried, deduplicated or cancelled, and no timeout is set
//! beyond the platform default.

mod client;
mod config;
mod delay;
mod error;
pub mod mock;
pub mod oauth;
pub mod transport;

pub use client::{ApiClient, GENERATION_RESPONSE, GENERATION_TOKENS};
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::{ClientError, Result};
pub use oauth::{CallbackParams, CallbackRejection, OAuthProvider};
pub use transport::{ApiRequest, HttpTransport, Method, Transport, TransportResponse};

// Re-export core types for convenience
pub use vexon_core::{ApiResponse, Session, SessionStore, Status, User};
