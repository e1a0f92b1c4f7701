//! API Client Wiring

use std::sync::Arc;

use leptos::prelude::*;
use vexon_client::{ApiClient, ApiResponse, ClientConfig};
use vexon_core::Session;

use crate::storage::LocalStorageSessionStore;

/// Configuration baked in when the bundle is built
pub fn config() -> ClientConfig {
    ClientConfig::from_lookup(|name| {
        let value = match name {
            "VEXON_API_BASE_URL" => option_env!("VEXON_API_BASE_URL"),
            "VEXON_CAPTCHA_SITE_KEY" => option_env!("VEXON_CAPTCHA_SITE_KEY"),
            "VEXON_SESSION_KEY" => option_env!("VEXON_SESSION_KEY"),
            "VEXON_GENERATION_DELAY_MS" => option_env!("VEXON_GENERATION_DELAY_MS"),
            _ => None,
        };
        value.map(String::from)
    })
}

/// Client over HTTP with the session in local storage
pub fn build_client() -> ApiClient {
    let config = config();
    let store = Arc::new(LocalStorageSessionStore::new(config.session_key.clone()));
    ApiClient::http(config, store)
}

/// Signed-in session as the shell sees it
#[derive(Clone, Copy)]
pub struct AuthState(pub RwSignal<Option<Session>>);

impl AuthState {
    pub fn new(client: &ApiClient) -> Self {
        Self(RwSignal::new(client.get_current_user()))
    }

    /// Re-read the stored session after a call that may have changed it
    pub fn refresh(&self, client: &ApiClient) {
        self.0.set(client.get_current_user());
    }
}

pub fn use_client() -> ApiClient {
    expect_context::<ApiClient>()
}

pub fn use_auth() -> AuthState {
    expect_context::<AuthState>()
}

/// One-line feedback shown under forms
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub ok: bool,
    pub text: String,
}

impl Notice {
    pub fn ok(text: impl Into<String>) -> Self {
        Self { ok: true, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { ok: false, text: text.into() }
    }

    /// Envelope message, or `fallback` when the backend sent none
    pub fn from_envelope<T>(resp: &ApiResponse<T>, fallback: &str) -> Self {
        let text = if resp.message.is_empty() {
            fallback.to_string()
        } else {
            resp.message.clone()
        };
        Self { ok: resp.is_success(), text }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_uses_envelope_message() {
        let resp: ApiResponse<()> = ApiResponse::failure("Invalid credentials", 401);
        assert_eq!(
            Notice::from_envelope(&resp, "Access granted"),
            Notice::error("Invalid credentials")
        );
    }

    #[test]
    fn test_notice_falls_back_when_message_empty() {
        let resp: ApiResponse<()> = ApiResponse::success("", None);
        assert_eq!(
            Notice::from_envelope(&resp, "Access granted"),
            Notice::ok("Access granted")
        );
    }
}
