//! Client Configuration

use std::time::Duration;

use vexon_core::DEFAULT_SESSION_KEY;

/// Production API root
pub const DEFAULT_BASE_URL: &str = "https://api.cognivevex.com/api";

/// Client configuration
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// API root, without trailing slash
    pub base_url: String,

    /// Public CAPTCHA site key rendered by forms
    pub captcha_site_key: Option<String>,

    /// Storage key the session lives under
    pub session_key: String,

    /// Simulated latency of the Neural Lab generation stub
    pub generation_delay: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            captcha_site_key: None,
            session_key: DEFAULT_SESSION_KEY.into(),
            generation_delay: Duration::from_secs(3),
        }
    }
}

impl ClientConfig {
    /// Create with a specific API root
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: trim_base(base_url.into()),
            ..Default::default()
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable source (process env, build-time env, tests)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        Self {
            base_url: non_empty("VEXON_API_BASE_URL")
                .map_or(defaults.base_url, trim_base),
            captcha_site_key: non_empty("VEXON_CAPTCHA_SITE_KEY"),
            session_key: non_empty("VEXON_SESSION_KEY").unwrap_or(defaults.session_key),
            generation_delay: non_empty("VEXON_GENERATION_DELAY_MS")
                .and_then(|ms| ms.parse().ok())
                .map_or(defaults.generation_delay, Duration::from_millis),
        }
    }

    /// Set the generation stub latency
    pub fn with_generation_delay(mut self, delay: Duration) -> Self {
        self.generation_delay = delay;
        self
    }

    /// Absolute URL for an API path such as `/auth/login`
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn trim_base(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://api.cognivevex.com/api");
        assert_eq!(config.session_key, "vexon_session");
        assert_eq!(config.generation_delay, Duration::from_secs(3));
    }

    #[test]
    fn test_url_join() {
        let config = ClientConfig::new("http://localhost:8000/api/");
        assert_eq!(config.url("/auth/login"), "http://localhost:8000/api/auth/login");
        assert_eq!(config.url("maps/pin"), "http://localhost:8000/api/maps/pin");
    }

    #[test]
    fn test_from_lookup() {
        let config = ClientConfig::from_lookup(|name| match name {
            "VEXON_API_BASE_URL" => Some("http://staging/api/".into()),
            "VEXON_CAPTCHA_SITE_KEY" => Some("site-key".into()),
            "VEXON_SESSION_KEY" => Some("   ".into()),
            "VEXON_GENERATION_DELAY_MS" => Some("250".into()),
            _ => None,
        });
        assert_eq!(config.base_url, "http://staging/api");
        assert_eq!(config.captcha_site_key.as_deref(), Some("site-key"));
        assert_eq!(config.session_key, "vexon_session");
        assert_eq!(config.generation_delay, Duration::from_millis(250));
    }
}
