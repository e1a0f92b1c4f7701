//! OAuth Sign-in
//!
//! Sign-in with Google or GitHub starts with a browser redirect to the
//! backend, which sends the visitor back to `/auth/callback` with
//! `?token=…&provider=…` (or `?error=…`). The token is then exchanged for a
//! Vexon session.

use std::str::FromStr;

/// Supported identity providers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OAuthProvider {
    Google,
    GitHub,
}

impl OAuthProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            OAuthProvider::Google => "google",
            OAuthProvider::GitHub => "github",
        }
    }

    /// Human-readable name
    pub fn label(&self) -> &'static str {
        match self {
            OAuthProvider::Google => "Google",
            OAuthProvider::GitHub => "GitHub",
        }
    }

    /// Token exchange endpoint
    pub fn token_path(&self) -> String {
        format!("/auth/{}/token", self.as_str())
    }

    /// Browser entry point that starts the provider flow
    pub fn redirect_path(&self) -> String {
        format!("/auth/{}/redirect", self.as_str())
    }
}

impl std::fmt::Display for OAuthProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OAuthProvider {
    type Err = CallbackRejection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "google" => Ok(OAuthProvider::Google),
            "github" => Ok(OAuthProvider::GitHub),
            other => Err(CallbackRejection::new(format!(
                "Unsupported identity provider: {other}"
            ))),
        }
    }
}

/// Why a callback was refused before any request was made
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallbackRejection {
    pub message: String,
}

impl CallbackRejection {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for CallbackRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Query parameters of `/auth/callback`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CallbackParams {
    pub token: Option<String>,
    pub provider: Option<String>,
    pub error: Option<String>,
}

impl CallbackParams {
    /// Build from a query lookup (router query map, parsed URL, CLI args)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            token: lookup("token"),
            provider: lookup("provider"),
            error: lookup("error"),
        }
    }

    /// Validate the callback into a provider and access token
    pub fn into_exchange(self) -> Result<(OAuthProvider, String), CallbackRejection> {
        if let Some(error) = self.error.filter(|e| !e.is_empty()) {
            return Err(CallbackRejection::new(format!(
                "Authentication failed: {error}"
            )));
        }

        match (self.token, self.provider) {
            (Some(token), Some(provider)) if !token.is_empty() && !provider.is_empty() => {
                Ok((provider.parse()?, token))
            }
            _ => Err(CallbackRejection::new("Malformed authentication handshake.")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(token: Option<&str>, provider: Option<&str>, error: Option<&str>) -> CallbackParams {
        CallbackParams {
            token: token.map(Into::into),
            provider: provider.map(Into::into),
            error: error.map(Into::into),
        }
    }

    #[test]
    fn test_paths() {
        assert_eq!(OAuthProvider::Google.token_path(), "/auth/google/token");
        assert_eq!(OAuthProvider::GitHub.redirect_path(), "/auth/github/redirect");
    }

    #[test]
    fn test_valid_callback() {
        let (provider, token) = params(Some("abc"), Some("GitHub"), None)
            .into_exchange()
            .unwrap();
        assert_eq!(provider, OAuthProvider::GitHub);
        assert_eq!(token, "abc");
    }

    #[test]
    fn test_error_wins() {
        let rejection = params(Some("abc"), Some("google"), Some("access_denied"))
            .into_exchange()
            .unwrap_err();
        assert_eq!(rejection.message, "Authentication failed: access_denied");
    }

    #[test]
    fn test_malformed_callback() {
        for p in [
            params(None, Some("google"), None),
            params(Some("abc"), None, None),
            params(Some(""), Some("google"), None),
        ] {
            assert_eq!(
                p.into_exchange().unwrap_err().message,
                "Malformed authentication handshake."
            );
        }
    }

    #[test]
    fn test_unknown_provider() {
        let rejection = params(Some("abc"), Some("myspace"), None)
            .into_exchange()
            .unwrap_err();
        assert!(rejection.message.contains("myspace"));
    }
}
