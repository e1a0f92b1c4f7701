//! Dashboard Route Guard
//!
//! Decides, from the stored session alone, whether a protected page renders
//! or the visitor is sent to the login page.

use crate::model::Session;
use crate::session::SessionStore;

/// Login page path
pub const LOGIN_PATH: &str = "/login";

/// Where a successful login lands when no origin was recorded
pub const DEFAULT_RETURN_PATH: &str = "/dashboard";

/// Outcome of guarding a protected location
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Access {
    /// Session present: render the protected content
    Granted(Session),

    /// No session: send the visitor to login
    Redirect(LoginRedirect),
}

impl Access {
    pub fn is_granted(&self) -> bool {
        matches!(self, Access::Granted(_))
    }
}

/// Redirect to the login page remembering the original location
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginRedirect {
    origin: String,
}

impl LoginRedirect {
    pub fn new(origin: impl Into<String>) -> Self {
        Self { origin: origin.into() }
    }

    /// Location the visitor originally asked for
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// `/login?from=<encoded location>`
    pub fn target(&self) -> String {
        format!("{LOGIN_PATH}?from={}", urlencoding::encode(&self.origin))
    }
}

/// Guard `location` with whatever session `store` holds right now.
///
/// An unreadable store counts as logged out.
pub fn guard<S: SessionStore + ?Sized>(store: &S, location: &str) -> Access {
    match store.load() {
        Ok(Some(session)) => Access::Granted(session),
        Ok(None) => Access::Redirect(LoginRedirect::new(location)),
        Err(e) => {
            tracing::warn!("Session unreadable, treating as logged out: {}", e);
            Access::Redirect(LoginRedirect::new(location))
        }
    }
}

/// Post-login destination from a `from` query value.
///
/// Only same-site absolute paths are honored.
pub fn return_path(from: Option<&str>) -> String {
    match from {
        Some(path) if path.starts_with('/') && !path.starts_with("//") => path.to_string(),
        _ => DEFAULT_RETURN_PATH.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::User;
    use crate::session::MemorySessionStore;

    fn session() -> Session {
        Session {
            user: User {
                id: serde_json::json!(1),
                username: "neo".into(),
                email: "neo@vexon.ai".into(),
                ..Default::default()
            },
            token: "t1".into(),
        }
    }

    #[test]
    fn test_granted_with_session() {
        let store = MemorySessionStore::with_session(&session()).unwrap();
        assert_eq!(guard(&store, "/dashboard/billing"), Access::Granted(session()));
    }

    #[test]
    fn test_redirect_carries_location() {
        let store = MemorySessionStore::new();
        let Access::Redirect(redirect) = guard(&store, "/dashboard/checkout/pro") else {
            panic!("expected redirect");
        };
        assert_eq!(redirect.origin(), "/dashboard/checkout/pro");
        assert_eq!(redirect.target(), "/login?from=%2Fdashboard%2Fcheckout%2Fpro");
    }

    #[test]
    fn test_unusual_user_shape_still_granted() {
        let store = MemorySessionStore::from_raw(
            r#"{"user":{"id":"u-17","role":"admin"},"token":"t1"}"#,
        );
        let Access::Granted(session) = guard(&store, "/dashboard") else {
            panic!("expected access");
        };
        assert_eq!(session.token, "t1");
        assert_eq!(session.user.extra["role"], "admin");
    }

    #[test]
    fn test_corrupt_session_redirects() {
        let store = MemorySessionStore::from_raw("garbage");
        assert!(!guard(&store, "/dashboard").is_granted());
    }

    #[test]
    fn test_return_path() {
        assert_eq!(return_path(Some("/dashboard/billing")), "/dashboard/billing");
        assert_eq!(return_path(None), "/dashboard");
        assert_eq!(return_path(Some("https://evil.example")), "/dashboard");
        assert_eq!(return_path(Some("//evil.example")), "/dashboard");
    }
}
