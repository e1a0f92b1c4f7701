//! Domain Models
//!
//! Shapes exchanged with the Vexon API. The client treats them as opaque
//! display data and never validates or normalizes them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Account as returned by the auth endpoints.
///
/// A display view only: fields of an unexpected type read as absent and
/// unknown fields land in `extra`, so any user object the backend sends can
/// be shown. The stored session keeps the backend's JSON verbatim.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Backend identifier, numeric or textual
    #[serde(default)]
    pub id: Value,

    #[serde(default, deserialize_with = "lenient::string")]
    pub username: String,

    #[serde(default, deserialize_with = "lenient::string")]
    pub email: String,

    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient::opt_string")]
    pub first_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient::opt_string")]
    pub last_name: Option<String>,

    /// Avatar URL, `null` when unset
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub avatar: Option<String>,

    /// Slug of the active plan, `null` before any subscription
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub current_plan: Option<String>,

    /// Fields the client only passes through
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Text fields that tolerate numbers, booleans and nulls
mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn opt_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        })
    }

    pub fn string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        Ok(opt_string(deserializer)?.unwrap_or_default())
    }
}

impl User {
    /// Full name when the profile has one, the username otherwise
    pub fn display_name(&self) -> String {
        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect();

        if parts.is_empty() {
            self.username.clone()
        } else {
            parts.join(" ")
        }
    }

    /// Plan slug for display, `basic` when none is recorded
    pub fn plan_label(&self) -> &str {
        self.current_plan.as_deref().unwrap_or("basic")
    }
}

/// Persisted "logged in" state: exactly what the auth endpoints return
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user: User,
    pub token: String,
}

impl Session {
    /// `Authorization` header value for this session
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

/// Prices go out as JSON numbers; the backend may answer with numbers or strings
mod price {
    use rust_decimal::{prelude::ToPrimitive, Decimal};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
        match value.to_f64() {
            Some(v) => serializer.serialize_f64(v),
            None => serializer.serialize_str(&value.to_string()),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Decimal, D::Error> {
        <Decimal as Deserialize>::deserialize(deserializer)
    }
}

/// Subscription plan as listed by `GET /subscription-plans`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    pub name: String,
    pub slug: String,

    /// Monthly price in USD
    #[serde(with = "price")]
    pub price: Decimal,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Fields the backend adds that the client only passes through
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Plan {
    pub fn new(
        name: impl Into<String>,
        slug: impl Into<String>,
        price: Decimal,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            slug: slug.into(),
            price,
            description: Some(description.into()),
            extra: Map::new(),
        }
    }

    /// Catalog pushed to a backend that has no plans yet
    pub fn default_catalog() -> Vec<Plan> {
        vec![
            Plan::new("Basic", "basic", Decimal::ZERO, "Eternal experimental use"),
            Plan::new("Pro", "pro", Decimal::new(2999, 2), "Full neural cluster access"),
            Plan::new(
                "Enterprise",
                "enterprise",
                Decimal::new(29999, 2),
                "Military grade synthesis",
            ),
        ]
    }

    pub fn is_free(&self) -> bool {
        self.price.is_zero()
    }
}

/// Card entered on the checkout page, forwarded as `payment_method`
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDetails {
    pub card_number: String,
    pub expiry_month: String,
    pub expiry_year: String,
    pub cvv: String,
    pub card_holder: String,
}

impl std::fmt::Debug for CardDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let digits: String = self.card_number.chars().filter(char::is_ascii_digit).collect();
        let tail = &digits[digits.len().saturating_sub(4)..];
        f.debug_struct("CardDetails")
            .field("card_number", &format!("**** {tail}"))
            .field("expiry_month", &self.expiry_month)
            .field("expiry_year", &self.expiry_year)
            .field("cvv", &"***")
            .field("card_holder", &self.card_holder)
            .finish()
    }
}

/// Billing address attached to subscriptions
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingAddress {
    pub city: String,
    pub country: String,
}

impl Default for BillingAddress {
    /// Placeholder the checkout flow sends; the form never collects an address
    fn default() -> Self {
        Self {
            city: "Digital Void".into(),
            country: "Protocol".into(),
        }
    }
}

/// Registration form; the password never leaves the client in clear
#[derive(Clone, Debug, Default)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}

/// Contact page submission
#[derive(Clone, Debug, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub captcha_token: Option<String>,
}

/// Reply of the support chat endpoint
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
}

/// Result of a Neural Lab generation
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Generation {
    pub id: u32,
    pub prompt: String,
    pub response: String,
    pub tokens_used: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn user() -> User {
        User {
            id: json!(1),
            username: "neo".into(),
            email: "neo@vexon.ai".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_display_name() {
        let mut u = user();
        assert_eq!(u.display_name(), "neo");

        u.first_name = Some("Thomas".into());
        u.last_name = Some("Anderson".into());
        assert_eq!(u.display_name(), "Thomas Anderson");

        u.last_name = Some("  ".into());
        assert_eq!(u.display_name(), "Thomas");
    }

    #[test]
    fn test_user_null_fields() {
        let u: User = serde_json::from_value(json!({
            "id": 3,
            "username": "trinity",
            "email": "t@vexon.ai",
            "avatar": null,
            "current_plan": "pro"
        }))
        .unwrap();
        assert_eq!(u.plan_label(), "pro");
        assert!(u.first_name.is_none());
    }

    #[test]
    fn test_session_bearer() {
        let session = Session { user: user(), token: "t1".into() };
        assert_eq!(session.bearer(), "Bearer t1");
    }

    #[test]
    fn test_plan_price_accepts_number_and_string() {
        let from_number: Plan = serde_json::from_value(json!({
            "id": 2, "name": "Pro", "slug": "pro", "price": 29, "features": ["lab"]
        }))
        .unwrap();
        assert_eq!(from_number.price, dec!(29));
        assert_eq!(from_number.extra["features"], json!(["lab"]));

        let from_string: Plan = serde_json::from_value(json!({
            "name": "Enterprise", "slug": "enterprise", "price": "299.99"
        }))
        .unwrap();
        assert_eq!(from_string.price, dec!(299.99));
    }

    #[test]
    fn test_default_catalog() {
        let catalog = Plan::default_catalog();
        let slugs: Vec<&str> = catalog.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, ["basic", "pro", "enterprise"]);
        assert!(catalog[0].is_free());
        assert_eq!(catalog[1].price, dec!(29.99));
        assert_eq!(catalog[2].price, dec!(299.99));
    }

    #[test]
    fn test_card_debug_is_redacted() {
        let card = CardDetails {
            card_number: "4242 4242 4242 4242".into(),
            cvv: "123".into(),
            ..Default::default()
        };
        let rendered = format!("{card:?}");
        assert!(rendered.contains("**** 4242"));
        assert!(!rendered.contains("123"));
    }

    #[test]
    fn test_user_tolerates_unexpected_shapes() {
        let u: User = serde_json::from_value(json!({
            "id": "u-17",
            "username": 99,
            "email": null,
            "first_name": {"given": "Thomas"},
            "role": "admin"
        }))
        .unwrap();
        assert_eq!(u.id, json!("u-17"));
        assert_eq!(u.username, "99");
        assert_eq!(u.email, "");
        assert!(u.first_name.is_none());
        assert_eq!(u.display_name(), "99");
        assert_eq!(u.extra["role"], "admin");
    }

    #[test]
    fn test_user_extra_fields_serialize_back() {
        let u: User = serde_json::from_value(json!({
            "id": 1, "username": "neo", "email": "n@vexon.ai", "role": "admin"
        }))
        .unwrap();
        assert_eq!(serde_json::to_value(&u).unwrap()["role"], "admin");
    }
}
