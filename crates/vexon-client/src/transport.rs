//! Transport Strategy
//!
//! `ApiClient` never touches the network directly. It hands an `ApiRequest`
//! to a `Transport`, which makes swapping the real HTTP stack for a scripted
//! one in tests a constructor argument.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::Result;

/// HTTP verbs the API uses
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Method::Get => write!(f, "GET"),
            Method::Post => write!(f, "POST"),
        }
    }
}

/// A request relative to the API root
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,

    /// Path below the API root, e.g. `/auth/login`
    pub path: String,

    /// JSON body, sent with `Content-Type: application/json`
    pub body: Option<Value>,

    /// Full `Authorization` header value
    pub authorization: Option<String>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            body: None,
            authorization: None,
        }
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            body: Some(body),
            authorization: None,
        }
    }

    /// Attach an `Authorization` header when one is available
    pub fn with_authorization(mut self, authorization: Option<String>) -> Self {
        self.authorization = authorization;
        self
    }
}

/// Raw answer from the transport
#[derive(Clone, Debug)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,

    /// Undecoded body
    pub body: String,
}

impl TransportResponse {
    /// Decode the body as JSON regardless of HTTP status.
    ///
    /// The backend reports logical failures inside the envelope, often with a
    /// 4xx status, so the status code alone says nothing.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// Strategy trait for sending requests
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait Transport: Send + Sync {
    /// Send one request; errors only on transport failure
    async fn send(&self, request: ApiRequest) -> Result<TransportResponse>;

    /// Transport name for logs
    fn name(&self) -> &str;
}

/// `reqwest`-backed transport
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    /// Create a transport for the given API root
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<TransportResponse> {
        let url = self.url(&request.path);
        tracing::debug!(method = %request.method, %url, "sending request");

        let mut builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
        };
        if let Some(ref authorization) = request.authorization {
            builder = builder.header(reqwest::header::AUTHORIZATION, authorization);
        }
        if let Some(ref body) = request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        tracing::debug!(status, %url, "response received");
        Ok(TransportResponse { status, body })
    }

    fn name(&self) -> &str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_builders() {
        let get = ApiRequest::get("/subscription-plans");
        assert_eq!(get.method, Method::Get);
        assert!(get.body.is_none());

        let post = ApiRequest::post("/maps/pin", json!({"address": "SF"}))
            .with_authorization(Some("Bearer t1".into()));
        assert_eq!(post.method, Method::Post);
        assert_eq!(post.authorization.as_deref(), Some("Bearer t1"));
    }

    #[test]
    fn test_http_url() {
        let transport = HttpTransport::new("https://api.example.com/api/");
        assert_eq!(transport.url("/auth/login"), "https://api.example.com/api/auth/login");
    }

    #[test]
    fn test_decode_ignores_status() {
        let response = TransportResponse {
            status: 422,
            body: r#"{"status":"error","message":"Email taken","data":null,"code":422}"#.into(),
        };
        let value: Value = response.json().unwrap();
        assert_eq!(value["message"], "Email taken");
    }

    #[test]
    fn test_decode_rejects_html() {
        let response = TransportResponse {
            status: 502,
            body: "<html>Bad Gateway</html>".into(),
        };
        assert!(response.json::<Value>().is_err());
    }
}
