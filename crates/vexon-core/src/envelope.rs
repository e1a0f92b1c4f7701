//! Response Envelope
//!
//! Every backend endpoint, and every client operation, answers with the same
//! `{status, message, data, code}` shape.

use serde::{Deserialize, Serialize};

/// Outcome flag carried by every envelope
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Success => write!(f, "success"),
            Status::Error => write!(f, "error"),
        }
    }
}

fn default_code() -> u16 {
    200
}

/// Uniform `{status, message, data, code}` envelope
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the backend accepted the request
    pub status: Status,

    /// Human-readable message, shown to the user as-is
    #[serde(default)]
    pub message: String,

    /// Payload; `null` on most errors
    pub data: Option<T>,

    /// HTTP-like status code reported by the backend
    #[serde(default = "default_code")]
    pub code: u16,
}

impl<T> ApiResponse<T> {
    /// Successful envelope with code 200
    pub fn success(message: impl Into<String>, data: Option<T>) -> Self {
        Self {
            status: Status::Success,
            message: message.into(),
            data,
            code: 200,
        }
    }

    /// Error envelope without payload
    pub fn failure(message: impl Into<String>, code: u16) -> Self {
        Self {
            status: Status::Error,
            message: message.into(),
            data: None,
            code,
        }
    }

    /// Synthetic envelope used when the request never produced a usable answer
    pub fn network_failure(message: impl Into<String>) -> Self {
        Self::failure(message, 500)
    }

    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }

    /// Payload of a successful envelope
    pub fn success_data(&self) -> Option<&T> {
        if self.is_success() {
            self.data.as_ref()
        } else {
            None
        }
    }

    /// Reinterpret the payload, keeping status, message and code.
    ///
    /// A payload `f` cannot read becomes `None`; the envelope outcome stays.
    pub fn and_then_data<U>(self, f: impl FnOnce(T) -> Option<U>) -> ApiResponse<U> {
        ApiResponse {
            status: self.status,
            message: self.message,
            data: self.data.and_then(f),
            code: self.code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_backend_error() {
        let raw = json!({
            "status": "error",
            "message": "Invalid credentials",
            "data": null,
            "code": 401
        });
        let resp: ApiResponse<serde_json::Value> = serde_json::from_value(raw).unwrap();
        assert_eq!(resp.status, Status::Error);
        assert_eq!(resp.message, "Invalid credentials");
        assert_eq!(resp.code, 401);
        assert!(resp.data.is_none());
    }

    #[test]
    fn test_missing_fields_default() {
        let resp: ApiResponse<u32> = serde_json::from_value(json!({"status": "success"})).unwrap();
        assert!(resp.is_success());
        assert_eq!(resp.message, "");
        assert_eq!(resp.code, 200);
        assert!(resp.data.is_none());
    }

    #[test]
    fn test_network_failure_shape() {
        let resp: ApiResponse<u32> = ApiResponse::network_failure("Network connection failed");
        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(
            value,
            json!({
                "status": "error",
                "message": "Network connection failed",
                "data": null,
                "code": 500
            })
        );
    }

    #[test]
    fn test_success_data_hidden_on_error() {
        let mut resp = ApiResponse::success("ok", Some(7));
        assert_eq!(resp.success_data(), Some(&7));
        resp.status = Status::Error;
        assert_eq!(resp.success_data(), None);
    }

    #[test]
    fn test_and_then_data_keeps_outcome() {
        let resp = ApiResponse::success("Plans synced", Some(json!([1, 2])));
        let mapped = resp.and_then_data(|v| v.as_array().map(Vec::len));
        assert!(mapped.is_success());
        assert_eq!(mapped.message, "Plans synced");
        assert_eq!(mapped.data, Some(2));

        let unreadable = ApiResponse::success("ok", Some(json!("text")));
        let mapped = unreadable.and_then_data(|v| v.as_array().map(Vec::len));
        assert!(mapped.is_success());
        assert_eq!(mapped.code, 200);
        assert!(mapped.data.is_none());
    }
}
