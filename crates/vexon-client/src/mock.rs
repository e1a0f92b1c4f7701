//! Mock Transport
//!
//! Scripted transport for tests and offline demos. Replies are queued per
//! `(method, path)` and consumed in order; every request is recorded.

use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{ClientError, Result};
use crate::transport::{ApiRequest, Method, Transport, TransportResponse};

/// One scripted answer
#[derive(Clone, Debug)]
enum MockReply {
    Body { status: u16, body: String },
    Fail(String),
}

/// Transport answering from a script
#[derive(Default)]
pub struct MockTransport {
    replies: Mutex<HashMap<(Method, String), VecDeque<MockReply>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    fn enqueue(&self, method: Method, path: &str, reply: MockReply) -> &Self {
        self.replies
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry((method, path.to_string()))
            .or_default()
            .push_back(reply);
        self
    }

    /// Queue a JSON reply with status 200
    pub fn reply(&self, method: Method, path: &str, body: Value) -> &Self {
        self.reply_raw(method, path, 200, body.to_string())
    }

    /// Queue a reply with an arbitrary status and body
    pub fn reply_raw(&self, method: Method, path: &str, status: u16, body: impl Into<String>) -> &Self {
        self.enqueue(
            method,
            path,
            MockReply::Body {
                status,
                body: body.into(),
            },
        )
    }

    /// Queue a transport failure
    pub fn fail(&self, method: Method, path: &str, reason: impl Into<String>) -> &Self {
        self.enqueue(method, path, MockReply::Fail(reason.into()))
    }

    /// Every request sent so far, in order
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of requests sent to `(method, path)`
    pub fn count(&self, method: Method, path: &str) -> usize {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }

    /// Last request sent to `(method, path)`
    pub fn last(&self, method: Method, path: &str) -> Option<ApiRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .rev()
            .find(|r| r.method == method && r.path == path)
            .cloned()
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<TransportResponse> {
        let key = (request.method, request.path.clone());
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request);

        let reply = self
            .replies
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get_mut(&key)
            .and_then(VecDeque::pop_front);

        match reply {
            Some(MockReply::Body { status, body }) => Ok(TransportResponse { status, body }),
            Some(MockReply::Fail(reason)) => Err(ClientError::Network(reason)),
            None => Err(ClientError::Network(format!(
                "connection refused: no scripted reply for {} {}",
                key.0, key.1
            ))),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}
