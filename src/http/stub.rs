//! In-memory transport for tests and offline use

use super::client::{HttpTransport, TransportResponse};
use crate::error::{Error, Result};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use url::Url;

/// One scripted reply
#[derive(Debug, Clone)]
pub enum StubReply {
    /// Return this response
    Respond(TransportResponse),
    /// Fail as if the network was unreachable
    Fail(String),
}

/// A transport that replays scripted replies in order.
///
/// Once a single reply is left it is repeated for every further request.
/// Every requested URL is recorded.
#[derive(Debug, Default)]
pub struct StubTransport {
    replies: Mutex<VecDeque<StubReply>>,
    requests: Mutex<Vec<Url>>,
}

impl StubTransport {
    /// Create an empty stub
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a stub that replays the given responses
    pub fn with_responses(responses: impl IntoIterator<Item = TransportResponse>) -> Self {
        let stub = Self::new();
        for response in responses {
            stub.push(StubReply::Respond(response));
        }
        stub
    }

    /// Queue a reply
    pub fn push(&self, reply: StubReply) {
        self.replies.lock().unwrap().push_back(reply);
    }

    /// Queue a response
    pub fn push_response(&self, response: TransportResponse) {
        self.push(StubReply::Respond(response));
    }

    /// Queue a transport failure
    pub fn push_failure(&self, message: impl Into<String>) {
        self.push(StubReply::Fail(message.into()));
    }

    /// URLs requested so far
    pub fn requests(&self) -> Vec<Url> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of requests sent so far
    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    fn next_reply(&self) -> Option<StubReply> {
        let mut replies = self.replies.lock().unwrap();
        if replies.len() > 1 {
            replies.pop_front()
        } else {
            replies.front().cloned()
        }
    }
}

#[async_trait]
impl HttpTransport for StubTransport {
    async fn get(&self, url: &Url) -> Result<TransportResponse> {
        self.requests.lock().unwrap().push(url.clone());

        match self.next_reply() {
            Some(StubReply::Respond(response)) => Ok(response),
            Some(StubReply::Fail(message)) => Err(Error::transport(message)),
            None => Err(Error::transport("no scripted reply")),
        }
    }
}
