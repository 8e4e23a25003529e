use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use super::GenerativeClient;
use crate::error::{GenerationError, ProviderError};

/// Scripted response for the mock client.
#[derive(Debug, Clone)]
pub enum MockResponse {
    Success(String),
    NetworkError(String),
    ProviderError(String),
}

/// Shared control handle for a [`MockClient`]: scripts responses and counts
/// calls, so tests can assert on both the replies and the traffic.
#[derive(Debug, Default)]
pub struct MockHandle {
    responses: Mutex<VecDeque<MockResponse>>,
    calls: AtomicUsize,
}

impl MockHandle {
    pub fn add_response(&self, response: MockResponse) {
        self.responses.lock().unwrap().push_back(response);
    }

    /// Number of `ask_raw` invocations so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

/// Mock client for testing that replays scripted responses in order without
/// touching the network. When the script runs dry it answers `{}`.
#[derive(Debug, Clone, Default)]
pub struct MockClient {
    handle: Arc<MockHandle>,
}

impl MockClient {
    pub fn new() -> (Self, Arc<MockHandle>) {
        let handle = Arc::new(MockHandle::default());
        (
            Self {
                handle: handle.clone(),
            },
            handle,
        )
    }

    pub fn with_responses(responses: Vec<MockResponse>) -> (Self, Arc<MockHandle>) {
        let (client, handle) = Self::new();
        for response in responses {
            handle.add_response(response);
        }
        (client, handle)
    }
}

#[async_trait]
impl GenerativeClient for MockClient {
    async fn ask_raw(&self, _prompt: String) -> Result<String, GenerationError> {
        self.handle.calls.fetch_add(1, Ordering::SeqCst);
        let next = self.handle.responses.lock().unwrap().pop_front();
        match next {
            Some(MockResponse::Success(text)) => Ok(text),
            Some(MockResponse::NetworkError(message)) => Err(GenerationError::Network(message)),
            Some(MockResponse::ProviderError(message)) => {
                Err(GenerationError::Provider(ProviderError::Api(message)))
            }
            None => Ok("{}".to_string()),
        }
    }

    fn clone_box(&self) -> Box<dyn GenerativeClient> {
        Box::new(self.clone())
    }
}
