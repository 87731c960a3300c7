/*!
 * Mock completion client for testing
 *
 * Provides a scripted CompletionClient implementation so orchestrator tests
 * never make external calls, plus a call log to assert on dispatch behavior.
 */

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use hotbrief::errors::ProviderError;
use hotbrief::providers::{CompletionClient, CompletionRequest};

/// One scripted reply
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Successful completion with the given raw text
    Text(String),
    /// Transport-style failure
    Fail,
}

/// Scripted mock implementation of CompletionClient
#[derive(Debug, Default)]
pub struct MockCompletionClient {
    replies: Mutex<VecDeque<MockReply>>,
    calls: Mutex<Vec<CompletionRequest>>,
}

impl MockCompletionClient {
    /// Create a client with a queue of scripted replies. Once the queue is
    /// drained every further call fails.
    pub fn new(replies: Vec<MockReply>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Create a client that fails every call
    pub fn always_failing() -> Self {
        Self::new(Vec::new())
    }

    /// Number of complete() invocations so far
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Snapshot of the received requests
    pub fn calls(&self) -> Vec<CompletionRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionClient for MockCompletionClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String, ProviderError> {
        self.calls.lock().unwrap().push(request);

        match self.replies.lock().unwrap().pop_front() {
            Some(MockReply::Text(text)) => Ok(text),
            Some(MockReply::Fail) | None => {
                Err(ProviderError::ConnectionError("mock transport failure".to_string()))
            }
        }
    }
}
