//! Mock LLM client for testing.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::translator::{CompletionRequest, CompletionResponse, LlmClient, LlmError, LlmUsage};

/// Mock implementation of the LlmClient trait.
///
/// Returns a canned response, or fails every call when constructed with
/// `failing()`. Records the last request for prompt assertions.
pub struct MockLlmClient {
    response: Mutex<String>,
    fail: bool,
    last_request: Mutex<Option<CompletionRequest>>,
}

impl MockLlmClient {
    /// A client that replies with the given text.
    pub fn new(response: &str) -> Self {
        Self {
            response: Mutex::new(response.to_string()),
            fail: false,
            last_request: Mutex::new(None),
        }
    }

    /// A client whose every call fails with an HTTP error.
    pub fn failing() -> Self {
        Self {
            response: Mutex::new(String::new()),
            fail: true,
            last_request: Mutex::new(None),
        }
    }

    /// The most recent request, if any.
    pub fn last_request(&self) -> Option<CompletionRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    fn provider(&self) -> &str {
        "mock"
    }

    fn model(&self) -> &str {
        "mock-model"
    }

    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        *self.last_request.lock().unwrap() = Some(request);

        if self.fail {
            return Err(LlmError::Http("connection refused".to_string()));
        }

        Ok(CompletionResponse {
            text: self.response.lock().unwrap().clone(),
            usage: LlmUsage {
                input_tokens: 100,
                output_tokens: 50,
            },
            model: "mock-model".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_canned_response() {
        let client = MockLlmClient::new("type: discover");
        let response = client
            .complete(CompletionRequest::new("hello"))
            .await
            .unwrap();
        assert_eq!(response.text, "type: discover");
        assert_eq!(client.last_request().unwrap().prompt, "hello");
    }

    #[tokio::test]
    async fn test_failing_client() {
        let client = MockLlmClient::failing();
        let result = client.complete(CompletionRequest::new("hello")).await;
        assert!(matches!(result, Err(LlmError::Http(_))));
    }
}
