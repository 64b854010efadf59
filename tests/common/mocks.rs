use async_trait::async_trait;
use doc_extractor::{
    Error, Result,
    llm::{ChatCompletionRequest, ChatCompletionResponse, Choice, ChoiceMessage, LlmClient},
};
use serde_json::json;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Completion whose first choice carries `content`.
pub fn create_mock_completion(content: &str) -> ChatCompletionResponse {
    ChatCompletionResponse {
        error: None,
        choices: vec![Choice {
            message: ChoiceMessage {
                role: Some("assistant".to_string()),
                content: Some(content.to_string()),
            },
        }],
    }
}

/// Provider error body, `{"error": {"message": ...}}` or `{"error": {}}`.
pub fn create_mock_error_completion(message: Option<&str>) -> ChatCompletionResponse {
    let error = match message {
        Some(message) => json!({"message": message}),
        None => json!({}),
    };
    ChatCompletionResponse {
        error: Some(error),
        choices: Vec::new(),
    }
}

/// A call the mock received: the API key and the request body.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub api_key: String,
    pub request: ChatCompletionRequest,
}

/// Mock LLM client that replays queued outcomes and records every call.
#[derive(Default)]
pub struct MockLlmClient {
    outcomes: Mutex<VecDeque<Result<ChatCompletionResponse>>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(self, content: &str) -> Self {
        self.push(Ok(create_mock_completion(content)));
        self
    }

    pub fn with_response(self, response: ChatCompletionResponse) -> Self {
        self.push(Ok(response));
        self
    }

    pub fn with_error(self, error: Error) -> Self {
        self.push(Err(error));
        self
    }

    pub fn push(&self, outcome: Result<ChatCompletionResponse>) {
        self.outcomes.lock().unwrap().push_back(outcome);
    }

    /// Handle onto the call log that survives moving the mock into an `Arc<dyn LlmClient>`.
    pub fn call_log(&self) -> Arc<Mutex<Vec<RecordedCall>>> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn create_chat_completion(
        &self,
        api_key: &str,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        self.calls.lock().unwrap().push(RecordedCall {
            api_key: api_key.to_string(),
            request,
        });

        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(Error::internal("No mock response available")))
    }
}
