use super::types::*;
use crate::{Error, Result, config::UpstreamConfig};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn create_chat_completion(
        &self,
        api_key: &str,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse>;
}

pub struct OpenRouterClient {
    client: reqwest::Client,
    endpoint: String,
    referer: String,
    title: String,
    timeout: Duration,
}

impl OpenRouterClient {
    pub fn new(config: &UpstreamConfig) -> Result<Self> {
        let timeout = Duration::from_secs(config.timeout_secs);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: format!("{}/chat/completions", config.base_url.trim_end_matches('/')),
            referer: config.referer.clone(),
            title: config.title.clone(),
            timeout,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn classify(&self, err: reqwest::Error) -> Error {
        if err.is_timeout() {
            Error::UpstreamTimeout(self.timeout)
        } else {
            Error::Network(err)
        }
    }
}

#[async_trait]
impl LlmClient for OpenRouterClient {
    async fn create_chat_completion(
        &self,
        api_key: &str,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        debug!(
            "Creating chat completion against {} with model {} and {} messages",
            self.endpoint,
            request.model,
            request.messages.len()
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .header("HTTP-Referer", &self.referer)
            .header("X-Title", &self.title)
            .json(&request)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        // Error bodies are inspected by the caller, so the status is only logged.
        let status = response.status();
        let body: ChatCompletionResponse = response.json().await.map_err(|e| self.classify(e))?;

        debug!(
            "Received chat completion response (status {}) with {} choices",
            status,
            body.choices.len()
        );

        Ok(body)
    }
}
