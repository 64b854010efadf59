use super::DocumentType;
use crate::{
    Error, Result,
    config::UpstreamConfig,
    llm::{ChatCompletionRequest, ChatMessage, LlmClient, OpenRouterClient},
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Raw request fields as the caller sent them.
#[derive(Debug, Clone, Default)]
pub struct ExtractionRequest {
    pub input: Option<String>,
    pub doc_type: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ExtractorSettings {
    pub model: String,
    pub temperature: f32,
    pub api_key: Option<String>,
}

impl From<&UpstreamConfig> for ExtractorSettings {
    fn from(config: &UpstreamConfig) -> Self {
        Self {
            model: config.model.clone(),
            temperature: config.temperature,
            api_key: config.api_key.clone(),
        }
    }
}

/// Runs one extraction per call. Holds no mutable state, so a single
/// instance is shared across all requests.
pub struct Extractor {
    client: Arc<dyn LlmClient>,
    settings: ExtractorSettings,
}

impl Extractor {
    pub fn new(client: Arc<dyn LlmClient>, settings: ExtractorSettings) -> Self {
        Self { client, settings }
    }

    pub fn from_config(config: &UpstreamConfig) -> Result<Self> {
        let client = OpenRouterClient::new(config)?;
        Ok(Self::new(Arc::new(client), ExtractorSettings::from(config)))
    }

    pub async fn extract(&self, request: ExtractionRequest) -> Result<Value> {
        let input = request
            .input
            .filter(|input| !input.is_empty())
            .ok_or_else(|| Error::bad_request("Input is required"))?;

        let api_key = self
            .settings
            .api_key
            .as_deref()
            .ok_or_else(|| Error::config("API key not configured"))?;

        let doc_type = DocumentType::resolve(request.doc_type.as_deref());
        info!(
            "Extracting {} from {} bytes of input",
            doc_type,
            input.len()
        );

        let completion_request = ChatCompletionRequest {
            model: self.settings.model.clone(),
            messages: vec![
                ChatMessage::system(doc_type.template()),
                ChatMessage::user(input),
            ],
            temperature: self.settings.temperature,
        };

        let content = self
            .client
            .create_chat_completion(api_key, completion_request)
            .await?
            .into_content()?;

        debug!("Parsing {} bytes of completion content", content.len());

        // The prompt asks for raw JSON; fenced or prose replies are a parse error.
        let parsed: Value = serde_json::from_str(&content)?;
        Ok(parsed)
    }
}
