//! Chat-completion API provider
//!
//! Variant for OpenAI-compatible endpoints. Same instruction and generation
//! policy as the Gemini provider; the credential rides in a bearer header
//! instead of the query string.

use crate::error::{TranslateError, TranslateResult};
use crate::language::Language;
use crate::translator::{MAX_OUTPUT_TOKENS, TEMPERATURE, Translator, build_prompt, http_client};
use async_trait::async_trait;
use serde_json::json;

const DEFAULT_BASE_URL: &str = "https://api.openai.com";
const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// OpenAI-compatible chat-completion provider
#[derive(Clone)]
pub struct ChatCompletionProvider {
    api_key: String,
    model: String,
    client: reqwest::Client,
    base_url: String,
}

impl ChatCompletionProvider {
    pub fn new(api_key: String) -> TranslateResult<Self> {
        if api_key.trim().is_empty() {
            return Err(TranslateError::Config("API key not configured".to_string()));
        }

        Ok(Self {
            api_key,
            model: DEFAULT_MODEL.to_string(),
            client: http_client()?,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Create a provider from the `OPENAI_API_KEY` environment variable
    pub fn from_env() -> TranslateResult<Self> {
        let api_key = std::env::var("OPENAI_API_KEY").map_err(|_| {
            TranslateError::Config("OPENAI_API_KEY environment variable not set".to_string())
        })?;
        Self::new(api_key)
    }

    /// Use a different model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Point the provider at a different host (tests, compatible servers)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url)
    }
}

impl std::fmt::Debug for ChatCompletionProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatCompletionProvider")
            .field("api_key", &"***")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait]
impl Translator for ChatCompletionProvider {
    async fn translate(&self, text: &str, target: Language) -> TranslateResult<String> {
        let body = json!({
            "model": self.model,
            "messages": [{
                "role": "user",
                "content": build_prompt(text, target)
            }],
            "temperature": TEMPERATURE,
            "max_tokens": MAX_OUTPUT_TOKENS,
        });

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let error_body: serde_json::Value = response.json().await.unwrap_or_default();
            let message = error_body["error"]["message"]
                .as_str()
                .unwrap_or("Request failed")
                .to_string();
            return Err(TranslateError::Upstream { status, message });
        }

        let data: serde_json::Value = response.json().await.map_err(|e| TranslateError::Upstream {
            status: 0,
            message: format!("Failed to parse API response: {}", e),
        })?;

        let translated = data["choices"][0]["message"]["content"]
            .as_str()
            .map(str::trim)
            .unwrap_or_default();

        if translated.is_empty() {
            return Err(TranslateError::EmptyResult);
        }

        Ok(translated.to_string())
    }

    fn provider_name(&self) -> &str {
        "Chat Completion"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_with_empty_key() {
        assert!(ChatCompletionProvider::new("".to_string()).is_err());
    }

    #[test]
    fn test_defaults() {
        let provider = ChatCompletionProvider::new("sk-test".to_string()).unwrap();
        assert_eq!(provider.model, DEFAULT_MODEL);
        assert_eq!(provider.endpoint(), "https://api.openai.com/v1/chat/completions");
    }

    #[test]
    fn test_model_and_base_url_overrides() {
        let provider = ChatCompletionProvider::new("sk-test".to_string())
            .unwrap()
            .with_model("local-llm")
            .with_base_url("http://localhost:11434");
        assert_eq!(provider.model, "local-llm");
        assert_eq!(provider.endpoint(), "http://localhost:11434/v1/chat/completions");
    }

    #[test]
    fn test_debug_masks_key() {
        let provider = ChatCompletionProvider::new("sk-secret".to_string()).unwrap();
        let debug_str = format!("{:?}", provider);
        assert!(debug_str.contains("***"));
        assert!(!debug_str.contains("sk-secret"));
    }

    #[test]
    fn test_provider_name() {
        let provider = ChatCompletionProvider::new("sk-test".to_string()).unwrap();
        assert_eq!(provider.provider_name(), "Chat Completion");
    }
}
