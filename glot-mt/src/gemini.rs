//! Generative-language API provider (Gemini)
//!
//! Talks to the `generateContent` endpoint with the API key as a URL query
//! parameter. The key must therefore only live where it is allowed to: the
//! proxy service or a server-side CLI process, never an untrusted client.
//! Clients go through [`ProxyProvider`](crate::proxy::ProxyProvider) instead.
//!
//! # Authentication
//!
//! The provider loads the API key from the `GEMINI_API_KEY` environment
//! variable. Well-formed keys start with the `AIza` literal prefix; anything
//! else is rejected before a single upstream request is made.

use crate::error::{TranslateError, TranslateResult};
use crate::language::Language;
use crate::translator::{MAX_OUTPUT_TOKENS, TEMPERATURE, Translator, build_prompt, http_client};
use async_trait::async_trait;
use serde_json::json;

/// Required literal prefix of a well-formed API key
const KEY_PREFIX: &str = "AIza";

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const MODEL: &str = "gemini-1.5-flash";

/// Gemini `generateContent` provider
#[derive(Clone)]
pub struct GeminiProvider {
    api_key: String,
    client: reqwest::Client,
    base_url: String,
}

impl GeminiProvider {
    /// Create a provider with an explicit API key.
    ///
    /// Fails fast on an empty key or a key without the required prefix, so a
    /// broken credential is never sent upstream.
    pub fn new(api_key: String) -> TranslateResult<Self> {
        if api_key.trim().is_empty() {
            return Err(TranslateError::Config("API key not configured".to_string()));
        }
        if !api_key.starts_with(KEY_PREFIX) {
            return Err(TranslateError::Config(format!(
                "Invalid API key format. Key should start with \"{}\"",
                KEY_PREFIX
            )));
        }

        Ok(Self {
            api_key,
            client: http_client()?,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Create a provider from the `GEMINI_API_KEY` environment variable
    pub fn from_env() -> TranslateResult<Self> {
        let api_key = std::env::var("GEMINI_API_KEY").map_err(|_| {
            TranslateError::Config("GEMINI_API_KEY environment variable not set".to_string())
        })?;
        Self::new(api_key)
    }

    /// Point the provider at a different host (tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    // The key rides in the query string; never log this value.
    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, MODEL, self.api_key
        )
    }
}

impl std::fmt::Debug for GeminiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiProvider")
            .field("api_key", &"***")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait]
impl Translator for GeminiProvider {
    async fn translate(&self, text: &str, target: Language) -> TranslateResult<String> {
        let body = json!({
            "contents": [{
                "parts": [{
                    "text": build_prompt(text, target)
                }]
            }],
            "generationConfig": {
                "temperature": TEMPERATURE,
                "maxOutputTokens": MAX_OUTPUT_TOKENS,
            }
        });

        let response = self.client.post(self.endpoint()).json(&body).send().await?;

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

        let translated = data["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .map(str::trim)
            .unwrap_or_default();

        if translated.is_empty() {
            return Err(TranslateError::EmptyResult);
        }

        Ok(translated.to_string())
    }

    fn provider_name(&self) -> &str {
        "Gemini"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_with_valid_key() {
        let provider = GeminiProvider::new("AIza-test-key".to_string());
        assert!(provider.is_ok());
        assert_eq!(provider.unwrap().provider_name(), "Gemini");
    }

    #[test]
    fn test_new_with_empty_key() {
        let result = GeminiProvider::new("".to_string());
        match result {
            Err(TranslateError::Config(msg)) => assert!(msg.contains("not configured")),
            _ => panic!("Expected Config error"),
        }
    }

    #[test]
    fn test_new_with_whitespace_key() {
        assert!(GeminiProvider::new("   ".to_string()).is_err());
    }

    #[test]
    fn test_new_rejects_missing_prefix() {
        let result = GeminiProvider::new("sk-wrong-ecosystem".to_string());
        match result {
            Err(TranslateError::Config(msg)) => assert!(msg.contains("AIza")),
            _ => panic!("Expected Config error"),
        }
    }

    #[test]
    fn test_from_env_without_key() {
        unsafe {
            std::env::remove_var("GEMINI_API_KEY");
        }
        let result = GeminiProvider::from_env();
        match result {
            Err(TranslateError::Config(msg)) => assert!(msg.contains("not set")),
            _ => panic!("Expected Config error"),
        }
    }

    #[test]
    fn test_debug_masks_key() {
        let provider = GeminiProvider::new("AIza-secret".to_string()).unwrap();
        let debug_str = format!("{:?}", provider);
        assert!(debug_str.contains("***"));
        assert!(!debug_str.contains("AIza-secret"));
    }

    #[test]
    fn test_endpoint_carries_model_and_key() {
        let provider = GeminiProvider::new("AIza-test".to_string())
            .unwrap()
            .with_base_url("http://localhost:9090");
        let endpoint = provider.endpoint();
        assert!(endpoint.starts_with("http://localhost:9090/v1beta/models/"));
        assert!(endpoint.contains("generateContent"));
        assert!(endpoint.ends_with("?key=AIza-test"));
    }

    // Requires a real key; run with: cargo test -- --ignored
    #[tokio::test]
    #[ignore]
    async fn test_real_api_translation() {
        if std::env::var("GEMINI_API_KEY").is_err() {
            eprintln!("Skipping: GEMINI_API_KEY not set");
            return;
        }

        let provider = GeminiProvider::from_env().unwrap();
        let result = provider
            .translate("Hello", Language::French)
            .await
            .unwrap();
        println!("Translation: Hello → {}", result);
        assert!(!result.is_empty());
    }
}
