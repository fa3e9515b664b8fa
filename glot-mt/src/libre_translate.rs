//! Dictionary-service provider (LibreTranslate)
//!
//! The fallback backend: a plain REST translation service that needs no
//! credential for the public endpoint. Source language is left on automatic
//! detection.

use crate::error::{TranslateError, TranslateResult};
use crate::language::Language;
use crate::translator::{Translator, http_client};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

const DEFAULT_ENDPOINT: &str = "https://libretranslate.com/translate";

#[derive(Debug, Serialize)]
struct TranslateRequestBody<'a> {
    q: &'a str,
    source: &'static str,
    target: &'static str,
    format: &'static str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslateResponseBody {
    translated_text: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// LibreTranslate REST provider
#[derive(Debug, Clone)]
pub struct LibreTranslateProvider {
    client: reqwest::Client,
    endpoint: String,
}

impl LibreTranslateProvider {
    /// Create a provider against the public endpoint
    pub fn new() -> TranslateResult<Self> {
        Ok(Self {
            client: http_client()?,
            endpoint: DEFAULT_ENDPOINT.to_string(),
        })
    }

    /// Create a provider honoring the `LIBRE_TRANSLATE_URL` override when it
    /// is set (e.g. a self-hosted instance), the public endpoint otherwise
    pub fn from_env() -> TranslateResult<Self> {
        let mut provider = Self::new()?;
        if let Ok(endpoint) = std::env::var("LIBRE_TRANSLATE_URL") {
            if !endpoint.trim().is_empty() {
                provider.endpoint = endpoint;
            }
        }
        Ok(provider)
    }

    /// Point the provider at a different endpoint (tests, self-hosted)
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[async_trait]
impl Translator for LibreTranslateProvider {
    async fn translate(&self, text: &str, target: Language) -> TranslateResult<String> {
        let body = TranslateRequestBody {
            q: text,
            source: "auto",
            target: target.code(),
            format: "text",
        };

        let response = self.client.post(&self.endpoint).json(&body).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = match response.json::<ErrorBody>().await {
                Ok(body) => body.error,
                Err(_) => "Fallback translation failed".to_string(),
            };
            return Err(TranslateError::Upstream { status, message });
        }

        let data: TranslateResponseBody =
            response.json().await.map_err(|e| TranslateError::Upstream {
                status: 0,
                message: format!("Failed to parse API response: {}", e),
            })?;

        let translated = data.translated_text.trim();
        if translated.is_empty() {
            return Err(TranslateError::EmptyResult);
        }

        Ok(translated.to_string())
    }

    fn provider_name(&self) -> &str {
        "LibreTranslate"
    }
}
