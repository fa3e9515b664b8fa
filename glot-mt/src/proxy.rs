//! Proxy-service client provider
//!
//! The sanctioned path for clients: the credential stays with the
//! `glot-mt-web` service and only the text and target language go over the
//! wire. The proxy relays the upstream status code on failure, so this
//! adapter surfaces it unchanged.

use crate::error::{TranslateError, TranslateResult};
use crate::language::Language;
use crate::translator::{Translator, http_client};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProxyRequestBody<'a> {
    text: &'a str,
    target_language: &'static str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProxyResponseBody {
    translated_text: String,
}

#[derive(Debug, Deserialize)]
struct ProxyErrorBody {
    error: String,
    details: Option<String>,
}

/// Client of the glot proxy service
#[derive(Debug, Clone)]
pub struct ProxyProvider {
    client: reqwest::Client,
    base_url: String,
}

impl ProxyProvider {
    /// Create a client for the proxy service at `base_url`
    pub fn new(base_url: impl Into<String>) -> TranslateResult<Self> {
        let base_url = base_url.into();
        if base_url.trim().is_empty() {
            return Err(TranslateError::Config(
                "Proxy URL not configured".to_string(),
            ));
        }

        Ok(Self {
            client: http_client()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a client from the `GLOT_PROXY_URL` environment variable
    pub fn from_env() -> TranslateResult<Self> {
        let base_url = std::env::var("GLOT_PROXY_URL").map_err(|_| {
            TranslateError::Config("GLOT_PROXY_URL environment variable not set".to_string())
        })?;
        Self::new(base_url)
    }

    fn endpoint(&self) -> String {
        format!("{}/api/translate", self.base_url)
    }
}

#[async_trait]
impl Translator for ProxyProvider {
    async fn translate(&self, text: &str, target: Language) -> TranslateResult<String> {
        let body = ProxyRequestBody {
            text,
            target_language: target.name(),
        };

        let response = self.client.post(self.endpoint()).json(&body).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = match response.json::<ProxyErrorBody>().await {
                Ok(body) => body.details.unwrap_or(body.error),
                Err(_) => "Request failed".to_string(),
            };
            return Err(TranslateError::Upstream { status, message });
        }

        let data: ProxyResponseBody =
            response.json().await.map_err(|e| TranslateError::Upstream {
                status: 0,
                message: format!("Failed to parse proxy response: {}", e),
            })?;

        let translated = data.translated_text.trim();
        if translated.is_empty() {
            return Err(TranslateError::EmptyResult);
        }

        Ok(translated.to_string())
    }

    fn provider_name(&self) -> &str {
        "Proxy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_with_empty_url() {
        let result = ProxyProvider::new("");
        match result {
            Err(TranslateError::Config(msg)) => assert!(msg.contains("Proxy URL")),
            _ => panic!("Expected Config error"),
        }
    }

    #[test]
    fn test_endpoint_joins_route() {
        let provider = ProxyProvider::new("http://localhost:8787").unwrap();
        assert_eq!(provider.endpoint(), "http://localhost:8787/api/translate");
    }

    #[test]
    fn test_endpoint_tolerates_trailing_slash() {
        let provider = ProxyProvider::new("http://localhost:8787/").unwrap();
        assert_eq!(provider.endpoint(), "http://localhost:8787/api/translate");
    }

    #[test]
    fn test_request_body_uses_wire_names() {
        let body = ProxyRequestBody {
            text: "How are you?",
            target_language: Language::French.name(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["text"], "How are you?");
        assert_eq!(json["targetLanguage"], "French");
    }

    #[test]
    fn test_error_body_prefers_details() {
        let body: ProxyErrorBody =
            serde_json::from_str(r#"{"error":"Gemini API error","details":"quota exceeded"}"#)
                .unwrap();
        assert_eq!(body.details.as_deref(), Some("quota exceeded"));
    }

    #[test]
    fn test_provider_name() {
        let provider = ProxyProvider::new("http://localhost:8787").unwrap();
        assert_eq!(provider.provider_name(), "Proxy");
    }
}
