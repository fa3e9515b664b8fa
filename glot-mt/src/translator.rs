//! Translation backend contract and shared request policy
//!
//! This module defines the `Translator` trait for backend abstraction,
//! enabling the relay to treat a generative-language API, a dictionary REST
//! service, a chat-completion API, or the credential-holding proxy service
//! interchangeably.
//!
//! # Example
//!
//! ```ignore
//! use glot_mt::{Language, LibreTranslateProvider, Translator};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = LibreTranslateProvider::from_env()?;
//!     let result = provider.translate("Hello, world!", Language::French).await?;
//!     println!("{}", result);
//!     Ok(())
//! }
//! ```

use crate::error::{TranslateError, TranslateResult};
use crate::language::Language;
use async_trait::async_trait;
use std::time::Duration;

/// Sampling temperature shared by the generative backends, kept low to favor
/// deterministic output
pub const TEMPERATURE: f32 = 0.1;

/// Output length cap shared by the generative backends
pub const MAX_OUTPUT_TOKENS: u32 = 1000;

/// Per-request timeout applied to every provider's HTTP client
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Generic contract for translation backends
///
/// One attempt per call, no internal retry. Implementations encapsulate one
/// backend's endpoint, request envelope, response envelope, and credential
/// placement; everything else about a backend stays behind this trait.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate `text` into `target`.
    ///
    /// A non-success transport response fails with
    /// [`TranslateError::Upstream`] carrying the upstream message when one
    /// can be extracted. A success envelope with no extractable text is
    /// normalized to [`TranslateError::EmptyResult`]; a partial or garbled
    /// result is never returned.
    async fn translate(&self, text: &str, target: Language) -> TranslateResult<String>;

    /// Name of this backend, used for logging
    fn provider_name(&self) -> &str;
}

/// Instruction sent to the generative backends.
///
/// Asks for the bare translation so no surrounding commentary has to be
/// stripped from the response.
pub fn build_prompt(text: &str, target: Language) -> String {
    format!(
        "Translate the following text to {}. Only return the translation, no explanations:\n\n\"{}\"",
        target, text
    )
}

/// HTTP client shared by the provider constructors, with the relay's
/// request timeout applied
pub(crate) fn http_client() -> TranslateResult<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|e| TranslateError::Config(format!("Failed to create HTTP client: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_names_target_language() {
        let prompt = build_prompt("How are you?", Language::French);
        assert!(prompt.contains("to French."));
        assert!(prompt.contains("\"How are you?\""));
    }

    #[test]
    fn test_prompt_asks_for_bare_translation() {
        let prompt = build_prompt("hello", Language::Japanese);
        assert!(prompt.contains("Only return the translation"));
    }

    #[test]
    fn test_generation_policy_constants() {
        // Deterministic output, bounded length
        assert!(TEMPERATURE <= 0.2);
        assert_eq!(MAX_OUTPUT_TOKENS, 1000);
    }
}
