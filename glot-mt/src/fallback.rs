//! Primary/fallback orchestration
//!
//! Tries the primary backend once; on any failure, tries the secondary once.
//! The error surfaced when both fail derives from the primary's failure:
//! the primary is the source of truth for user-facing diagnostics, and the
//! secondary's failure only goes to the logs.

use crate::error::{TranslateError, TranslateResult};
use crate::language::Language;
use crate::translator::Translator;
use std::sync::Arc;
use tracing::warn;

/// Orchestrator over a primary and a secondary backend
#[derive(Clone)]
pub struct FallbackTranslator {
    primary: Arc<dyn Translator>,
    secondary: Arc<dyn Translator>,
}

impl FallbackTranslator {
    pub fn new(primary: Arc<dyn Translator>, secondary: Arc<dyn Translator>) -> Self {
        Self { primary, secondary }
    }

    /// Translate via the primary, falling back to the secondary.
    ///
    /// The secondary is not invoked when the primary succeeds. Neither
    /// backend is retried.
    pub async fn translate(&self, text: &str, target: Language) -> TranslateResult<String> {
        let primary_err = match self.primary.translate(text, target).await {
            Ok(translated) => return Ok(translated),
            Err(err) => err,
        };
        warn!(
            "Primary translator {} failed: {}",
            self.primary.provider_name(),
            primary_err
        );

        match self.secondary.translate(text, target).await {
            Ok(translated) => Ok(translated),
            Err(secondary_err) => {
                // Logged but never shown; the surfaced message is the primary's.
                warn!(
                    "Fallback translator {} failed: {}",
                    self.secondary.provider_name(),
                    secondary_err
                );
                Err(TranslateError::TranslationFailed(primary_err.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockMode, MockTranslator};
    use std::collections::HashMap;

    fn upstream(status: u16, message: &str) -> TranslateError {
        TranslateError::Upstream {
            status,
            message: message.to_string(),
        }
    }

    #[tokio::test]
    async fn test_primary_success_skips_fallback() {
        let primary = MockTranslator::new(MockMode::Suffix);
        let secondary = MockTranslator::new(MockMode::Suffix);
        let orchestrator =
            FallbackTranslator::new(Arc::new(primary.clone()), Arc::new(secondary.clone()));

        let result = orchestrator
            .translate("hello", Language::French)
            .await
            .unwrap();
        assert_eq!(result, "hello_fr");
        assert_eq!(primary.call_count(), 1);
        assert_eq!(secondary.call_count(), 0);
    }

    #[tokio::test]
    async fn test_primary_failure_uses_fallback_result() {
        let primary = MockTranslator::new(MockMode::Error(upstream(503, "backend down")));
        let mut map = HashMap::new();
        map.insert(
            ("hello".to_string(), Language::French),
            "bonjour".to_string(),
        );
        let secondary = MockTranslator::new(MockMode::Mappings(map));
        let orchestrator =
            FallbackTranslator::new(Arc::new(primary.clone()), Arc::new(secondary.clone()));

        let result = orchestrator
            .translate("hello", Language::French)
            .await
            .unwrap();
        assert_eq!(result, "bonjour");
        assert_eq!(primary.call_count(), 1);
        assert_eq!(secondary.call_count(), 1);
    }

    #[tokio::test]
    async fn test_both_failing_surfaces_primary_message() {
        let primary = MockTranslator::new(MockMode::Error(upstream(429, "quota exceeded")));
        let secondary = MockTranslator::new(MockMode::Error(upstream(500, "service unavailable")));
        let orchestrator =
            FallbackTranslator::new(Arc::new(primary.clone()), Arc::new(secondary.clone()));

        let err = orchestrator
            .translate("hello", Language::French)
            .await
            .unwrap_err();
        match err {
            TranslateError::TranslationFailed(msg) => {
                assert!(msg.contains("quota exceeded"));
                assert!(!msg.contains("service unavailable"));
            }
            other => panic!("Expected TranslationFailed, got {:?}", other),
        }
        assert_eq!(primary.call_count(), 1);
        assert_eq!(secondary.call_count(), 1);
    }

    #[tokio::test]
    async fn test_no_retry_of_either_backend() {
        let primary = MockTranslator::new(MockMode::Error(upstream(500, "down")));
        let secondary = MockTranslator::new(MockMode::Error(upstream(500, "also down")));
        let orchestrator =
            FallbackTranslator::new(Arc::new(primary.clone()), Arc::new(secondary.clone()));

        let _ = orchestrator.translate("hello", Language::French).await;
        assert_eq!(primary.call_count(), 1);
        assert_eq!(secondary.call_count(), 1);
    }
}
