//! Mock translator for testing
//!
//! A deterministic, API-free backend for exercising the orchestration policy
//! without API keys or network access. Carries an attempt counter so tests
//! can assert which backends were actually invoked.
//!
//! # Example
//!
//! ```ignore
//! use glot_mt::{Language, MockMode, MockTranslator, Translator};
//!
//! #[tokio::test]
//! async fn test_translation() {
//!     let mock = MockTranslator::new(MockMode::Suffix);
//!     let result = mock.translate("hello", Language::French).await.unwrap();
//!     assert_eq!(result, "hello_fr");
//! }
//! ```

use crate::error::{TranslateError, TranslateResult};
use crate::language::Language;
use crate::translator::Translator;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Mock translation modes for different scenarios
#[derive(Debug, Clone)]
pub enum MockMode {
    /// Append the target code: "hello" → "hello_fr"
    Suffix,

    /// Predefined mappings for realistic translations;
    /// (text, target) → translation, unmapped pairs fall back to Suffix
    Mappings(HashMap<(String, Language), String>),

    /// Fail every attempt with the given error
    Error(TranslateError),

    /// No-op: return the input unchanged
    NoOp,
}

/// Mock backend that simulates translation scenarios
///
/// Every `translate` call bumps the shared attempt counter, including
/// failing ones, so call-count assertions see exactly what the orchestrator
/// dispatched.
#[derive(Debug, Clone)]
pub struct MockTranslator {
    mode: MockMode,
    /// Optional simulated network delay (in milliseconds)
    delay_ms: u64,
    calls: Arc<AtomicUsize>,
}

impl MockTranslator {
    pub fn new(mode: MockMode) -> Self {
        Self {
            mode,
            delay_ms: 0,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a mock with a simulated network delay
    pub fn with_delay(mode: MockMode, delay_ms: u64) -> Self {
        Self {
            mode,
            delay_ms,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of translate attempts dispatched to this mock.
    ///
    /// Clones share the counter, so a test can keep a handle while the
    /// orchestrator owns the other.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn apply_delay(&self) {
        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }
    }

    fn apply_translation(&self, text: &str, target: Language) -> TranslateResult<String> {
        match &self.mode {
            MockMode::Suffix => Ok(format!("{}_{}", text, target.code())),
            MockMode::Mappings(map) => {
                let key = (text.to_string(), target);
                Ok(map
                    .get(&key)
                    .cloned()
                    .unwrap_or_else(|| format!("{}_{}", text, target.code())))
            }
            MockMode::Error(err) => Err(err.clone()),
            MockMode::NoOp => Ok(text.to_string()),
        }
    }
}

#[async_trait]
impl Translator for MockTranslator {
    async fn translate(&self, text: &str, target: Language) -> TranslateResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.apply_delay().await;
        self.apply_translation(text, target)
    }

    fn provider_name(&self) -> &str {
        "Mock Translator"
    }
}
