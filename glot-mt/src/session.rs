//! Per-session translate flow
//!
//! Front door for one client session: validate the input, pass the rate
//! gate, then hand off to the orchestrator. The session owns its rate-limit
//! state, and the caller keeps one request in flight at a time, so no
//! locking is involved.

use crate::error::{TranslateError, TranslateResult};
use crate::fallback::FallbackTranslator;
use crate::language::Language;
use crate::rate_limit::RateLimiter;
use std::time::Instant;

/// One client session: input validation, rate gate, orchestration
pub struct Session {
    translator: FallbackTranslator,
    limiter: RateLimiter,
}

impl Session {
    pub fn new(translator: FallbackTranslator) -> Self {
        Self {
            translator,
            limiter: RateLimiter::default(),
        }
    }

    /// Replace the default rate limiter (tests, custom policies)
    pub fn with_limiter(translator: FallbackTranslator, limiter: RateLimiter) -> Self {
        Self { translator, limiter }
    }

    /// Validate, gate, and translate one submission.
    ///
    /// Empty or whitespace-only text and rate-limit denials are rejected
    /// before anything is dispatched to a backend; a denied submission does
    /// not consume the rate window.
    pub async fn translate(&mut self, text: &str, target: Language) -> TranslateResult<String> {
        self.translate_at(Instant::now(), text, target).await
    }

    /// Same as [`Session::translate`] with an explicit clock value
    pub async fn translate_at(
        &mut self,
        now: Instant,
        text: &str,
        target: Language,
    ) -> TranslateResult<String> {
        if text.trim().is_empty() {
            return Err(TranslateError::Validation(
                "Please enter text to translate".to_string(),
            ));
        }

        self.limiter
            .check_and_record(now)
            .map_err(TranslateError::RateLimited)?;

        self.translator.translate(text, target).await
    }
}
