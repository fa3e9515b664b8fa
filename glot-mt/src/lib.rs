//! Translation relay core
//!
//! Orchestrates interchangeable translation backends behind a uniform
//! [`Translator`] contract: a generative-language API, a dictionary REST
//! service, a chat-completion API, and a credential-holding proxy service.
//! A [`FallbackTranslator`] pairs a primary backend with a fallback, and a
//! [`Session`] puts input validation and a client-side rate gate in front
//! of it.
//!
//! # Workflow Example
//!
//! ```ignore
//! use glot_mt::{FallbackTranslator, GeminiProvider, Language, LibreTranslateProvider, Session};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1. Primary backend (credential from the environment)
//!     let primary = Arc::new(GeminiProvider::from_env()?);
//!
//!     // 2. Dictionary-service fallback
//!     let fallback = Arc::new(LibreTranslateProvider::from_env()?);
//!
//!     // 3. One session per client: validation + rate gate + orchestration
//!     let mut session = Session::new(FallbackTranslator::new(primary, fallback));
//!     let translated = session.translate("How are you?", Language::French).await?;
//!
//!     println!("{}", translated);
//!     Ok(())
//! }
//! ```

pub mod chat_completion;
pub mod error;
pub mod fallback;
pub mod gemini;
pub mod language;
pub mod libre_translate;
pub mod mock;
pub mod proxy;
pub mod rate_limit;
pub mod session;
pub mod translator;


// Re-export main types for convenient access
pub use chat_completion::ChatCompletionProvider;
pub use error::{TranslateError, TranslateResult};
pub use fallback::FallbackTranslator;
pub use gemini::GeminiProvider;
pub use language::Language;
pub use libre_translate::LibreTranslateProvider;
pub use mock::{MockMode, MockTranslator};
pub use proxy::ProxyProvider;
pub use rate_limit::{MIN_INTERVAL, RateLimiter};
pub use session::Session;
pub use translator::{MAX_OUTPUT_TOKENS, TEMPERATURE, Translator, build_prompt};
