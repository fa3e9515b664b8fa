use std::time::Duration;

/// Error types for the translation relay
///
/// Every failure is classified at the point of detection and carried as a
/// structured kind, so callers switch on the variant instead of sniffing
/// message strings or status codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    /// Input the user can correct (empty text, unknown target language)
    Validation(String),
    /// Missing or malformed credential or endpoint configuration
    Config(String),
    /// Non-success response from a backend; status 0 means a transport
    /// failure with no HTTP status
    Upstream { status: u16, message: String },
    /// Success envelope with no extractable translation
    EmptyResult,
    /// Client-side gate rejection, carries the remaining wait
    RateLimited(Duration),
    /// Primary and fallback both exhausted; message derives from the primary
    TranslationFailed(String),
}

impl std::fmt::Display for TranslateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TranslateError::Validation(msg) => write!(f, "Validation error: {}", msg),
            TranslateError::Config(msg) => write!(f, "Configuration error: {}", msg),
            TranslateError::Upstream { status: 0, message } => {
                write!(f, "Transport error: {}", message)
            }
            TranslateError::Upstream { status, message } => {
                write!(f, "Upstream error ({}): {}", status, message)
            }
            TranslateError::EmptyResult => write!(f, "No translation received from backend"),
            TranslateError::RateLimited(wait) => {
                write!(f, "Rate limited, retry in {}ms", wait.as_millis())
            }
            TranslateError::TranslationFailed(msg) => write!(f, "Translation failed: {}", msg),
        }
    }
}

impl std::error::Error for TranslateError {}

impl From<reqwest::Error> for TranslateError {
    fn from(err: reqwest::Error) -> Self {
        let status = err.status().map(|s| s.as_u16()).unwrap_or(0);
        // Request URLs can carry a credential in the query string; keep them
        // out of the message.
        TranslateError::Upstream {
            status,
            message: err.without_url().to_string(),
        }
    }
}

impl TranslateError {
    /// User-facing rendition of the error.
    ///
    /// Known upstream statuses map to specific wording; configuration detail
    /// stays in the logs and the user gets a generic message. The remaining
    /// rate-limit wait is reported in whole seconds, rounded up.
    pub fn user_message(&self) -> String {
        match self {
            TranslateError::Validation(msg) => msg.clone(),
            TranslateError::Config(_) => {
                "The translation service is not configured. Please try again later.".to_string()
            }
            TranslateError::Upstream { status: 401, .. } => {
                "The translation service rejected the API credential.".to_string()
            }
            TranslateError::Upstream { status: 403, .. } => {
                "Access to the translation service was denied.".to_string()
            }
            TranslateError::Upstream { status: 429, .. } => {
                "The translation service quota is exhausted. Please wait and retry.".to_string()
            }
            TranslateError::Upstream { message, .. } => {
                format!("Translation failed: {}", message)
            }
            TranslateError::EmptyResult => "No translation received. Please try again.".to_string(),
            TranslateError::RateLimited(wait) => {
                let seconds = wait.as_millis().div_ceil(1000);
                format!("Please wait {} second(s) before translating again", seconds)
            }
            TranslateError::TranslationFailed(msg) => {
                format!(
                    "Translation failed: {}. Please check your internet connection.",
                    msg
                )
            }
        }
    }
}

/// Result type for relay operations
pub type TranslateResult<T> = Result<T, TranslateError>;
