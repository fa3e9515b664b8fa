//! Proxy service for the glot translation relay
//!
//! Holds the generative-API credential server-side so clients never see it.
//! One route: `POST /api/translate` takes `{ text, targetLanguage }` and
//! answers `{ translatedText }`, relaying the upstream status code and
//! message on failure. Preflight `OPTIONS` answers 200 with no body, and
//! permissive CORS headers ride on every response, errors included.

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use glot_mt::{GeminiProvider, Language, TranslateError, Translator};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslateRequest {
    text: Option<String>,
    target_language: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TranslateResponse {
    translated_text: String,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

/// Upstream backend, resolved once at startup.
///
/// A missing or malformed credential is kept as its failure message so every
/// request answers with a configuration error before anything goes upstream.
#[derive(Clone)]
enum Backend {
    Ready(Arc<dyn Translator>),
    Misconfigured(String),
}

#[derive(Clone)]
struct AppState {
    backend: Backend,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("info".parse().unwrap()),
        )
        .init();

    let backend = resolve_backend(std::env::var("GEMINI_API_KEY").ok());
    if let Backend::Misconfigured(reason) = &backend {
        warn!("Starting without a usable backend: {}", reason);
    }

    let app = app(AppState { backend });

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8787);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("glot proxy listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

fn app(state: AppState) -> Router {
    Router::new()
        .route("/api/translate", post(translate).options(preflight))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn resolve_backend(api_key: Option<String>) -> Backend {
    let Some(key) = api_key else {
        return Backend::Misconfigured("API key not configured".to_string());
    };
    match GeminiProvider::new(key) {
        Ok(provider) => Backend::Ready(Arc::new(provider)),
        Err(TranslateError::Config(msg)) => Backend::Misconfigured(msg),
        Err(e) => Backend::Misconfigured(e.to_string()),
    }
}

async fn preflight() -> StatusCode {
    StatusCode::OK
}

async fn translate(State(state): State<AppState>, body: Bytes) -> Response {
    let request: TranslateRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(_) => return error_response(StatusCode::BAD_REQUEST, "Invalid JSON", None),
    };

    let text = request.text.unwrap_or_default();
    let target_input = request.target_language.unwrap_or_default();
    if text.trim().is_empty() || target_input.trim().is_empty() {
        return error_response(
            StatusCode::BAD_REQUEST,
            "Text and target language are required",
            None,
        );
    }

    let target = match target_input.parse::<Language>() {
        Ok(language) => language,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, &e.user_message(), None),
    };

    // Credential guard runs before any upstream dispatch
    let translator = match &state.backend {
        Backend::Ready(translator) => translator.clone(),
        Backend::Misconfigured(reason) => {
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, reason, None);
        }
    };

    match translator.translate(&text, target).await {
        Ok(translated) => (
            StatusCode::OK,
            Json(TranslateResponse {
                translated_text: translated,
            }),
        )
            .into_response(),
        Err(TranslateError::Upstream { status, message }) => {
            let code = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
            error_response(code, "Gemini API error", Some(message))
        }
        Err(TranslateError::EmptyResult) => error_response(
            StatusCode::BAD_GATEWAY,
            "No translation received from Gemini",
            None,
        ),
        Err(e) => {
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Translation failed",
                Some(e.to_string()),
            )
        }
    }
}

fn error_response(status: StatusCode, error: &str, details: Option<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
            details,
        }),
    )
        .into_response()
}
