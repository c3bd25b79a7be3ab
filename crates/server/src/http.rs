//! HTTP endpoints
//!
//! REST API for the writing assistant. Handlers are thin: they parse the
//! request, call into the pipeline or a collaborator, and map errors to
//! status codes. Input-coercion failures become 400 with the offending
//! value echoed back; collaborator failures become 500 with the underlying
//! message attached.

use axum::{
    extract::{Json, State},
    http::{HeaderValue, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use scribe_core::{CorrectionReport, Error, Generation, SummaryResult};

use crate::state::AppState;

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let config = state.config.read();
    let cors_layer = build_cors_layer(&config.server.cors_origins, config.server.cors_enabled);
    drop(config);

    Router::new()
        .route("/fix_grammar", post(fix_grammar))
        .route("/summarize", post(summarize))
        .route("/generate", post(generate))
        .route("/analyze_text", post(analyze_text))
        .route("/rewrite", post(rewrite))
        .route("/translate", post(translate))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .with_state(state)
}

/// Build the CORS layer from configured origins.
///
/// - CORS disabled: permissive (development only)
/// - No origins configured: localhost:3000 default
/// - Otherwise the configured origins, invalid entries skipped with a warning
fn build_cors_layer(origins: &[String], enabled: bool) -> CorsLayer {
    if !enabled {
        tracing::warn!("CORS is disabled - allowing all origins (NOT FOR PRODUCTION)");
        return CorsLayer::permissive();
    }

    let parsed_origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| {
            let parsed = origin.parse::<HeaderValue>().ok();
            if parsed.is_none() {
                tracing::warn!(origin, "invalid CORS origin, skipping");
            }
            parsed
        })
        .collect();

    if parsed_origins.is_empty() {
        tracing::info!("no CORS origins configured, defaulting to localhost:3000");
        return CorsLayer::new()
            .allow_origin(
                "http://localhost:3000"
                    .parse::<HeaderValue>()
                    .expect("static origin parses"),
            )
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(Any);
    }

    tracing::info!(origins = parsed_origins.len(), "CORS configured");
    CorsLayer::new()
        .allow_origin(parsed_origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}

/// Map a pipeline error to an HTTP response
fn error_response(err: Error) -> (StatusCode, Json<serde_json::Value>) {
    match err {
        Error::InputCoercion { value } => (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": format!("Could not convert input to string: {}", value),
                "original_text": value,
            })),
        ),
        Error::Collaborator(message) => {
            tracing::error!(%message, "collaborator failure");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": message })),
            )
        }
    }
}

/// Request carrying a `text` field that may be any JSON value; the
/// pipeline decides whether it can be coerced. A missing field reads as
/// the empty string, not JSON null.
#[derive(Debug, Deserialize)]
struct CorrectionRequest {
    #[serde(default = "default_text_value")]
    text: serde_json::Value,
}

fn default_text_value() -> serde_json::Value {
    serde_json::Value::String(String::new())
}

/// Two-stage correction endpoint
async fn fix_grammar(
    State(state): State<AppState>,
    Json(request): Json<CorrectionRequest>,
) -> Result<Json<CorrectionReport>, (StatusCode, Json<serde_json::Value>)> {
    state
        .pipeline
        .correct_value(&request.text)
        .await
        .map(Json)
        .map_err(error_response)
}

#[derive(Debug, Deserialize)]
struct TextRequest {
    #[serde(default)]
    text: String,
}

/// Response for the summarize endpoint
#[derive(Debug, Serialize)]
struct SummarizeResponse {
    summary: String,
    model: String,
    processing: ProcessingStats,
}

#[derive(Debug, Serialize)]
struct ProcessingStats {
    chunks_processed: usize,
    compression_ratio: String,
}

/// Chunked document summarization endpoint
async fn summarize(
    State(state): State<AppState>,
    Json(request): Json<TextRequest>,
) -> Result<Json<SummarizeResponse>, (StatusCode, Json<serde_json::Value>)> {
    let SummaryResult {
        summary,
        chunks_processed,
        compression_ratio,
    } = state
        .summarizer
        .summarize(&request.text)
        .await
        .map_err(error_response)?;

    Ok(Json(SummarizeResponse {
        summary,
        model: state.summarization_model.clone(),
        processing: ProcessingStats {
            chunks_processed,
            compression_ratio,
        },
    }))
}

#[derive(Debug, Deserialize)]
struct GenerateRequest {
    #[serde(default)]
    prompt: String,
}

/// Writing-copilot continuation endpoint (hosted LLM passthrough)
async fn generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<Generation>, (StatusCode, Json<serde_json::Value>)> {
    state
        .generator
        .generate(&request.prompt)
        .await
        .map(Json)
        .map_err(error_response)
}

/// Suggestion analysis endpoint.
///
/// Empty input is rejected up front; collaborator failures still return a
/// body with an empty suggestions array so clients always get the field.
async fn analyze_text(
    State(state): State<AppState>,
    Json(request): Json<TextRequest>,
) -> impl IntoResponse {
    let text = request.text.trim().to_string();
    if text.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "suggestions": [],
                "error": "No text provided for analysis",
            })),
        );
    }

    match state.generator.analyze(&text).await {
        Ok(suggestions) => (StatusCode::OK, Json(json!({ "suggestions": suggestions }))),
        Err(err) => {
            tracing::error!(error = %err, "text analysis failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "suggestions": [],
                    "error": err.to_string(),
                })),
            )
        }
    }
}

/// Paraphrase endpoint
async fn rewrite(
    State(state): State<AppState>,
    Json(request): Json<TextRequest>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)> {
    let rewritten = state
        .paraphraser
        .paraphrase(&request.text)
        .await
        .map_err(error_response)?;
    Ok(Json(json!({ "rewritten_text": rewritten })))
}

/// Translation endpoint
async fn translate(
    State(state): State<AppState>,
    Json(request): Json<TextRequest>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)> {
    let translated = state
        .translator
        .translate(&request.text)
        .await
        .map_err(error_response)?;
    Ok(Json(json!({ "translated_text": translated })))
}

/// Health check
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "service": "scribe",
    }))
}
