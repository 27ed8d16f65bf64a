//! REST API Server for the wealth advisor
//!
//! Exposes the advisors via HTTP endpoints
//! and serves the static frontend.

use axum::{
    body::Body,
    extract::State,
    http::{header, Request, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::{error, info, info_span};
use uuid::Uuid;

use crate::advisor::Advisor;
use crate::config::AppConfig;
use crate::models::{AdviceResult, FinancialProfile, QuickInput, QuickResult};
use crate::speech::{AudioArtifact, SpeechSynthesizer};

/// =============================
/// Response Wrapper
/// =============================

/// Envelope for failures; successful advice keeps its bare shape
/// so existing clients can read it unchanged.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    pub data: Option<serde_json::Value>,
    pub error: Option<String>,
    pub timestamp: String,
}

impl ApiResponse {
    pub fn error<T: Serialize>(message: String, data: Option<T>) -> Self {
        Self {
            success: false,
            data: data.and_then(|d| serde_json::to_value(d).ok()),
            error: Some(message),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// =============================
/// API State
/// =============================

/// Shared across requests; everything in it is immutable
#[derive(Clone)]
pub struct ApiState {
    pub advisor: Arc<Advisor>,
    pub synthesizer: Arc<dyn SpeechSynthesizer>,
    pub language: Arc<str>,
}

impl ApiState {
    pub fn new(synthesizer: Arc<dyn SpeechSynthesizer>, language: &str) -> Self {
        Self {
            advisor: Arc::new(Advisor::new()),
            synthesizer,
            language: Arc::from(language),
        }
    }
}

/// =============================
/// Health Endpoint
/// =============================

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// =============================
/// Advice Endpoints
/// =============================

async fn get_advice(
    State(state): State<ApiState>,
    Json(profile): Json<FinancialProfile>,
) -> Json<AdviceResult> {
    info!(context = %profile.context, "Received advice request");
    Json(state.advisor.advise(&profile))
}

async fn get_advice_audio(
    State(state): State<ApiState>,
    Json(profile): Json<FinancialProfile>,
) -> Response {
    info!(context = %profile.context, "Received audio advice request");

    let advice = state.advisor.advise(&profile);
    let narration = advice.narration();

    match state
        .synthesizer
        .synthesize(&narration, &state.language)
        .await
    {
        Ok(artifact) => {
            info!(
                backend = state.synthesizer.name(),
                bytes = artifact.len(),
                "Advice audio synthesized"
            );
            audio_response(artifact)
        }
        Err(e) => {
            error!(backend = state.synthesizer.name(), "Speech synthesis failed: {}", e);
            (
                StatusCode::BAD_GATEWAY,
                Json(ApiResponse::error(
                    format!("Speech synthesis failed: {}", e),
                    Some(advice),
                )),
            )
                .into_response()
        }
    }
}

/// Hand the artifact to the response body; it is dropped once written
fn audio_response(artifact: AudioArtifact) -> Response {
    (
        [
            (header::CONTENT_TYPE, artifact.media_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", artifact.file_name),
            ),
        ],
        artifact.bytes,
    )
        .into_response()
}

async fn recommend(Json(input): Json<QuickInput>) -> Json<QuickResult> {
    info!("Received quick recommendation request");
    Json(input.recommend())
}

/// =============================
/// Router
/// =============================

pub fn create_router(state: ApiState, frontend_dir: impl AsRef<Path>) -> Router {
    let frontend_dir = frontend_dir.as_ref();
    let static_files = ServeDir::new(frontend_dir).append_index_html_on_directories(true);

    let trace = TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
        info_span!(
            "http_request",
            method = %request.method(),
            uri = %request.uri(),
            request_id = %Uuid::new_v4(),
        )
    });

    Router::new()
        .route("/health", get(health))
        .route("/get-advice", post(get_advice))
        .route("/get-advice-audio", post(get_advice_audio))
        .route("/recommend", post(recommend))
        .route_service(
            "/forgot-password",
            ServeFile::new(frontend_dir.join("forgotpassword.html")),
        )
        .fallback_service(static_files)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(trace)
                .layer(CorsLayer::permissive()),
        )
}

/// =============================
/// Server Startup
/// =============================

pub async fn start_server(
    config: &AppConfig,
    synthesizer: Arc<dyn SpeechSynthesizer>,
) -> crate::Result<()> {
    let state = ApiState::new(synthesizer, &config.tts_language);
    let router = create_router(state, &config.frontend_dir);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("API Server listening on http://{}", addr);
    info!(frontend_dir = %config.frontend_dir.display(), "Serving static frontend");

    axum::serve(listener, router).await?;

    Ok(())
}

//
// ================= Tests =================
//
