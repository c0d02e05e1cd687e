//! Content analyzer HTTP server.
//!
//! Exposes the analyzer over a JSON API for the admin dashboard's Content
//! Tester form.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `POST` | `/api/test` | Analyze submitted content |
//! | `GET`  | `/api/keywords` | Return the loaded keyword catalog |
//! | `GET`  | `/health` | Health check (returns version) |
//!
//! # Request
//!
//! ```json
//! { "content": "…", "targetKeywords": ["storm damage"], "source": "draft" }
//! ```
//!
//! `targetKeywords` may also be `"auto"` (use the catalog) or a
//! comma-separated string. A missing or `null` value means `"auto"`;
//! `source` defaults to `"draft"`.
//!
//! # Responses
//!
//! ```json
//! { "success": true, "seoScore": 72, "readabilityGrade": "B+",
//!   "keywordDensity": 1.8, "detectedKeywords": ["storm damage"],
//!   "suggestions": ["…"] }
//! ```
//!
//! Failures carry no analysis fields:
//!
//! ```json
//! { "success": false, "error": "content must not be empty" }
//! ```
//!
//! Empty content and malformed payloads are `400`.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use claims_content_core::{AnalysisResult, Analyzer, ContentInput, KeywordCatalog, Source};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::keywords::{load_catalog, TargetKeywords};

/// Shared application state passed to all route handlers.
///
/// Built once in [`run_server`]; handlers only read it.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub catalog: Arc<KeywordCatalog>,
    pub analyzer: Arc<Analyzer>,
}

impl AppState {
    pub fn new(config: Config, catalog: KeywordCatalog) -> Self {
        let analyzer = Analyzer::new(config.analysis.clone());
        Self {
            config: Arc::new(config),
            catalog: Arc::new(catalog),
            analyzer: Arc::new(analyzer),
        }
    }
}

/// Starts the HTTP server on `[server].bind` and runs until the process
/// is terminated.
pub async fn run_server(config: &Config) -> anyhow::Result<()> {
    let catalog = load_catalog(config)?;
    let state = AppState::new(config.clone(), catalog);
    let bind_addr = state.config.server.bind.clone();

    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("Content tester listening on http://{}", bind_addr);
    println!("Content tester listening on http://{}", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/test", post(handle_test_content))
        .route("/api/keywords", get(handle_keywords))
        .route("/health", get(handle_health))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============ Error response ============

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    error: String,
}

/// Error that converts into a `{ "success": false, "error": … }` response.
struct AppError {
    status: StatusCode,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            success: false,
            error: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

fn bad_request(message: impl Into<String>) -> AppError {
    AppError {
        status: StatusCode::BAD_REQUEST,
        message: message.into(),
    }
}

// ============ POST /api/test ============

/// JSON request body for `POST /api/test`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestContentRequest {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub target_keywords: Option<TargetKeywords>,
    #[serde(default)]
    pub source: Source,
}

#[derive(Serialize)]
struct TestContentResponse {
    success: bool,
    #[serde(flatten)]
    result: AnalysisResult,
}

async fn handle_test_content(
    State(state): State<AppState>,
    payload: Result<Json<TestContentRequest>, JsonRejection>,
) -> Result<Json<TestContentResponse>, AppError> {
    let Json(request) = payload.map_err(|e| bad_request(e.body_text()))?;

    let keywords = request
        .target_keywords
        .unwrap_or_default()
        .resolve(&state.catalog);
    let input = ContentInput::new(request.content, keywords).with_source(request.source);

    let result = state.analyzer.analyze(&input).map_err(|e| {
        tracing::debug!("Rejected analysis request: {}", e);
        bad_request(e.to_string())
    })?;

    Ok(Json(TestContentResponse {
        success: true,
        result,
    }))
}

// ============ GET /api/keywords ============

async fn handle_keywords(State(state): State<AppState>) -> Json<KeywordCatalog> {
    Json(state.catalog.as_ref().clone())
}

// ============ GET /health ============

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
