use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, DefaultBodyLimit, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{Map, Value};
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing::debug;

use crate::{classifier, edition::Edition, error::ApiError, ExplainRequest, Explanation};

pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;
const SHARED_DIR: &str = "shared";

#[derive(Debug, Clone)]
pub struct AppState {
    pub edition: Edition,
    pub max_body_bytes: usize,
    pub frontend_root: PathBuf,
}

impl AppState {
    pub fn new(edition: Edition, frontend_root: impl Into<PathBuf>) -> Self {
        Self {
            edition,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            frontend_root: frontend_root.into(),
        }
    }

    pub fn page_dir(&self) -> PathBuf {
        self.frontend_root.join(self.edition.frontend_dir())
    }

    /// Assets used by both editions' pages.
    pub fn shared_dir(&self) -> PathBuf {
        self.frontend_root.join(SHARED_DIR)
    }

    /// Path of the edition's `index.html`, if it is a readable file.
    pub fn check_frontend(&self) -> Result<PathBuf, ApiError> {
        let index = index_file(&self.page_dir());
        let meta = fs::metadata(&index)?;
        if !meta.is_file() {
            return Err(ApiError::Config(format!("{} is not a file", index.display())));
        }
        Ok(index)
    }
}

fn string_field(body: &Map<String, Value>, field: &str) -> Result<Option<String>, ApiError> {
    match body.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(ApiError::InvalidField {
            field: field.to_string(),
        }),
    }
}

/// Parses the explain body regardless of Content-Type.
pub fn parse_request(body: &[u8]) -> Result<ExplainRequest, ApiError> {
    let value: Value = serde_json::from_slice(body)?;
    let Value::Object(map) = value else {
        return Err(ApiError::InvalidBody("expected a JSON object".to_string()));
    };

    Ok(ExplainRequest {
        code: string_field(&map, "code")?,
        language: string_field(&map, "language")?,
        concept: string_field(&map, "concept")?,
        job_role: string_field(&map, "job_role")?,
    })
}

#[axum::debug_handler]
async fn explain(
    state: State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<Explanation>, ApiError> {
    let body = body.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::BodyTooLarge {
                limit: state.max_body_bytes,
            }
        } else {
            ApiError::InvalidBody(rejection.body_text())
        }
    })?;
    let request = parse_request(&body)?;

    let analysis = classifier::analyze(request.code(), request.concept());
    debug!(
        language = request.language(),
        job_role = request.job_role(),
        lines = analysis.num_lines,
        concepts = ?analysis.concepts,
        "explained lab program"
    );

    Ok(Json(classifier::render(&request, &analysis, state.edition)))
}

async fn health() -> &'static str {
    "ok"
}

pub fn router(state: AppState) -> Router {
    let page_dir = state.page_dir();
    let shared_dir = state.shared_dir();
    let max_body_bytes = state.max_body_bytes;
    let shared_state = Arc::new(state);

    Router::new()
        .route_service("/", ServeFile::new(index_file(&page_dir)))
        .route("/api/explain", post(explain))
        .route("/api/health", get(health))
        .nest_service("/shared", ServeDir::new(shared_dir))
        .fallback_service(ServeDir::new(page_dir))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(shared_state)
}

fn index_file(page_dir: &Path) -> PathBuf {
    page_dir.join("index.html")
}
