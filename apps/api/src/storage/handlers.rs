//! Axum route handlers for saving and downloading resumes.

use axum::{
    extract::{Path, State},
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::AppError;
use crate::extract::AppJson;
use crate::state::AppState;
use crate::storage::filename::content_disposition;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SaveResumeRequest {
    /// Must be a JSON object; arrays and scalars are rejected at extraction.
    pub resume: Map<String, Value>,
    /// Base name; the stored name gets a timestamp and `.json` appended.
    pub filename: String,
}

#[derive(Debug, Serialize)]
pub struct SaveResumeResponse {
    pub message: String,
    pub filename: String,
    pub download_url: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /save-resume
pub async fn handle_save_resume(
    State(state): State<AppState>,
    AppJson(request): AppJson<SaveResumeRequest>,
) -> Result<Json<SaveResumeResponse>, AppError> {
    let saved = state.store.save(&request.filename, &request.resume).await?;

    Ok(Json(SaveResumeResponse {
        message: "Resume saved successfully".to_string(),
        download_url: format!("/download-resume/{}", saved.name),
        filename: saved.name,
    }))
}

/// GET /download-resume/:filename
///
/// Streams the stored file back with `filename` as the suggested download name.
pub async fn handle_download_resume(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<Response, AppError> {
    let body = state.store.read(&filename).await?;

    let disposition = HeaderValue::from_str(&content_disposition(&filename))
        .map_err(|e| AppError::Internal(e.into()))?;

    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static("application/json")),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        Bytes::from(body),
    )
        .into_response())
}
