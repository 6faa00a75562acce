//! Axum route handler for section enhancement.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::extract::AppJson;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct EnhanceRequest {
    pub section: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct EnhanceResponse {
    pub enhanced: String,
}

/// POST /ai-enhance
pub async fn handle_enhance(
    State(state): State<AppState>,
    AppJson(request): AppJson<EnhanceRequest>,
) -> Result<Json<EnhanceResponse>, AppError> {
    debug!(section = %request.section, "Enhancing section");

    let enhanced = state
        .enhancer
        .enhance(&request.section, &request.content)
        .await?;

    Ok(Json(EnhanceResponse { enhanced }))
}
