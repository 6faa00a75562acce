use axum::extract::FromRequest;

use crate::errors::AppError;

/// `axum::Json` with body rejections mapped into `AppError`, so malformed
/// payloads get the same `{"detail": ...}` shape as every other error.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
