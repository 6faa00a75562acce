pub mod health;

use axum::{
    http::{header, HeaderValue},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

use crate::config::CorsConfig;
use crate::enhance::handlers::handle_enhance;
use crate::state::AppState;
use crate::storage::handlers::{handle_download_resume, handle_save_resume};

pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors);

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/ai-enhance", post(handle_enhance))
        .route("/save-resume", post(handle_save_resume))
        .route("/download-resume/:filename", get(handle_download_resume))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Builds the CORS layer from configuration.
///
/// Browsers refuse wildcards on credentialed requests, so "any origin" with
/// credentials mirrors the request's origin, methods and headers instead.
fn cors_layer(cors: &CorsConfig) -> CorsLayer {
    let origin = match &cors.allowed_origins {
        None if cors.allow_credentials => AllowOrigin::mirror_request(),
        None => AllowOrigin::any(),
        Some(origins) => AllowOrigin::list(origins.iter().filter_map(|o| {
            HeaderValue::from_str(o)
                .map_err(|_| warn!(origin = %o, "Ignoring invalid CORS origin"))
                .ok()
        })),
    };

    let layer = CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(cors.allow_credentials)
        .expose_headers([header::CONTENT_DISPOSITION]);

    if cors.allow_credentials {
        layer
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request())
    } else {
        layer.allow_methods(Any).allow_headers(Any)
    }
}
