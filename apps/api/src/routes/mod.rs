pub mod health;

use axum::{
    http::{header, HeaderValue, Method},
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::warn;

use crate::auth::require_auth;
use crate::enhance::handlers as enhance;
use crate::extraction::handlers as extraction;
use crate::resumes::handlers as resumes;
use crate::state::AppState;
use crate::users::handlers as users;

pub fn build_router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/api/ai/upload-resume", post(extraction::handle_upload_resume))
        .route("/api/users/data", get(users::handle_get_user))
        .route("/api/users/resumes", get(users::handle_get_user_resumes))
        .route("/api/resumes/:id", get(resumes::handle_get_resume))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    let cors = cors_layer(&state.config.allowed_origins);

    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route("/api/users/register", post(users::handle_register))
        .route("/api/users/login", post(users::handle_login))
        .route("/api/ai/enhance-pro-sum", post(enhance::handle_enhance_summary))
        .route("/api/ai/enhance-job-desc", post(enhance::handle_enhance_job_desc))
        .merge(protected)
        .layer(cors)
        .with_state(state)
}

/// Only the configured origins get CORS headers; credentials are allowed.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {origin}");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
}
