use axum::{
    Router,
    http::{HeaderValue, Method, header},
    middleware,
};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use usermgmt_config::CorsConfig;

use crate::logging::logging_middleware;
use crate::middleware::{auth::require_bearer, exception::exception_layer};
use crate::state::AppState;

pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
}

/// Wraps `router` in the request chain. `ServiceBuilder` layers run top to
/// bottom, so the first one listed sees the request first.
pub fn apply_pipeline(router: Router, state: &AppState) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(exception_layer())
            .layer(cors_layer(&state.cors_config))
            .layer(middleware::from_fn_with_state(
                state.auth_config.clone(),
                require_bearer,
            ))
            .layer(middleware::from_fn(logging_middleware)),
    )
}
