use axum::{
    extract::Request,
    middleware,
    routing::{get, post},
    Router,
};
use log::{info, warn};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::error::Result;
use crate::handlers::{
    rsvp_handlers::{get_form_schema, health, submit_rsvp},
    AppState,
};
use wedding_rsvp_shared::config::RsvpConfig;
use wedding_rsvp_shared::forward::{http::HttpFormForwarder, FormForwarder};
use wedding_rsvp_shared::submit::RsvpSubmitter;

/// Creates a router from the environment configuration and the HTTP forwarder
pub async fn create_router() -> Result<Router> {
    info!("Creating router with HTTP form forwarder");

    let config = RsvpConfig::from_env()?;
    info!(
        "RSVP config loaded: action_url={}, required={:?}",
        config.form_action_url, config.required
    );

    let forwarder = Arc::new(HttpFormForwarder::new(&config)?);

    // Check if we should remove the base path prefix
    let remove_base_path = std::env::var("REMOVE_BASE_PATH")
        .map(|v| v.to_lowercase() == "true")
        .unwrap_or(false);

    // If REMOVE_BASE_PATH is set to true, don't add the /Prod prefix
    let prefix = if remove_base_path { "" } else { "/Prod" };
    info!("Using API route prefix: {}", prefix);

    Ok(create_router_with_forwarder(forwarder, config, prefix))
}

/// Creates a router with a given forwarder implementation
pub fn create_router_with_forwarder<F>(forwarder: Arc<F>, config: RsvpConfig, prefix: &str) -> Router
where
    F: FormForwarder + 'static,
{
    info!("Setting up API routes with prefix: '{}'", prefix);

    let state = AppState {
        submitter: RsvpSubmitter::new(&config, forwarder),
        config: Arc::new(config),
    };

    // The invitation page is served from a different origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Logging middleware to trace all requests
    async fn logging_middleware(
        req: Request,
        next: axum::middleware::Next,
    ) -> impl axum::response::IntoResponse {
        info!(
            "Router received request: method={}, uri={}",
            req.method(),
            req.uri()
        );
        next.run(req).await
    }

    let api_routes = Router::new()
        .route("/rsvp", post(submit_rsvp))
        .route("/rsvp/form", get(get_form_schema))
        .route("/health", get(health))
        .with_state(state);

    let router = if prefix.is_empty() {
        // For tests or when no prefix is needed, don't nest the routes
        api_routes
            .layer(cors)
            .layer(middleware::from_fn(logging_middleware))
    } else {
        Router::new()
            .nest(prefix, api_routes)
            .layer(cors)
            .layer(middleware::from_fn(logging_middleware))
    };

    // Add a fallback handler for 404s
    router.fallback(|req: Request| async move {
        warn!("No route matched for: {} {}", req.method(), req.uri());
        (
            axum::http::StatusCode::NOT_FOUND,
            "The requested resource was not found".to_string(),
        )
    })
}
