//! HTTP routes for the site service

mod contact;

use std::sync::Arc;

use axum::http::header::CONTENT_TYPE;
use axum::routing::post;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use teemates_core::Backend;

use crate::state::AppState;

/// Create the router with all routes
pub fn create_router<B: Backend + 'static>(state: Arc<AppState<B>>) -> Router {
    create_router_with_static_path(state, "static")
}

/// Create the router with a custom static file path
pub fn create_router_with_static_path<B: Backend + 'static>(
    state: Arc<AppState<B>>,
    static_path: &str,
) -> Router {
    // The landing page is hosted wherever the CDN of the day puts it;
    // the contract allows any origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route(
            "/api/contact",
            post(contact::submit_contact)
                .options(contact::preflight)
                .fallback(contact::method_not_allowed),
        )
        // Serve the built landing-page assets for everything else
        .fallback_service(ServeDir::new(static_path))
        .layer(cors)
        .with_state(state)
}
