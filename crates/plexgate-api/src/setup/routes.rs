//! Route configuration and setup

use crate::handlers;
use crate::proxy;
use crate::state::AppState;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Setup all application routes
///
/// Only the media-parts route carries redirect logic; every other path and
/// method falls through to the streaming relay so the gateway stays
/// URL-compatible with the origin server.
pub fn setup_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::ping::ping))
        .route(
            "/library/parts/{part}/{epoch}/{file}",
            get(handlers::parts::stream_part)
                .put(handlers::parts::stream_part)
                .patch(handlers::parts::stream_part),
        )
        .fallback(proxy::relay_fallback)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
