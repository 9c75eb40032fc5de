use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use super::{handlers, middleware::metrics_middleware, tickets};
use crate::state::AppState;

/// Largest form body the ticket routes will read.
pub const MAX_FORM_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Builds the application router.
///
/// The kiosk form posts to `/ticketApi/`; everything that is not an API
/// route falls through to the static file root.
pub fn create_router(state: Arc<AppState>) -> Router {
    let static_root = state.config().static_files.root.clone();

    let ticket_routes = Router::new()
        .route("/ticketApi/", post(tickets::submit_ticket))
        .route("/ticketApi", post(tickets::submit_ticket))
        .layer(DefaultBodyLimit::max(MAX_FORM_BODY_BYTES));

    Router::new()
        .merge(ticket_routes)
        .route("/health", get(handlers::health))
        .route("/config", get(handlers::get_config))
        .route("/metrics", get(handlers::metrics))
        .with_state(state)
        .fallback_service(ServeDir::new(static_root))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
}
