//! Pagination Router

use crate::application::config::PaginationConfig;
use crate::presentation::handlers::{self, PaginationAppState};
use axum::{Router, routing::get};
use std::sync::Arc;

/// Create the pagination router
pub fn pagination_router(config: PaginationConfig) -> Router {
    let state = PaginationAppState {
        config: Arc::new(config),
    };

    Router::new()
        .route("/window", get(handlers::window))
        .with_state(state)
}
