//! Branding Router

use crate::domain::BrandingSettings;
use crate::presentation::handlers::{self, BrandingAppState};
use axum::{Router, routing::get};
use std::sync::Arc;

pub fn branding_router(settings: BrandingSettings) -> Router {
    let state = BrandingAppState {
        settings: Arc::new(settings),
    };

    Router::new()
        .route("/{screen}", get(handlers::screen_branding))
        .with_state(state)
}
