//! HTTP Handlers

use crate::application::resolve::ResolveBrandingUseCase;
use crate::domain::BrandingSettings;
use crate::error::BrandingResult;
use crate::presentation::dto::BrandingResponse;
use axum::Json;
use axum::extract::{Path, State};
use std::sync::Arc;

#[derive(Clone)]
pub struct BrandingAppState {
    pub settings: Arc<BrandingSettings>,
}

/// GET /api/branding/{screen}
pub async fn screen_branding(
    State(state): State<BrandingAppState>,
    Path(screen): Path<String>,
) -> BrandingResult<Json<BrandingResponse>> {
    let use_case = ResolveBrandingUseCase::new(state.settings.clone());
    let branding = use_case.execute(&screen)?;

    Ok(Json(BrandingResponse::new(state.settings.template(), branding)))
}
