//! HTTP Handlers

use crate::application::config::PaginationConfig;
use crate::application::window_view::WindowViewUseCase;
use crate::error::PaginationResult;
use crate::presentation::dto::{WindowQuery, WindowResponse};
use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use std::sync::Arc;

/// Shared state for pagination handlers
#[derive(Clone)]
pub struct PaginationAppState {
    pub config: Arc<PaginationConfig>,
}

/// GET /api/pagination/window
pub async fn window(
    State(state): State<PaginationAppState>,
    query: Result<Query<WindowQuery>, QueryRejection>,
) -> PaginationResult<Json<WindowResponse>> {
    let Query(query) = query?;

    let use_case = WindowViewUseCase::new(state.config.clone());
    let output = use_case.execute(query.into())?;

    Ok(Json(output.into()))
}
