//! Window View Use Case
//!
//! Everything a paginated list needs to draw its controls for one position:
//! the page window, the navigation buttons and the offset query for the
//! current page.

use crate::application::config::PaginationConfig;
use crate::domain::{NavControls, PageQuery, PageWindowRequest, PageWindowResult, compute_window};
use crate::error::{PaginationError, PaginationResult};
use std::sync::Arc;

/// Input DTO for the window view
#[derive(Debug, Clone, Copy)]
pub struct WindowViewInput {
    pub current_page: i64,
    pub total_items: u64,
    pub items_per_page: Option<u64>,
    pub max_pages_to_show: Option<u64>,
}

/// Output DTO for the window view
#[derive(Debug, Clone)]
pub struct WindowViewOutput {
    pub window: PageWindowResult,
    pub controls: NavControls,
    pub query: PageQuery,
}

pub struct WindowViewUseCase {
    config: Arc<PaginationConfig>,
}

impl WindowViewUseCase {
    pub fn new(config: Arc<PaginationConfig>) -> Self {
        Self { config }
    }

    pub fn execute(&self, input: WindowViewInput) -> PaginationResult<WindowViewOutput> {
        let items_per_page = checked(
            "itemsPerPage",
            input
                .items_per_page
                .unwrap_or(self.config.default_items_per_page),
            self.config.max_items_per_page,
        )?;
        let max_pages_to_show = checked(
            "maxPagesToShow",
            input
                .max_pages_to_show
                .unwrap_or(self.config.default_max_pages_to_show),
            self.config.max_pages_to_show_limit,
        )?;

        let window = compute_window(&PageWindowRequest::new(
            input.current_page,
            input.total_items,
            items_per_page,
            max_pages_to_show,
        ));
        let controls = NavControls::new(input.current_page, window.total_pages);
        // Offsets follow the page the window highlights, not the raw input.
        let shown_page = input
            .current_page
            .clamp(1, i64::try_from(window.total_pages).unwrap_or(i64::MAX));
        let query = PageQuery::new(
            shown_page,
            items_per_page,
            self.config.max_items_per_page,
        );

        tracing::debug!(
            current_page = input.current_page,
            total_pages = window.total_pages,
            first_shown = window.first_shown(),
            last_shown = window.last_shown(),
            "Computed page window"
        );

        Ok(WindowViewOutput {
            window,
            controls,
            query,
        })
    }
}

fn checked(field: &'static str, value: u64, max: u64) -> PaginationResult<u64> {
    if (1..=max).contains(&value) {
        Ok(value)
    } else {
        Err(PaginationError::OutOfRange {
            field,
            value,
            min: 1,
            max,
        })
    }
}
