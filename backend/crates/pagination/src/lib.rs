//! Pagination Module
//!
//! Clean Architecture structure:
//! - `domain/` - Window math, navigation controls, offset queries
//! - `application/` - Configured defaults and limits
//! - `presentation/` - HTTP handler, DTOs, router
//!
//! ## Guarantees
//! - `compute_window` is total: any `current_page`, including zero,
//!   negative and past-the-end values, yields a window inside `1..=total_pages`
//! - The returned window has `min(total_pages, max_pages_to_show)` entries
//! - No state is kept between calls

pub mod application;
pub mod domain;
pub mod error;
pub mod presentation;

// Re-exports for convenience
pub use application::config::PaginationConfig;
pub use domain::{NavControls, Page, PageQuery, PageWindowRequest, PageWindowResult, compute_window};
pub use error::{PaginationError, PaginationResult};
pub use presentation::router::pagination_router;
