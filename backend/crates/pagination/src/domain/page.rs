//! Offset queries and list envelopes
//!
//! List endpoints take `skip`/`limit` and answer with `{ total, items }`.
//! The page number the user sees is translated at this boundary.

use serde::{Deserialize, Serialize};

use crate::domain::window::{PageWindowRequest, PageWindowResult, compute_window};

/// 1-based page request translated to `skip`/`limit`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    page: u64,
    per_page: u64,
}

impl PageQuery {
    /// Clamp `page` to at least 1 and `per_page` into `1..=max_per_page`.
    pub fn new(current_page: i64, per_page: u64, max_per_page: u64) -> Self {
        Self {
            page: u64::try_from(current_page).unwrap_or(0).max(1),
            per_page: per_page.clamp(1, max_per_page.max(1)),
        }
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    /// Rows to skip: `(page - 1) * per_page`
    pub fn skip(&self) -> u64 {
        (self.page - 1).saturating_mul(self.per_page)
    }

    pub fn limit(&self) -> u64 {
        self.per_page
    }
}

/// `{ total, items }` list envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub total: u64,
    pub items: Vec<T>,
}

impl<T> Page<T> {
    pub fn new(total: u64, items: Vec<T>) -> Self {
        Self { total, items }
    }

    pub fn empty() -> Self {
        Self::new(0, Vec::new())
    }

    /// Window for this envelope as seen from `query`'s page
    pub fn window(&self, query: &PageQuery, max_pages_to_show: u64) -> PageWindowResult {
        compute_window(&PageWindowRequest::new(
            i64::try_from(query.page()).unwrap_or(i64::MAX),
            self.total,
            query.limit(),
            max_pages_to_show,
        ))
    }
}
