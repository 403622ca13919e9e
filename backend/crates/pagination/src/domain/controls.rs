//! Navigation Controls
//!
//! Enabled state and targets of the first / previous / next / last buttons
//! rendered around the page window.

/// `Some(target)` when a control is enabled, `None` when it is disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavControls {
    pub first: Option<u64>,
    pub previous: Option<u64>,
    pub next: Option<u64>,
    pub last: Option<u64>,
}

impl NavControls {
    /// First/previous are enabled when `current_page > 1`, next/last when
    /// `current_page < total_pages`. Targets always land in `1..=total_pages`.
    pub fn new(current_page: i64, total_pages: u64) -> Self {
        let total_pages = total_pages.max(1);
        let total = i128::from(total_pages);
        let current = i128::from(current_page);
        let clamp = |page: i128| page.clamp(1, total) as u64;

        let (first, previous) = if current > 1 {
            (Some(1), Some(clamp(current - 1)))
        } else {
            (None, None)
        };

        let (next, last) = if current < total {
            (Some(clamp(current + 1)), Some(total_pages))
        } else {
            (None, None)
        };

        Self {
            first,
            previous,
            next,
            last,
        }
    }
}
