//! Page Window
//!
//! Pure window math: which page buttons to show for a position in a
//! paginated list.

/// Input of [`compute_window`]
///
/// `current_page` is whatever the caller has (URL state, a click handler),
/// so it is signed and unchecked. The other fields are clamped to at least 1
/// where a zero would be meaningless.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindowRequest {
    pub current_page: i64,
    pub total_items: u64,
    pub items_per_page: u64,
    pub max_pages_to_show: u64,
}

impl PageWindowRequest {
    pub fn new(
        current_page: i64,
        total_items: u64,
        items_per_page: u64,
        max_pages_to_show: u64,
    ) -> Self {
        Self {
            current_page,
            total_items,
            items_per_page,
            max_pages_to_show,
        }
    }

    /// `max(1, ceil(total_items / items_per_page))`
    pub fn total_pages(&self) -> u64 {
        self.total_items
            .div_ceil(self.items_per_page.max(1))
            .max(1)
    }
}

/// Output of [`compute_window`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindowResult {
    pub total_pages: u64,
    /// Contiguous, ascending, within `1..=total_pages`
    pub page_numbers: Vec<u64>,
}

impl PageWindowResult {
    /// A single page needs no pagination controls at all.
    pub fn should_render(&self) -> bool {
        self.total_pages > 1
    }

    pub fn first_shown(&self) -> u64 {
        self.page_numbers.first().copied().unwrap_or(1)
    }

    pub fn last_shown(&self) -> u64 {
        self.page_numbers.last().copied().unwrap_or(1)
    }
}

/// Compute the visible window of page numbers.
///
/// When every page fits in the budget all pages are shown. Otherwise the
/// window is centered on `current_page` and slid back inside
/// `1..=total_pages` when it would run past either end. An out-of-range
/// `current_page` produces the window of the nearest valid page.
pub fn compute_window(request: &PageWindowRequest) -> PageWindowResult {
    let total_pages = request.total_pages();
    let budget = request.max_pages_to_show.max(1);

    if total_pages <= budget {
        return PageWindowResult {
            total_pages,
            page_numbers: (1..=total_pages).collect(),
        };
    }

    // i128 holds every i64 current page and u64 page count without overflow.
    let total = i128::from(total_pages);
    let budget = i128::from(budget);

    let mut start = (i128::from(request.current_page) - budget / 2).max(1);
    let mut end = start + budget - 1;

    if end > total {
        end = total;
        start = (end - budget + 1).max(1);
    }

    PageWindowResult {
        total_pages,
        page_numbers: (start as u64..=end as u64).collect(),
    }
}
