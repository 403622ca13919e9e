//! Application Configuration
//!
//! Defaults and limits for paginated views.

/// Pagination configuration
#[derive(Debug, Clone)]
pub struct PaginationConfig {
    /// Page size when the caller sends none
    pub default_items_per_page: u64,
    /// Largest accepted page size
    pub max_items_per_page: u64,
    /// Window width when the caller sends none
    pub default_max_pages_to_show: u64,
    /// Largest accepted window width
    pub max_pages_to_show_limit: u64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_items_per_page: 10,
            max_items_per_page: 100,
            default_max_pages_to_show: 5,
            max_pages_to_show_limit: 25,
        }
    }
}
