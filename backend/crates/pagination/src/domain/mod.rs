//! Domain Layer - Pagination math
//!
//! This layer contains:
//! - The page window calculator
//! - Navigation control state
//! - Offset queries and the `{ total, items }` envelope
//!
//! Everything here is pure and synchronous.

pub mod controls;
pub mod page;
pub mod window;

pub use controls::NavControls;
pub use page::{Page, PageQuery};
pub use window::{PageWindowRequest, PageWindowResult, compute_window};
