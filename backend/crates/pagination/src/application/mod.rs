//! Application Layer - Use Cases
//!
//! Applies configured defaults and limits before calling the domain.

pub mod config;
pub mod window_view;
