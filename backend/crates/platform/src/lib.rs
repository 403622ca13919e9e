//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Typed environment loading with logged defaults
//! - Comma-separated list parsing for deployment configuration
//! - Request header extraction (Origin, client IP)

pub mod env;
pub mod headers;
