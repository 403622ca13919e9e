//! Presentation Layer
//!
//! axum middleware that applies gate decisions to HTTP traffic.

pub mod middleware;
