//! Application Layer
//!
//! Deployment configuration and the assembled gate.

pub mod config;
pub mod gate;
