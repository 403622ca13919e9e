//! Presentation Layer
//!
//! HTTP handler, DTOs and router for the window endpoint.

pub mod dto;
pub mod handlers;
pub mod router;
