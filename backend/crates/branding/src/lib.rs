//! Branding Module
//!
//! Per-deployment screen titles, subtitles, images and theme, read from a
//! settings document keyed by the active template.
//!
//! - `domain/` - Screens, their defaults, the settings schema
//! - `application/` - Loading the document, resolving a screen
//! - `presentation/` - HTTP handler, DTO, router

pub mod application;
pub mod domain;
pub mod error;
pub mod presentation;

pub use application::load::load_settings;
pub use domain::{BrandingSettings, Screen, ScreenBranding};
pub use error::{BrandingError, BrandingResult};
pub use presentation::router::branding_router;

#[cfg(test)]
mod tests;
