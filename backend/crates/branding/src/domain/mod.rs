//! Domain Layer - Screens and the settings schema

pub mod screen;
pub mod settings;

pub use screen::Screen;
pub use settings::{BrandingSettings, ScreenBranding, SettingsDocument};
