//! Resolve Branding Use Case

use std::sync::Arc;

use crate::domain::{BrandingSettings, Screen, ScreenBranding};
use crate::error::BrandingResult;

pub struct ResolveBrandingUseCase {
    settings: Arc<BrandingSettings>,
}

impl ResolveBrandingUseCase {
    pub fn new(settings: Arc<BrandingSettings>) -> Self {
        Self { settings }
    }

    /// `screen` is the path segment, e.g. `collector-register`
    pub fn execute(&self, screen: &str) -> BrandingResult<ScreenBranding> {
        let screen: Screen = screen.parse()?;
        let branding = self.settings.resolve(screen);

        tracing::debug!(
            screen = %screen,
            template = self.settings.template(),
            "Resolved branding"
        );

        Ok(branding)
    }
}
