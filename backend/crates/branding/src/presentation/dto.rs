//! Branding DTOs

use serde::Serialize;

use crate::domain::ScreenBranding;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandingResponse {
    pub screen: String,
    pub template: String,
    pub title: String,
    pub subtitle: String,
    pub image_src: String,
    pub theme: String,
}

impl BrandingResponse {
    pub fn new(template: &str, branding: ScreenBranding) -> Self {
        Self {
            screen: branding.screen.to_string(),
            template: template.to_string(),
            title: branding.title,
            subtitle: branding.subtitle,
            image_src: branding.image_src,
            theme: branding.theme,
        }
    }
}
