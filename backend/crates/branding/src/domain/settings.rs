//! Settings document schema and branding resolution
//!
//! A settings document names its active template and holds one block per
//! template:
//!
//! ```json
//! {
//!   "currentTemplate": "Lotto",
//!   "Lotto": {
//!     "Customization": {
//!       "settings": {
//!         "title": { "text": "..." },
//!         "subtitle": { "text": "..." },
//!         "image": { "src": "..." },
//!         "theme": "dark"
//!       }
//!     }
//!   }
//! }
//! ```
//!
//! The document is resolved once into [`BrandingSettings`]; every lookup
//! afterwards returns a fully populated [`ScreenBranding`].

use serde::Deserialize;
use std::collections::HashMap;

use crate::domain::screen::{DEFAULT_IMAGE_SRC, DEFAULT_THEME, Screen};
use crate::error::{BrandingError, BrandingResult};

pub const DEFAULT_TEMPLATE: &str = "Default";

/// Raw settings document. Non-template keys are tolerated.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SettingsDocument {
    #[serde(rename = "currentTemplate", default)]
    pub current_template: Option<String>,
    #[serde(flatten)]
    pub templates: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Template {
    #[serde(default)]
    customization: Option<Section>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct Section {
    #[serde(default)]
    settings: Option<Customization>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Customization {
    #[serde(default)]
    title: Option<TextField>,
    #[serde(default)]
    subtitle: Option<TextField>,
    #[serde(default)]
    image: Option<ImageField>,
    #[serde(default)]
    theme: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
struct TextField {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
struct ImageField {
    #[serde(default)]
    src: Option<String>,
}

/// Branding for one screen, every field populated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenBranding {
    pub screen: Screen,
    pub title: String,
    pub subtitle: String,
    pub image_src: String,
    pub theme: String,
}

/// Customization of the active template
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrandingSettings {
    template: String,
    customization: Customization,
}

impl BrandingSettings {
    pub fn from_json(raw: &str) -> BrandingResult<Self> {
        let document: SettingsDocument =
            serde_json::from_str(raw).map_err(BrandingError::InvalidDocument)?;
        Ok(Self::from_document(document))
    }

    /// A template block of the wrong shape is treated as empty.
    pub fn from_document(mut document: SettingsDocument) -> Self {
        let template = document
            .current_template
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| DEFAULT_TEMPLATE.to_string());

        let customization = document
            .templates
            .remove(&template)
            .and_then(|block| serde_json::from_value::<Template>(block).ok())
            .and_then(|t| t.customization)
            .and_then(|s| s.settings)
            .unwrap_or_default();

        Self {
            template,
            customization,
        }
    }

    pub fn template(&self) -> &str {
        if self.template.is_empty() {
            DEFAULT_TEMPLATE
        } else {
            &self.template
        }
    }

    /// Configured values win; missing or empty ones use the screen default.
    pub fn resolve(&self, screen: Screen) -> ScreenBranding {
        let c = &self.customization;
        ScreenBranding {
            screen,
            title: pick(
                c.title.as_ref().and_then(|f| f.text.as_deref()),
                screen.default_title(),
            ),
            subtitle: pick(
                c.subtitle.as_ref().and_then(|f| f.text.as_deref()),
                screen.default_subtitle(),
            ),
            image_src: pick(
                c.image.as_ref().and_then(|f| f.src.as_deref()),
                DEFAULT_IMAGE_SRC,
            ),
            theme: pick(c.theme.as_deref(), DEFAULT_THEME),
        }
    }
}

fn pick(configured: Option<&str>, default: &str) -> String {
    configured
        .filter(|v| !v.is_empty())
        .unwrap_or(default)
        .to_string()
}
