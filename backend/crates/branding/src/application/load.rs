//! Settings loading
//!
//! Reads the settings document from disk once at startup. A missing file is
//! not an error: every screen then uses its built-in defaults.

use std::io::ErrorKind;
use std::path::Path;

use crate::domain::BrandingSettings;
use crate::error::{BrandingError, BrandingResult};

pub async fn load_settings(path: impl AsRef<Path>) -> BrandingResult<BrandingSettings> {
    let path = path.as_ref();

    let raw = match tokio::fs::read_to_string(path).await {
        Ok(raw) => raw,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "Settings file not found, using defaults");
            return Ok(BrandingSettings::default());
        }
        Err(source) => {
            return Err(BrandingError::Read {
                path: path.display().to_string(),
                source,
            });
        }
    };

    let settings = BrandingSettings::from_json(&raw)?;
    tracing::info!(
        path = %path.display(),
        template = settings.template(),
        "Branding settings loaded"
    );
    Ok(settings)
}
