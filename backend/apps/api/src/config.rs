//! Server configuration read from the environment

use anyhow::Context;
use origin_gate::{DEFAULT_ALLOWED_ORIGINS, GateConfig, GatePreset};
use pagination::PaginationConfig;
use platform::env::{EnvReader, EnvSource};
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 31113;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub gate: GateConfig,
    pub pagination: PaginationConfig,
    pub settings_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env<S: EnvSource>(env: &EnvReader<S>) -> anyhow::Result<Self> {
        let port = env.parse_or("PORT", DEFAULT_PORT)?;

        let preset = env
            .parse_opt::<GatePreset>("CORS_PRESET")
            .context("CORS_PRESET must be `api` or `site`")?
            .unwrap_or_default();

        let origins = env.list_or("ALLOWED_ORIGINS", DEFAULT_ALLOWED_ORIGINS);
        let mut gate = preset.config(origins);
        if let Some(strict) = env.flag_opt("STRICT_ORIGIN_CHECK")? {
            gate = gate.with_strict_origin_check(strict);
        }
        if let Some(headers) = env.list_opt("ALLOWED_HEADERS") {
            gate = gate.with_allowed_headers(headers);
        }

        let settings_path = env.var("SETTINGS_PATH").map(PathBuf::from);

        tracing::info!(
            port,
            preset = %preset,
            strict_origin_check = gate.strict_origin_check,
            settings = settings_path.is_some(),
            "Configuration loaded"
        );

        Ok(Self {
            port,
            gate,
            pagination: PaginationConfig::default(),
            settings_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn reader(pairs: &[(&str, &str)]) -> EnvReader<HashMap<String, String>> {
        EnvReader::new(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_env(&reader(&[])).unwrap();

        assert_eq!(config.port, 31113);
        assert_eq!(config.gate, GateConfig::default());
        assert_eq!(config.settings_path, None);
    }

    #[test]
    fn test_site_preset_with_overrides() {
        let config = AppConfig::from_env(&reader(&[
            ("PORT", "8080"),
            ("CORS_PRESET", "site"),
            ("ALLOWED_ORIGINS", "https://banempre.online, http://localhost:3005"),
            ("STRICT_ORIGIN_CHECK", "true"),
            ("SETTINGS_PATH", "/etc/lotto/settings.json"),
        ]))
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(
            config.gate.allowed_origins,
            vec!["https://banempre.online", "http://localhost:3005"]
        );
        assert!(config.gate.strict_origin_check);
        assert_eq!(config.gate.allowed_headers.len(), 10);
        assert_eq!(
            config.settings_path,
            Some(PathBuf::from("/etc/lotto/settings.json"))
        );
    }

    #[test]
    fn test_preset_name_is_case_insensitive() {
        let config = AppConfig::from_env(&reader(&[("CORS_PRESET", "Site")])).unwrap();

        assert!(!config.gate.strict_origin_check);
        assert!(config.gate.scope.matches("/simulador"));
    }

    #[test]
    fn test_allowed_headers_override() {
        let config =
            AppConfig::from_env(&reader(&[("ALLOWED_HEADERS", "Content-Type,X-Trace")])).unwrap();

        assert_eq!(config.gate.allowed_headers, vec!["Content-Type", "X-Trace"]);
    }

    #[test]
    fn test_invalid_values() {
        assert!(AppConfig::from_env(&reader(&[("PORT", "99999")])).is_err());
        let err = AppConfig::from_env(&reader(&[("CORS_PRESET", "everything")])).unwrap_err();
        assert!(err.to_string().contains("CORS_PRESET"));
        assert!(AppConfig::from_env(&reader(&[("STRICT_ORIGIN_CHECK", "maybe")])).is_err());
    }
}
