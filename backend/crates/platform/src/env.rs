//! Environment Configuration Infrastructure
//!
//! Deployment settings (allow-lists, header lists, flags, ports) arrive as
//! environment variables. Lookups go through [`EnvSource`] so configuration
//! loaders can be tested against a plain map instead of the process env.

use std::collections::HashMap;
use std::fmt::Display;
use std::str::FromStr;

/// Error when an environment variable is present but unusable
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnvError {
    #[error("Invalid value for {key}: {value:?} ({reason})")]
    Invalid {
        key: String,
        value: String,
        reason: String,
    },
}

/// Source of raw configuration values
pub trait EnvSource {
    fn get(&self, key: &str) -> Option<String>;
}

/// The process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

/// Typed reader over an [`EnvSource`]
///
/// Blank values are treated as unset. Every fallback to a default is logged
/// at info level so a misnamed variable is visible in startup logs.
#[derive(Debug, Clone)]
pub struct EnvReader<S> {
    source: S,
}

impl EnvReader<ProcessEnv> {
    pub fn process() -> Self {
        Self::new(ProcessEnv)
    }
}

impl<S: EnvSource> EnvReader<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Trimmed value, `None` when unset or blank
    pub fn var(&self, key: &str) -> Option<String> {
        self.source
            .get(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    /// Parse a value, falling back to `default` when unset
    pub fn parse_or<T>(&self, key: &str, default: T) -> Result<T, EnvError>
    where
        T: FromStr + Display,
        T::Err: Display,
    {
        match self.var(key) {
            Some(raw) => raw.parse().map_err(|e: T::Err| invalid(key, &raw, e)),
            None => {
                tracing::info!("{key} not set, using default: {default}");
                Ok(default)
            }
        }
    }

    /// Parse an optional value; unset stays `None`
    pub fn parse_opt<T>(&self, key: &str) -> Result<Option<T>, EnvError>
    where
        T: FromStr,
        T::Err: Display,
    {
        self.var(key)
            .map(|raw| raw.parse().map_err(|e: T::Err| invalid(key, &raw, e)))
            .transpose()
    }

    /// Boolean flag accepting `true/false`, `1/0`, `yes/no`, `on/off`
    pub fn flag_opt(&self, key: &str) -> Result<Option<bool>, EnvError> {
        self.var(key)
            .map(|raw| parse_flag(&raw).ok_or_else(|| invalid(key, &raw, "expected a boolean")))
            .transpose()
    }

    /// Comma-separated list, `None` when unset
    pub fn list_opt(&self, key: &str) -> Option<Vec<String>> {
        self.var(key).map(|raw| split_list(&raw))
    }

    /// Comma-separated list with a default
    pub fn list_or(&self, key: &str, default: &[&str]) -> Vec<String> {
        self.list_opt(key).unwrap_or_else(|| {
            tracing::info!("{key} not set, using {} default entries", default.len());
            default.iter().map(|s| s.to_string()).collect()
        })
    }
}

/// Split a comma-separated value, trimming entries and dropping empty ones
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn invalid(key: &str, value: &str, reason: impl Display) -> EnvError {
    tracing::warn!("Invalid {key} value: {reason}");
    EnvError::Invalid {
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
