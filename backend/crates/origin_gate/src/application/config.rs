//! Application Configuration
//!
//! Raw, per-deployment gate settings and the two deployment presets.

use std::str::FromStr;

use crate::domain::scope::PathScope;
use crate::error::GateError;

/// Production domains, their `www` variants and local development hosts
pub const DEFAULT_ALLOWED_ORIGINS: &[&str] = &[
    "https://applottobueno.com",
    "https://www.applottobueno.com",
    "https://banempre.online",
    "https://www.banempre.online",
    "http://localhost:3000",
    "http://localhost:3002",
];

pub const DEFAULT_ALLOWED_METHODS: &[&str] = &["GET", "POST", "PUT", "DELETE", "OPTIONS"];

/// Request headers allowed by the API-only deployment
pub const API_ALLOWED_HEADERS: &[&str] = &["Content-Type", "Authorization", "X-Requested-With"];

/// Request headers allowed by the site-wide deployment
pub const SITE_ALLOWED_HEADERS: &[&str] = &[
    "Content-Type",
    "Authorization",
    "X-Requested-With",
    "X-CSRF-Token",
    "Accept",
    "Accept-Version",
    "Content-Length",
    "Content-MD5",
    "Date",
    "X-Api-Version",
];

/// Paths the site-wide deployment leaves alone
pub const STATIC_ASSET_PREFIXES: &[&str] = &["/_next/static", "/_next/image", "/favicon.ico"];
pub const STATIC_ASSET_SUFFIXES: &[&str] = &[".png"];

/// Origin gate configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateConfig {
    /// Exact origins that get their own origin echoed back
    pub allowed_origins: Vec<String>,
    /// Sent as `Access-Control-Allow-Methods`, in this order
    pub allowed_methods: Vec<String>,
    /// Sent as `Access-Control-Allow-Headers`, in this order
    pub allowed_headers: Vec<String>,
    /// Send `Access-Control-Allow-Credentials: true`
    pub allow_credentials: bool,
    /// `true`: omit allow-origin for unknown origins. `false`: answer `*`.
    pub strict_origin_check: bool,
    /// Paths the gate runs on
    pub scope: PathScope,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self::api_only(DEFAULT_ALLOWED_ORIGINS.iter().copied())
    }
}

impl GateConfig {
    /// Gate only `/api/*`, deny unknown origins by omitting the header
    pub fn api_only<I, S>(origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed_origins: origins.into_iter().map(Into::into).collect(),
            allowed_methods: to_strings(DEFAULT_ALLOWED_METHODS),
            allowed_headers: to_strings(API_ALLOWED_HEADERS),
            allow_credentials: true,
            strict_origin_check: true,
            scope: PathScope::under("/api"),
        }
    }

    /// Gate every non-asset path, answer `*` for unknown origins
    pub fn site_wide<I, S>(origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed_origins: origins.into_iter().map(Into::into).collect(),
            allowed_methods: to_strings(DEFAULT_ALLOWED_METHODS),
            allowed_headers: to_strings(SITE_ALLOWED_HEADERS),
            allow_credentials: true,
            strict_origin_check: false,
            scope: PathScope::all()
                .excluding_prefixes(STATIC_ASSET_PREFIXES.iter().copied())
                .excluding_suffixes(STATIC_ASSET_SUFFIXES.iter().copied()),
        }
    }

    pub fn with_strict_origin_check(mut self, strict: bool) -> Self {
        self.strict_origin_check = strict;
        self
    }

    pub fn with_allowed_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_headers = headers.into_iter().map(Into::into).collect();
        self
    }
}

/// Named deployment preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GatePreset {
    #[default]
    Api,
    Site,
}

impl GatePreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            GatePreset::Api => "api",
            GatePreset::Site => "site",
        }
    }

    pub fn config<I, S>(&self, origins: I) -> GateConfig
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        match self {
            GatePreset::Api => GateConfig::api_only(origins),
            GatePreset::Site => GateConfig::site_wide(origins),
        }
    }
}

impl FromStr for GatePreset {
    type Err = GateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "api" => Ok(GatePreset::Api),
            "site" => Ok(GatePreset::Site),
            _ => Err(GateError::UnknownPreset(s.to_string())),
        }
    }
}

impl std::fmt::Display for GatePreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
