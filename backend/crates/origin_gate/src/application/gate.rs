//! Assembled Origin Gate
//!
//! Validates a [`GateConfig`] once and answers per-request questions:
//! does the gate apply to this path, and what does it decide.

use http::{HeaderMap, HeaderName, HeaderValue, Method, header};
use platform::headers::join_values;
use std::collections::HashMap;

use crate::application::config::GateConfig;
use crate::domain::{GatePolicy, OriginGateDecision, OriginGateRequest, PathScope};
use crate::error::{GateError, GateResult};

#[derive(Debug, Clone)]
pub struct OriginGate {
    policy: GatePolicy,
    scope: PathScope,
}

impl OriginGate {
    pub fn new(config: &GateConfig) -> GateResult<Self> {
        let allowed_origins = config
            .allowed_origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin)
                    .map(|value| (origin.clone(), value))
                    .map_err(|_| GateError::InvalidOrigin(origin.clone()))
            })
            .collect::<GateResult<HashMap<_, _>>>()?;

        for method in &config.allowed_methods {
            Method::from_bytes(method.as_bytes())
                .map_err(|_| GateError::InvalidMethod(method.clone()))?;
        }
        for name in &config.allowed_headers {
            HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| GateError::InvalidHeader(name.clone()))?;
        }

        let mut fixed_headers = HeaderMap::new();
        fixed_headers.insert(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_str(&join_values(&config.allowed_methods))
                .map_err(|_| GateError::InvalidMethod(config.allowed_methods.join(", ")))?,
        );
        fixed_headers.insert(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_str(&join_values(&config.allowed_headers))
                .map_err(|_| GateError::InvalidHeader(config.allowed_headers.join(", ")))?,
        );
        if config.allow_credentials {
            fixed_headers.insert(
                header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
                HeaderValue::from_static("true"),
            );
        }

        tracing::info!(
            allowed_origins = allowed_origins.len(),
            strict_origin_check = config.strict_origin_check,
            allow_credentials = config.allow_credentials,
            "Origin gate configured"
        );

        Ok(Self {
            policy: GatePolicy::new(allowed_origins, config.strict_origin_check, fixed_headers),
            scope: config.scope.clone(),
        })
    }

    pub fn applies_to(&self, path: &str) -> bool {
        self.scope.matches(path)
    }

    pub fn decide(&self, request: &OriginGateRequest) -> OriginGateDecision {
        self.policy.decide(request)
    }
}
