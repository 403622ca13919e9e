//! Gate request and decision value types

use http::{HeaderMap, HeaderName, Method, StatusCode, header};
use std::fmt;

/// What the gate looks at for one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OriginGateRequest {
    /// Declared `Origin`, empty when absent
    pub origin: String,
    pub method: Method,
}

impl OriginGateRequest {
    pub fn new(origin: impl Into<String>, method: Method) -> Self {
        Self {
            origin: origin.into(),
            method,
        }
    }

    pub fn is_preflight(&self) -> bool {
        self.method == Method::OPTIONS
    }
}

/// Resolved value of `Access-Control-Allow-Origin`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowOrigin {
    /// The request's own origin, echoed back
    Exact(String),
    /// `*`
    Any,
}

impl AllowOrigin {
    pub fn as_str(&self) -> &str {
        match self {
            AllowOrigin::Exact(origin) => origin,
            AllowOrigin::Any => "*",
        }
    }
}

impl fmt::Display for AllowOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one gate decision
///
/// The gate never refuses a request. A missing allow-origin grant is the
/// only signal; the browser enforces it.
#[derive(Debug, Clone)]
pub struct OriginGateDecision {
    pub is_preflight: bool,
    /// `None` when the header is omitted
    pub allow_origin: Option<AllowOrigin>,
    /// One value per header name
    pub response_headers: HeaderMap,
}

impl OriginGateDecision {
    /// Preflights are answered directly with `200 OK` and no body.
    pub fn short_circuit_status(&self) -> Option<StatusCode> {
        self.is_preflight.then_some(StatusCode::OK)
    }

    pub fn header(&self, name: &HeaderName) -> Option<&str> {
        self.response_headers
            .get(name)
            .and_then(|v| v.to_str().ok())
    }

    /// Copy the decision's headers onto a response, replacing same-named ones
    pub fn apply_to(&self, target: &mut HeaderMap) {
        for (name, value) in &self.response_headers {
            target.insert(name.clone(), value.clone());
        }
    }

    pub fn grants_origin(&self) -> bool {
        self.response_headers
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN)
    }
}
