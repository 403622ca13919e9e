//! Gate Policy
//!
//! The validated, immutable form of the gate configuration and the decision
//! function over it. Every header value is checked when the policy is built,
//! so [`GatePolicy::decide`] cannot fail.

use http::{HeaderMap, HeaderValue, header};
use std::collections::HashMap;

use crate::domain::decision::{AllowOrigin, OriginGateDecision, OriginGateRequest};

#[derive(Debug, Clone)]
pub struct GatePolicy {
    /// Allow-listed origin → its pre-encoded header value
    allowed_origins: HashMap<String, HeaderValue>,
    /// Omit the allow-origin header on mismatch instead of answering `*`
    strict_origin_check: bool,
    /// Methods, headers and credentials headers sent with every decision
    fixed_headers: HeaderMap,
}

impl GatePolicy {
    pub(crate) fn new(
        allowed_origins: HashMap<String, HeaderValue>,
        strict_origin_check: bool,
        fixed_headers: HeaderMap,
    ) -> Self {
        Self {
            allowed_origins,
            strict_origin_check,
            fixed_headers,
        }
    }

    /// Decide the CORS response headers for one request.
    ///
    /// An allow-listed origin is echoed back. Any other origin, including
    /// the empty one, gets no allow-origin header under strict checking and
    /// `*` otherwise. Preflight and pass-through decisions carry the same
    /// headers; only `is_preflight` differs.
    pub fn decide(&self, request: &OriginGateRequest) -> OriginGateDecision {
        let mut response_headers = self.fixed_headers.clone();

        let allow_origin = match self.allowed_origins.get(&request.origin) {
            Some(value) => {
                response_headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, value.clone());
                Some(AllowOrigin::Exact(request.origin.clone()))
            }
            None if self.strict_origin_check => None,
            None => {
                response_headers.insert(
                    header::ACCESS_CONTROL_ALLOW_ORIGIN,
                    HeaderValue::from_static("*"),
                );
                Some(AllowOrigin::Any)
            }
        };

        OriginGateDecision {
            is_preflight: request.is_preflight(),
            allow_origin,
            response_headers,
        }
    }
}
