//! Origin Gate Middleware

use crate::application::gate::OriginGate;
use crate::domain::{OriginGateDecision, OriginGateRequest};
use axum::Router;
use axum::body::Body;
use axum::extract::{ConnectInfo, State};
use axum::http::{Request, StatusCode};
use axum::middleware::{self as axum_middleware, Next};
use axum::response::{IntoResponse, Response};
use platform::headers::extract_origin;
use std::net::SocketAddr;
use std::sync::Arc;

/// Wrap `router` so every in-scope request passes through the gate
pub fn with_origin_gate(router: Router, gate: OriginGate) -> Router {
    router.layer(axum_middleware::from_fn_with_state(
        Arc::new(gate),
        origin_gate,
    ))
}

/// Middleware that attaches CORS headers and answers preflights
///
/// Out-of-scope paths are passed through untouched. Preflights never reach
/// the inner service.
pub async fn origin_gate(
    State(gate): State<Arc<OriginGate>>,
    req: Request<Body>,
    next: Next,
) -> Response {
    if !gate.applies_to(req.uri().path()) {
        return next.run(req).await;
    }

    let request = OriginGateRequest::new(extract_origin(req.headers()), req.method().clone());
    let decision = gate.decide(&request);

    if !decision.grants_origin() && !request.origin.is_empty() {
        let peer = req
            .extensions()
            .get::<ConnectInfo<SocketAddr>>()
            .map(|info| info.0);

        tracing::debug!(
            origin = %request.origin,
            method = %request.method,
            path = %req.uri().path(),
            peer = ?peer,
            "Origin not on allow-list, allow-origin omitted"
        );
    }

    if decision.is_preflight {
        return preflight_response(&decision);
    }

    let mut response = next.run(req).await;
    decision.apply_to(response.headers_mut());
    response
}

/// `200 OK`, empty body, decision headers
fn preflight_response(decision: &OriginGateDecision) -> Response {
    let status = decision.short_circuit_status().unwrap_or(StatusCode::OK);
    let mut response = (status, ()).into_response();
    decision.apply_to(response.headers_mut());
    response
}
