//! Origin Gate Module
//!
//! Clean Architecture structure:
//! - `domain/` - Request/decision types, the decision policy, path scope
//! - `application/` - Deployment configuration, presets, the assembled gate
//! - `presentation/` - axum middleware
//!
//! ## Behavior
//! - Allow-listed origins are echoed in `Access-Control-Allow-Origin`
//! - Unknown origins get no allow-origin header (strict) or `*` (lenient)
//! - `OPTIONS` requests are answered with `200` and an empty body
//! - Other requests are never refused; the gate only adds headers
//! - Configuration is validated once, so per-request decisions cannot fail

pub mod application;
pub mod domain;
pub mod error;
pub mod presentation;

// Re-exports for convenience
pub use application::config::{DEFAULT_ALLOWED_ORIGINS, GateConfig, GatePreset};
pub use application::gate::OriginGate;
pub use domain::{AllowOrigin, OriginGateDecision, OriginGateRequest, PathScope};
pub use error::{GateError, GateResult};
pub use presentation::middleware::with_origin_gate;
