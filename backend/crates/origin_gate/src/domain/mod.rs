//! Domain Layer - Origin gating
//!
//! This layer contains:
//! - Request and decision value types
//! - The validated gate policy and its decision function
//! - Path scope matching

pub mod decision;
pub mod policy;
pub mod scope;

pub use decision::{AllowOrigin, OriginGateDecision, OriginGateRequest};
pub use policy::GatePolicy;
pub use scope::PathScope;
