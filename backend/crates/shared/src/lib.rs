//! Shared Kernel - vocabulary shared by every crate in the workspace
//!
//! Holds the unified error type ([`error::app_error::AppError`]) and its
//! classification ([`error::kind::ErrorKind`]). Feature crates keep their own
//! `thiserror` enums and convert into `AppError` at the HTTP boundary.
//!
//! Only things with the same meaning in every crate belong here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
