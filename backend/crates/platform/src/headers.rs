//! Request header utilities
//!
//! Reading the declared `Origin` and building comma-joined header values.

use axum::http::{HeaderMap, header};

/// Declared `Origin` of a request.
///
/// A missing header, or one that is not visible ASCII, reads as the empty
/// string. The empty origin is never on an allow-list unless configured.
pub fn extract_origin(headers: &HeaderMap) -> &str {
    headers
        .get(header::ORIGIN)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

/// Join list entries into a single comma-separated header value
pub fn join_values<I, S>(values: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values
        .into_iter()
        .map(|v| v.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
