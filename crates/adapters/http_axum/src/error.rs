//! HTTP error response mapping.

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

/// Returned when a mutating endpoint is called with anything but `PUT`.
///
/// The body is plain text rather than JSON.
#[derive(Debug, Clone, Copy)]
pub struct MethodNotAllowed;

impl IntoResponse for MethodNotAllowed {
    fn into_response(self) -> Response {
        (
            StatusCode::METHOD_NOT_ALLOWED,
            [(header::ALLOW, "PUT")],
            "Method Not Allowed",
        )
            .into_response()
    }
}

/// Fallback handler for method routers that only accept `PUT`.
pub async fn method_not_allowed() -> MethodNotAllowed {
    MethodNotAllowed
}
