use axum::{http::StatusCode, response::Response};
use std::any::Any;

use super::{ErrorCode, error_response};

/// Fallback for routes that do not exist.
pub async fn not_found() -> Response {
    error_response(
        StatusCode::NOT_FOUND,
        "The requested resource was not found".to_string(),
        ErrorCode::NotFound,
    )
}

/// Handler for 405 Method Not Allowed errors.
pub async fn method_not_allowed() -> Response {
    error_response(
        StatusCode::METHOD_NOT_ALLOWED,
        ErrorCode::MethodNotAllowed.default_message().to_string(),
        ErrorCode::MethodNotAllowed,
    )
}

/// Renders a panic caught by `CatchPanicLayer` as a 500 response.
///
/// The panic payload is logged, never returned to the client.
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };

    tracing::error!(
        error_code = ErrorCode::HandlerPanic.code(),
        panic = detail,
        "Handler panicked"
    );

    error_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        ErrorCode::HandlerPanic.default_message().to_string(),
        ErrorCode::HandlerPanic,
    )
}
