//! Type-safe error codes for API responses.
//!
//! Each code carries a string identifier for clients, an integer for logs
//! and dashboards, and a default message.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::ValidationError;
//! assert_eq!(code.as_str(), "VALIDATION_ERROR");
//! assert_eq!(code.code(), 1001);
//! assert_eq!(code.default_message(), "Request validation failed");
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standardized error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Request rejected before reaching a handler (1000-1099)
    /// A request part failed its schema rules
    ValidationError,

    /// Invalid UUID format in a path parameter
    InvalidUuid,

    /// Request body is missing, not JSON, or has the wrong shape
    InvalidJson,

    /// Query string could not be decoded into the expected shape
    InvalidQuery,

    /// Path parameters could not be decoded into the expected shape
    InvalidPath,

    // Domain outcomes (1100-1199)
    /// Requested resource was not found
    NotFound,

    /// Request conflicts with current resource state
    Conflict,

    /// The route exists but not for this HTTP method
    MethodNotAllowed,

    // Server errors (1500-1599)
    /// An unexpected internal server error occurred
    InternalError,

    /// A handler panicked while serving the request
    HandlerPanic,
}

impl ErrorCode {
    /// SCREAMING_SNAKE_CASE identifier for programmatic handling by clients.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidUuid => "INVALID_UUID",
            Self::InvalidJson => "INVALID_JSON",
            Self::InvalidQuery => "INVALID_QUERY",
            Self::InvalidPath => "INVALID_PATH",
            Self::NotFound => "NOT_FOUND",
            Self::Conflict => "CONFLICT",
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            Self::InternalError => "INTERNAL_ERROR",
            Self::HandlerPanic => "HANDLER_PANIC",
        }
    }

    /// Integer code used in structured logs and metrics.
    ///
    /// - 1000-1099: request rejected by a validation gate
    /// - 1100-1199: domain outcomes
    /// - 1500-1599: server faults
    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::InvalidUuid => 1002,
            Self::InvalidJson => 1003,
            Self::InvalidQuery => 1004,
            Self::InvalidPath => 1005,

            Self::NotFound => 1101,
            Self::Conflict => 1102,
            Self::MethodNotAllowed => 1104,

            Self::InternalError => 1501,
            Self::HandlerPanic => 1502,
        }
    }

    /// Default user-facing message. Call sites may override it with specifics.
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::ValidationError => "Request validation failed",
            Self::InvalidUuid => "Invalid UUID format",
            Self::InvalidJson => "Invalid JSON body",
            Self::InvalidQuery => "Invalid query string",
            Self::InvalidPath => "Invalid path parameters",
            Self::NotFound => "Resource not found",
            Self::Conflict => "Resource state conflict",
            Self::MethodNotAllowed => "The HTTP method is not allowed for this resource",
            Self::InternalError => "An internal server error occurred",
            Self::HandlerPanic => "An internal server error occurred",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
