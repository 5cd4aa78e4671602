//
//  gitlab-cli
//  api/error.rs
//

//! # Error Types for the GitLab API
//!
//! Every failed call surfaces as a typed [`Error`]. HTTP failure statuses map
//! one-to-one onto variants carrying a [`ResponseError`] with the status code,
//! the server-provided message, and the request URI. Nothing is swallowed or
//! silently retried.
//!
//! ## Status Mapping
//!
//! | Status | Variant |
//! |--------|---------|
//! | 400 | `BadRequest` |
//! | 401 | `Unauthorized` |
//! | 403 | `Forbidden` |
//! | 404 | `NotFound` |
//! | 405 | `MethodNotAllowed` |
//! | 409 | `Conflict` |
//! | 422 | `Unprocessable` |
//! | 429 | `TooManyRequests` |
//! | 500 | `InternalServerError` |
//! | 502 | `BadGateway` |
//! | 503 | `ServiceUnavailable` |
//! | 504 | `GatewayTimeout` |
//! | other non-2xx | `ResponseError` |

use std::fmt;

use serde_json::Value;
use thiserror::Error;

use super::record::RecordError;

/// Details of a non-2xx HTTP response.
///
/// Carried by every status-mapped [`Error`] variant. The `Display` output is
/// the stable, user-facing error message:
/// `Server responded with code {status}, message: {message}. Request URI: {uri}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseError {
    /// HTTP status code of the response.
    pub status: u16,
    /// Message extracted from the response body.
    pub message: String,
    /// Full URI of the request that failed.
    pub request_uri: String,
}

impl ResponseError {
    pub fn new(status: u16, message: impl Into<String>, request_uri: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            request_uri: request_uri.into(),
        }
    }

    /// Extracts a human-readable message from a raw response body.
    ///
    /// GitLab reports errors as `{"message": ...}` or `{"error": ...}`. The
    /// message may itself be an object (field validation errors) or an array;
    /// objects are flattened to `'key' value value` pairs and arrays joined
    /// with spaces. Non-JSON bodies pass through unchanged.
    pub fn message_from_body(body: &str) -> String {
        let Ok(json) = serde_json::from_str::<Value>(body) else {
            return body.to_string();
        };

        let message = json
            .get("message")
            .or_else(|| json.get("error"))
            .unwrap_or(&json);

        flatten_message(message)
    }
}

impl fmt::Display for ResponseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Server responded with code {}, message: {}. Request URI: {}",
            self.status, self.message, self.request_uri
        )
    }
}

fn flatten_message(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(flatten_message)
            .collect::<Vec<_>>()
            .join(" "),
        Value::Object(map) => map
            .iter()
            .map(|(key, val)| format!("'{}' {}", key, flatten_message(val)))
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}

/// Unified error type for all GitLab API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// No API endpoint has been configured.
    ///
    /// Raised before any network call is made.
    #[error("Please set an endpoint to API")]
    MissingCredentials,

    /// 400 Bad Request.
    #[error("{0}")]
    BadRequest(ResponseError),

    /// 401 Unauthorized.
    #[error("{0}")]
    Unauthorized(ResponseError),

    /// 403 Forbidden.
    #[error("{0}")]
    Forbidden(ResponseError),

    /// 404 Not Found.
    #[error("{0}")]
    NotFound(ResponseError),

    /// 405 Method Not Allowed.
    #[error("{0}")]
    MethodNotAllowed(ResponseError),

    /// 409 Conflict.
    #[error("{0}")]
    Conflict(ResponseError),

    /// 422 Unprocessable Entity.
    #[error("{0}")]
    Unprocessable(ResponseError),

    /// 429 Too Many Requests.
    #[error("{0}")]
    TooManyRequests(ResponseError),

    /// 500 Internal Server Error.
    #[error("{0}")]
    InternalServerError(ResponseError),

    /// 502 Bad Gateway.
    #[error("{0}")]
    BadGateway(ResponseError),

    /// 503 Service Unavailable.
    #[error("{0}")]
    ServiceUnavailable(ResponseError),

    /// 504 Gateway Timeout.
    #[error("{0}")]
    GatewayTimeout(ResponseError),

    /// Any other non-success status.
    #[error("{0}")]
    ResponseError(ResponseError),

    /// A network-level error from the transport.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body did not have the declared shape for the endpoint.
    #[error("Unexpected response shape: {0}")]
    Decode(String),

    /// A record field access failed.
    #[error(transparent)]
    Record(#[from] RecordError),

    /// The configuration could not be loaded or parsed.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Maps an HTTP status code to the matching error variant.
    pub fn from_response(status: u16, message: String, request_uri: String) -> Self {
        let inner = ResponseError::new(status, message, request_uri);
        match status {
            400 => Error::BadRequest(inner),
            401 => Error::Unauthorized(inner),
            403 => Error::Forbidden(inner),
            404 => Error::NotFound(inner),
            405 => Error::MethodNotAllowed(inner),
            409 => Error::Conflict(inner),
            422 => Error::Unprocessable(inner),
            429 => Error::TooManyRequests(inner),
            500 => Error::InternalServerError(inner),
            502 => Error::BadGateway(inner),
            503 => Error::ServiceUnavailable(inner),
            504 => Error::GatewayTimeout(inner),
            _ => Error::ResponseError(inner),
        }
    }

    /// Returns the HTTP status code for response errors.
    pub fn status(&self) -> Option<u16> {
        self.response().map(|r| r.status)
    }

    /// Returns the underlying [`ResponseError`], if any.
    pub fn response(&self) -> Option<&ResponseError> {
        match self {
            Error::BadRequest(r)
            | Error::Unauthorized(r)
            | Error::Forbidden(r)
            | Error::NotFound(r)
            | Error::MethodNotAllowed(r)
            | Error::Conflict(r)
            | Error::Unprocessable(r)
            | Error::TooManyRequests(r)
            | Error::InternalServerError(r)
            | Error::BadGateway(r)
            | Error::ServiceUnavailable(r)
            | Error::GatewayTimeout(r)
            | Error::ResponseError(r) => Some(r),
            _ => None,
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_message_format() {
        let err = Error::from_response(
            409,
            "409 Already exists".to_string(),
            "https://api.example.com/users".to_string(),
        );
        assert!(matches!(err, Error::Conflict(_)));
        assert_eq!(
            err.to_string(),
            "Server responded with code 409, message: 409 Already exists. \
             Request URI: https://api.example.com/users"
        );
    }

    #[test]
    fn test_status_mapping() {
        let cases = [
            (400, "BadRequest"),
            (401, "Unauthorized"),
            (404, "NotFound"),
            (422, "Unprocessable"),
            (429, "TooManyRequests"),
            (500, "InternalServerError"),
            (504, "GatewayTimeout"),
        ];
        for (status, _) in cases {
            let err = Error::from_response(status, "m".into(), "u".into());
            assert_eq!(err.status(), Some(status));
        }
        // Unmapped codes fall back to the generic variant.
        let err = Error::from_response(418, "m".into(), "u".into());
        assert!(matches!(err, Error::ResponseError(_)));
    }

    #[test]
    fn test_message_from_json_string() {
        let body = r#"{"message": "404 Project Not Found"}"#;
        assert_eq!(
            ResponseError::message_from_body(body),
            "404 Project Not Found"
        );
    }

    #[test]
    fn test_message_from_error_field() {
        let body = r#"{"error": "invalid_token"}"#;
        assert_eq!(ResponseError::message_from_body(body), "invalid_token");
    }

    #[test]
    fn test_message_flattens_objects_and_arrays() {
        let body = r#"{"message": {"name": ["has already been taken", "is too short"]}}"#;
        assert_eq!(
            ResponseError::message_from_body(body),
            "'name' has already been taken is too short"
        );
    }

    #[test]
    fn test_message_from_non_json_body() {
        assert_eq!(
            ResponseError::message_from_body("plain text failure"),
            "plain text failure"
        );
    }

    #[test]
    fn test_missing_credentials_message() {
        assert_eq!(
            Error::MissingCredentials.to_string(),
            "Please set an endpoint to API"
        );
    }
}
