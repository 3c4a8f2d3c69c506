// ABOUTME: HTTP-facing error kinds for the API.
// ABOUTME: Maps each kind to a status code and a generic client message.

use super::response::{self, Body};
use crate::ports::AggregateError;
use crate::runtime::ListError;
use hyper::header::{ALLOW, HeaderValue};
use hyper::{Response, StatusCode};

/// Errors a request can end in.
///
/// The `Display` text carries full detail for the server log. Clients only
/// ever see [`ApiError::public_message`].
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("missing API key")]
    MissingCredential,

    #[error("invalid API key")]
    InvalidCredential,

    #[error("malformed request body: {0}")]
    MalformedRequest(String),

    #[error("method {method} not allowed on {path}")]
    MethodNotAllowed {
        method: hyper::Method,
        path: String,
        allow: &'static str,
    },

    #[error("no route for {0}")]
    NotFound(String),

    #[error("container runtime unavailable: {0}")]
    RuntimeUnavailable(#[from] ListError),

    #[error("invalid data from container runtime: {0}")]
    InvalidInput(#[from] AggregateError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingCredential | ApiError::InvalidCredential => StatusCode::UNAUTHORIZED,
            ApiError::MalformedRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::RuntimeUnavailable(_) | ApiError::InvalidInput(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn public_message(&self) -> &'static str {
        match self {
            ApiError::MissingCredential => "Missing API key",
            ApiError::InvalidCredential => "Invalid API key",
            ApiError::MalformedRequest(_) => "Invalid request body",
            ApiError::MethodNotAllowed { .. } => "Method not allowed",
            ApiError::NotFound(_) => "Not found",
            ApiError::RuntimeUnavailable(_) | ApiError::InvalidInput(_) => {
                "Failed to get port information"
            }
        }
    }

    /// Log the detail and build the generic client response.
    pub fn into_response(self) -> Response<Body> {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), "{}", self);
        } else if status == StatusCode::UNAUTHORIZED {
            tracing::warn!(status = status.as_u16(), "{}", self);
        } else {
            tracing::debug!(status = status.as_u16(), "{}", self);
        }

        let mut response = response::text(status, self.public_message());
        if let ApiError::MethodNotAllowed { allow, .. } = self {
            response
                .headers_mut()
                .insert(ALLOW, HeaderValue::from_static(allow));
        }
        response
    }
}
