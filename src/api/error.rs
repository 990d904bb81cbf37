//! Maps [`Error`] to HTTP responses with a `{"error": "..."}` body.

use crate::errors::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

impl Error {
    /// Status code reported to HTTP clients for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } | Self::InvalidBody(_) | Self::InvalidPath(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::DuplicateCode { .. } => StatusCode::CONFLICT,
            Self::ProductNotFound { .. } | Self::CartNotFound { .. } => StatusCode::NOT_FOUND,
            Self::Persistence(_)
            | Self::Serialization(_)
            | Self::Server { .. }
            | Self::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::debug!(%status, "Request rejected: {}", self);
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            Error::ProductNotFound { id: 2 }.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            Error::Validation { field: "title" }.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            Error::DuplicateCode {
                code: "A".to_string()
            }
            .status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            Error::CartNotFound { id: 1 }.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            Error::Persistence(std::io::Error::other("disk full")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
