//! HTTP error mapping.
//!
//! Every failure leaves the handler as an [`ApiError`]: a closed [`ApiErrorKind`]
//! that fixes the status code, and a message sent back as `{"error": "<message>"}`.

use crate::product_actor::ProductError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// Malformed identifier, body or query. The use case was not called.
    BadRequest,
    NotFound,
    Conflict,
    Unavailable,
    Internal,
}

impl ApiErrorKind {
    pub fn status(self) -> StatusCode {
        match self {
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Conflict => StatusCode::CONFLICT,
            Self::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn is_client_fault(self) -> bool {
        matches!(self, Self::BadRequest | Self::NotFound | Self::Conflict)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
}

impl ApiError {
    pub fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::BadRequest, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::NotFound, message)
    }
}

impl From<ProductError> for ApiError {
    fn from(err: ProductError) -> Self {
        let kind = match &err {
            ProductError::NotFound(_) => ApiErrorKind::NotFound,
            ProductError::Conflict(_) => ApiErrorKind::Conflict,
            ProductError::Unavailable(_) => ApiErrorKind::Unavailable,
            ProductError::Internal(_) => ApiErrorKind::Internal,
        };
        Self::new(kind, err.to_string())
    }
}

/// Wire shape of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.kind.status();
        if self.kind.is_client_fault() {
            warn!(status = status.as_u16(), error = %self.message, "Request rejected");
        } else {
            error!(status = status.as_u16(), error = %self.message, "Request failed");
        }
        (
            status,
            Json(ErrorBody {
                error: self.message,
            }),
        )
            .into_response()
    }
}
