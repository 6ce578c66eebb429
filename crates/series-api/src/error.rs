//! Error types for the Series API layer.
//!
//! [`ApiError`] unifies all failure modes into a single enum that can be
//! converted into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation. Every
//! error response carries a JSON body: `{"message": ...}` or, for
//! validation failures, `{"messages": [...]}`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use series_types::ValidationErrors;

/// `{"message": "..."}` body used by error responses and by the delete
/// confirmation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MessageBody {
    /// Human-readable message.
    pub message: String,
}

impl MessageBody {
    /// Wrap a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// `{"messages": [...]}` body for validation failures.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ValidationBody {
    /// One message per violated rule, in rule order.
    pub messages: Vec<String>,
}

/// Errors that can occur in the Series API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The requested series does not exist, or (update/delete only) the
    /// store failed and the raw error text is reported as not-found.
    #[error("not found: {0}")]
    NotFound(String),

    /// The payload violated one or more validation rules.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// The request could not be bound (malformed JSON, non-numeric id).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// An unexpected storage failure.
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(ValidationBody {
                    messages: errors.into_messages(),
                }),
            )
                .into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(MessageBody::new(msg))).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(MessageBody::new(msg))).into_response()
            }
            Self::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, Json(MessageBody::new(msg))).into_response()
            }
        }
    }
}
