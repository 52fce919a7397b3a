//! Custom error types for the marketplace service
//!
//! Every handler converts datastore and hashing failures into this taxonomy;
//! raw database error text never reaches the client. All error bodies are
//! `{"error": <message>}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::token::AuthError;

/// Custom error type for the marketplace service
#[derive(Error, Debug)]
pub enum ApiError {
    /// Missing or malformed input
    #[error("{0}")]
    Validation(String),

    /// Missing, malformed, badly signed, or expired token
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Login failure. Deliberately identical for an unknown email and a
    /// wrong password so responses cannot be used to enumerate accounts.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// Authenticated but not the resource owner (profile endpoints only)
    #[error("forbidden")]
    Forbidden,

    /// Resource absent, or owner mismatch on a listing/cart mutation
    #[error("not found")]
    NotFound,

    /// Duplicate unique value
    #[error("{0}")]
    Conflict(String),

    /// Datastore or hashing failure
    #[error("internal server error")]
    Internal,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Auth(_) | ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.to_string(),
        }));

        (self.status(), body).into_response()
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(e: sqlx::Error) -> Self {
        match &e {
            sqlx::Error::RowNotFound => ApiError::NotFound,
            sqlx::Error::Database(db) => match db.code().as_deref() {
                // unique_violation: only users.email is unique in the schema
                Some("23505") => ApiError::Conflict("email already registered".to_string()),
                // foreign_key_violation: referenced row does not exist
                Some("23503") => ApiError::NotFound,
                _ => {
                    error!("Database error: {}", e);
                    ApiError::Internal
                }
            },
            _ => {
                error!("Database error: {}", e);
                ApiError::Internal
            }
        }
    }
}

/// Type alias for handler results
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::Validation("title is required".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Auth(AuthError::Missing).status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::Auth(AuthError::Expired).status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::InvalidCredentials.status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(ApiError::Forbidden.status(), StatusCode::FORBIDDEN);
        assert_eq!(ApiError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Conflict("email already registered".into()).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::Internal.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_row_not_found_maps_to_not_found() {
        let err = ApiError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn test_unknown_email_and_bad_password_share_a_body() {
        // Both login failure paths must be indistinguishable on the wire.
        assert_eq!(
            ApiError::InvalidCredentials.to_string(),
            "invalid email or password"
        );
    }
}
