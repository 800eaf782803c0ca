use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use murmur_db::DbError;
use thiserror::Error;
use tracing::{debug, error};

use crate::validation::ValidationError;

/// Failures a handler can end in. Every variant renders with an empty body;
/// storage details stay in the logs.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("malformed request: {0}")]
    Malformed(String),

    /// Store refused the write (duplicate username, unknown author) or the
    /// targeted row does not exist.
    #[error("rejected: {0}")]
    Rejected(&'static str),

    #[error("invalid credentials")]
    Unauthorized,

    #[error("storage failure: {0}")]
    Storage(#[from] DbError),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Malformed(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Malformed(rejection.body_text())
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Invalid(_)
            | ApiError::Malformed(_)
            | ApiError::Rejected(_)
            | ApiError::Storage(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Storage(_) | ApiError::Internal(_) => error!("{}", self),
            _ => debug!("{}", self),
        }
        self.status().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert_eq!(
            ApiError::Invalid(ValidationError::EmptyUsername).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Storage(DbError::LockPoisoned("x".into())).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::Unauthorized.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ApiError::Internal("join".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
