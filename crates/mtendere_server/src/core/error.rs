use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use mtendere_error::error::{AuthError, StoreError, ValidationError};
use serde::Serialize;

/// Wire shape for every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
}

/// A handler failure already mapped to its HTTP status. Expected failures
/// carry their taxonomy message; anything unexpected collapses to a
/// generic 500 so internals never leak.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub error: &'static str,
    pub message: String,
}

impl ApiError {
    pub fn server_error() -> Self {
        ApiError {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error: "Server Error",
            message: "Server error".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorBody {
                error: self.error,
                message: self.message,
            }),
        )
            .into_response()
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        let (status, error) = match err {
            AuthError::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Unauthorized"),
            AuthError::AlreadyExists => (StatusCode::BAD_REQUEST, "Bad Request"),
            AuthError::MissingToken | AuthError::InvalidToken | AuthError::TokenExpired => {
                (StatusCode::UNAUTHORIZED, "Unauthorized")
            }
            AuthError::PermissionDenied => (StatusCode::FORBIDDEN, "Forbidden"),
            AuthError::HashError | AuthError::TokenCreationError => {
                return ApiError::server_error()
            }
        };

        ApiError {
            status,
            error,
            message: err.to_string(),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        let (status, error) = match err {
            StoreError::NotFound(..) => (StatusCode::NOT_FOUND, "Not Found"),
            StoreError::Duplicate(..) => (StatusCode::BAD_REQUEST, "Bad Request"),
        };

        ApiError {
            status,
            error,
            message: err.to_string(),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError {
            status: StatusCode::BAD_REQUEST,
            error: "Bad Request",
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_statuses() {
        let err: ApiError = AuthError::MissingToken.into();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);

        let err: ApiError = AuthError::TokenExpired.into();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);

        let err: ApiError = AuthError::PermissionDenied.into();
        assert_eq!(err.status, StatusCode::FORBIDDEN);

        let err: ApiError = AuthError::AlreadyExists.into();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_store_error_statuses() {
        let err: ApiError = StoreError::NotFound("Job", "abc".to_string()).into();
        assert_eq!(err.status, StatusCode::NOT_FOUND);

        let err: ApiError = StoreError::Duplicate("User", "a@b.com".to_string()).into();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_internal_failures_stay_generic() {
        let err: ApiError = AuthError::TokenCreationError.into();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, "Server error");
    }
}
