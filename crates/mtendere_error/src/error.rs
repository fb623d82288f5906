use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum AuthError {
    // one error for unknown email and wrong password so the response
    // never reveals which emails are registered
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("User already exists")]
    AlreadyExists,

    #[error("No access token provided")]
    MissingToken,

    #[error("Invalid access token")]
    InvalidToken,

    #[error("Access token has expired")]
    TokenExpired,

    #[error("Insufficient permissions")]
    PermissionDenied,

    #[error("Failed to hash password")]
    HashError,

    #[error("Failed to create access token")]
    TokenCreationError,
}

#[derive(Error, Debug, PartialEq)]
pub enum StoreError {
    #[error("{0} not found: {1}")]
    NotFound(&'static str, String),

    #[error("{0} already exists: {1}")]
    Duplicate(&'static str, String),
}

#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Unknown permission: {0}")]
    UnknownPermission(String),

    #[error("Validation Error: {0}")]
    Error(String),
}

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Logging Error: {0}")]
    Error(String),
}

#[derive(Error, Debug)]
pub enum UtilError {
    #[error("Invalid UUID")]
    UuidError,

    #[error("Util Error: {0}")]
    Error(String),
}
