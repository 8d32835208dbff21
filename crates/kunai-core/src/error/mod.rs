use thiserror::Error;

/// Core error type with minimal dependencies
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Authentication error: {0}")]
    AuthenticationError(String),
    #[error("Not Authenticated")]
    NotAuthenticated,

    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Invariant violation: {0}")]
    InvariantViolation(&'static str),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
