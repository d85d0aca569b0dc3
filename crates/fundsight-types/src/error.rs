use thiserror::Error;

/// Errors from advice service operations.
///
/// These never cross the session controller boundary: the controller
/// converts any of them into a user-facing fallback turn.
#[derive(Debug, Error)]
pub enum AdviceError {
    #[error("provider error: {message}")]
    Provider { message: String },

    #[error("deserialization error: {0}")]
    Deserialization(String),

    #[error("rate limited")]
    RateLimited,

    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("provider returned no advice text")]
    EmptyResponse,

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

/// Errors from session snapshot persistence.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("io error: {0}")]
    Io(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}
