use thiserror::Error;

/// Errors surfaced by commitment generation and verification.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommitmentError {
    /// The caller sent a payload that cannot be processed. Not retried.
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    /// Something failed on our side.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CommitmentError {
    /// Whether the failure is attributable to the caller.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidPayload(_))
    }

    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidPayload(message.into())
    }
}
