use thiserror::Error;

/// Error type for JWT operations.
///
/// Validation failures collapse into a single `InvalidToken` so callers cannot
/// tell an expired token from a tampered one.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is invalid")]
    InvalidToken,
}

/// Error for token settings that make it unsafe to start the service.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("Signing key is missing")]
    MissingSigningKey,

    #[error("Signing key too short: minimum {min} bytes, got {actual}")]
    SigningKeyTooShort { min: usize, actual: usize },

    #[error("Token issuer is missing")]
    MissingIssuer,

    #[error("Token audience is missing")]
    MissingAudience,

    #[error("Token time-to-live must be positive and at most 365 days")]
    InvalidTimeToLive,
}
