use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::errors::JwtError;

/// Identity claims carried by an access token.
///
/// Every field is required: a token whose payload lacks any of them fails to
/// deserialize and is rejected as a whole.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IdentityClaims {
    /// Subject (user identifier)
    pub sub: String,

    pub email: String,

    pub username: String,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl IdentityClaims {
    /// Create claims for a user, expiring `ttl` after `issued_at`.
    ///
    /// # Arguments
    /// * `subject` - Unique user identifier
    /// * `email` - User email address
    /// * `username` - Display name
    /// * `issuer` / `audience` - Token issuer and intended audience
    /// * `issued_at` - Issuance instant
    /// * `ttl` - Lifetime of the token
    ///
    /// # Errors
    /// * `EncodingFailed` - Expiry falls outside the representable range
    pub fn for_user(
        subject: impl ToString,
        email: impl Into<String>,
        username: impl Into<String>,
        issuer: impl Into<String>,
        audience: impl Into<String>,
        issued_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Result<Self, JwtError> {
        let expires_at = issued_at
            .checked_add_signed(ttl)
            .ok_or_else(|| JwtError::EncodingFailed("token expiry out of range".to_string()))?;

        Ok(Self {
            sub: subject.to_string(),
            email: email.into(),
            username: username.into(),
            iss: issuer.into(),
            aud: audience.into(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        })
    }

    /// Expiration as a UTC instant.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or(DateTime::<Utc>::MIN_UTC)
    }
}
