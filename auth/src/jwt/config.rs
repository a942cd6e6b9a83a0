use std::fmt;

use chrono::Duration;

use super::errors::ConfigurationError;

/// Settings shared by token issuance and validation.
///
/// Passed explicitly to [`JwtHandler::new`](super::JwtHandler::new) so several
/// handlers with different keys or issuers can coexist.
#[derive(Clone)]
pub struct TokenConfig {
    pub signing_key: Vec<u8>,
    pub issuer: String,
    pub audience: String,
    pub ttl: Duration,
}

impl TokenConfig {
    /// Minimum HS256 key length in bytes.
    pub const MIN_KEY_LENGTH: usize = 32;

    /// Longest accepted token lifetime, in days.
    pub const MAX_TTL_DAYS: i64 = 365;

    pub fn new(
        signing_key: impl Into<Vec<u8>>,
        issuer: impl Into<String>,
        audience: impl Into<String>,
        ttl: Duration,
    ) -> Self {
        Self {
            signing_key: signing_key.into(),
            issuer: issuer.into(),
            audience: audience.into(),
            ttl,
        }
    }

    /// Check the settings are safe to sign and validate with.
    ///
    /// # Errors
    /// * `MissingSigningKey` - Key is empty
    /// * `SigningKeyTooShort` - Key is shorter than 32 bytes
    /// * `MissingIssuer` / `MissingAudience` - Blank issuer or audience
    /// * `InvalidTimeToLive` - Ttl is zero, negative, or longer than a year
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.signing_key.is_empty() {
            return Err(ConfigurationError::MissingSigningKey);
        }
        if self.signing_key.len() < Self::MIN_KEY_LENGTH {
            return Err(ConfigurationError::SigningKeyTooShort {
                min: Self::MIN_KEY_LENGTH,
                actual: self.signing_key.len(),
            });
        }
        if self.issuer.trim().is_empty() {
            return Err(ConfigurationError::MissingIssuer);
        }
        if self.audience.trim().is_empty() {
            return Err(ConfigurationError::MissingAudience);
        }
        if self.ttl <= Duration::zero() || self.ttl > Duration::days(Self::MAX_TTL_DAYS) {
            return Err(ConfigurationError::InvalidTimeToLive);
        }
        Ok(())
    }
}

impl fmt::Debug for TokenConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenConfig")
            .field("signing_key", &"<redacted>")
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .field("ttl", &self.ttl)
            .finish()
    }
}
