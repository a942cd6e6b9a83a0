use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::IdentityClaims;
use super::config::TokenConfig;
use super::errors::ConfigurationError;
use super::errors::JwtError;

/// A freshly signed access token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// JWT token handler for issuing and validating identity tokens.
///
/// Uses HS256 (HMAC with SHA-256). Issuer, audience, and lifetime come from
/// the [`TokenConfig`] the handler was built with.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    issuer: String,
    audience: String,
    ttl: Duration,
}

impl JwtHandler {
    /// Create a new JWT handler from explicit token settings.
    ///
    /// # Arguments
    /// * `config` - Signing key, issuer, audience, and token lifetime
    ///
    /// # Returns
    /// JwtHandler instance configured with HS256 algorithm
    ///
    /// # Errors
    /// * `ConfigurationError` - Settings are missing or unsafe
    pub fn new(config: &TokenConfig) -> Result<Self, ConfigurationError> {
        config.validate()?;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(&config.signing_key),
            decoding_key: DecodingKey::from_secret(&config.signing_key),
            algorithm: Algorithm::HS256,
            issuer: config.issuer.clone(),
            audience: config.audience.clone(),
            ttl: config.ttl,
        })
    }

    /// Issue a token for a user, valid from now until now + ttl.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(
        &self,
        subject: impl ToString,
        email: &str,
        username: &str,
    ) -> Result<IssuedToken, JwtError> {
        self.issue_at(subject, email, username, Utc::now())
    }

    /// Issue a token as if the current time were `issued_at`.
    pub fn issue_at(
        &self,
        subject: impl ToString,
        email: &str,
        username: &str,
        issued_at: DateTime<Utc>,
    ) -> Result<IssuedToken, JwtError> {
        let claims = IdentityClaims::for_user(
            subject,
            email,
            username,
            self.issuer.as_str(),
            self.audience.as_str(),
            issued_at,
            self.ttl,
        )?;

        let token = encode(&Header::new(self.algorithm), &claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))?;

        Ok(IssuedToken {
            token,
            expires_at: claims.expires_at(),
        })
    }

    /// Validate a token and return its identity claims.
    ///
    /// Signature, issuer, audience, and expiry must all hold; expiry is checked
    /// without leeway.
    ///
    /// # Errors
    /// * `InvalidToken` - Any validation failure. The precise cause is only
    ///   logged.
    pub fn validate(&self, token: &str) -> Result<IdentityClaims, JwtError> {
        decode::<IdentityClaims>(token, &self.decoding_key, &self.validation())
            .map(|token_data| token_data.claims)
            .map_err(|e| {
                tracing::debug!(reason = ?e.kind(), "Token rejected");
                JwtError::InvalidToken
            })
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;
        validation.set_issuer(&[self.issuer.as_str()]);
        validation.set_audience(&[self.audience.as_str()]);
        validation.set_required_spec_claims(&["exp", "iss", "aud", "sub"]);
        validation
    }
}
