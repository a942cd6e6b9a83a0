use crate::jwt::ConfigurationError;
use crate::jwt::IdentityClaims;
use crate::jwt::IssuedToken;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::jwt::TokenConfig;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and JWT generation.
///
/// Stateless after construction; share it behind an `Arc` across requests.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
}

/// Identity attributes to embed in an issued token.
#[derive(Debug, Clone, Copy)]
pub struct TokenSubject<'a> {
    pub id: &'a str,
    pub email: &'a str,
    pub username: &'a str,
}

/// Result of successful authentication.
#[derive(Debug, Clone)]
pub struct AuthenticationResult {
    /// Signed access token and its expiry
    pub access_token: IssuedToken,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Errors
    /// * `ConfigurationError` - Token settings are missing or unsafe
    pub fn new(config: &TokenConfig) -> Result<Self, ConfigurationError> {
        Ok(Self {
            password_hasher: PasswordHasher::new(),
            jwt_handler: JwtHandler::new(config)?,
        })
    }

    /// Hash a password for storage.
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Check a plaintext password against a stored credential blob.
    pub fn verify_password(&self, password: &str, stored_hash: &str) -> bool {
        self.password_hasher.verify(password, stored_hash)
    }

    /// Verify credentials and generate JWT token.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored credential blob
    /// * `subject` - Identity to encode in the token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match or the blob is malformed
    /// * `JwtError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        subject: TokenSubject<'_>,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        if !self.password_hasher.verify(password, stored_hash) {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.generate_token(subject)?;

        Ok(AuthenticationResult { access_token })
    }

    /// Generate JWT token without password verification.
    pub fn generate_token(&self, subject: TokenSubject<'_>) -> Result<IssuedToken, JwtError> {
        self.jwt_handler
            .issue(subject.id, subject.email, subject.username)
    }

    /// Validate and decode JWT token.
    ///
    /// # Errors
    /// * `InvalidToken` - Token is expired, tampered, or issued for someone else
    pub fn validate_token(&self, token: &str) -> Result<IdentityClaims, JwtError> {
        self.jwt_handler.validate(token)
    }
}
