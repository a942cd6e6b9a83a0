//! Authentication utilities library
//!
//! Provides the credential-handling core of the user service:
//! - Password hashing (PBKDF2-HMAC-SHA512, `base64(salt).base64(key)` blobs)
//! - JWT issuance and validation bound to an explicit [`TokenConfig`]
//! - Authentication coordination
//!
//! Everything here is stateless after construction and safe to share across
//! concurrent requests.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("not_my_password", &hash));
//! ```
//!
//! ## JWT Tokens
//! ```
//! use auth::{JwtHandler, TokenConfig};
//! use chrono::Duration;
//!
//! let config = TokenConfig::new(
//!     "secret_key_at_least_32_bytes_long!",
//!     "user-service",
//!     "user-clients",
//!     Duration::hours(1),
//! );
//! let handler = JwtHandler::new(&config).unwrap();
//! let issued = handler.issue("user123", "alice@x.com", "alice").unwrap();
//! let claims = handler.validate(&issued.token).unwrap();
//! assert_eq!(claims.sub, "user123");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, TokenConfig, TokenSubject};
//! use chrono::Duration;
//!
//! let config = TokenConfig::new(
//!     "secret_key_at_least_32_bytes_long!",
//!     "user-service",
//!     "user-clients",
//!     Duration::hours(1),
//! );
//! let auth = Authenticator::new(&config).unwrap();
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and generate token
//! let subject = TokenSubject { id: "user123", email: "alice@x.com", username: "alice" };
//! let result = auth.authenticate("password123", &hash, subject).unwrap();
//!
//! // Validate token
//! let claims = auth.validate_token(&result.access_token.token).unwrap();
//! assert_eq!(claims.username, "alice");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use authenticator::TokenSubject;
pub use jwt::ConfigurationError;
pub use jwt::IdentityClaims;
pub use jwt::IssuedToken;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::TokenConfig;
pub use password::PasswordError;
pub use password::PasswordHasher;
