use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use pbkdf2::pbkdf2_hmac;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::Sha512;
use subtle::ConstantTimeEq;

use super::errors::PasswordError;

/// Salt length in bytes (128 bits).
pub const SALT_LENGTH: usize = 16;

/// Derived key length in bytes (256 bits).
pub const KEY_LENGTH: usize = 32;

/// PBKDF2-HMAC-SHA512 iteration count.
pub const ITERATIONS: u32 = 210_000;

const DELIMITER: char = '.';

/// Password hashing implementation.
///
/// Produces credential blobs of the form `base64(salt).base64(derived_key)`,
/// where the key is derived with PBKDF2-HMAC-SHA512. The standard base64
/// alphabet never contains `.`, so the delimiter is unambiguous.
#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordHasher;

impl PasswordHasher {
    /// Create a new password hasher instance.
    pub fn new() -> Self {
        Self
    }

    /// Hash a plaintext password with a fresh random salt.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to hash
    ///
    /// # Returns
    /// Credential blob `base64(salt).base64(derived_key)`
    ///
    /// # Errors
    /// * `EmptyPassword` - Plaintext is empty
    /// * `HashingFailed` - The OS random source could not produce a salt
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        if password.is_empty() {
            return Err(PasswordError::EmptyPassword);
        }

        let mut salt = [0u8; SALT_LENGTH];
        OsRng
            .try_fill_bytes(&mut salt)
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))?;

        let key = derive_key(password.as_bytes(), &salt);

        Ok(format!(
            "{}{}{}",
            STANDARD.encode(salt),
            DELIMITER,
            STANDARD.encode(key)
        ))
    }

    /// Verify a password against a stored credential blob.
    ///
    /// Fails closed: a malformed blob (wrong part count, undecodable base64,
    /// wrong key length) yields `false` rather than an error.
    ///
    /// # Arguments
    /// * `password` - Plaintext candidate
    /// * `hash` - Stored credential blob
    ///
    /// # Returns
    /// True if password matches, false otherwise
    pub fn verify(&self, password: &str, hash: &str) -> bool {
        let Some((salt, stored_key)) = split_blob(hash) else {
            return false;
        };

        let derived = derive_key(password.as_bytes(), &salt);

        derived.len() == stored_key.len()
            && bool::from(derived.as_slice().ct_eq(stored_key.as_slice()))
    }
}

fn derive_key(password: &[u8], salt: &[u8]) -> [u8; KEY_LENGTH] {
    let mut key = [0u8; KEY_LENGTH];
    pbkdf2_hmac::<Sha512>(password, salt, ITERATIONS, &mut key);
    key
}

fn split_blob(hash: &str) -> Option<(Vec<u8>, Vec<u8>)> {
    let mut parts = hash.split(DELIMITER);
    let (Some(salt), Some(key), None) = (parts.next(), parts.next(), parts.next()) else {
        return None;
    };

    let salt = STANDARD.decode(salt).ok()?;
    let key = STANDARD.decode(key).ok()?;

    if salt.is_empty() || key.len() != KEY_LENGTH {
        return None;
    }

    Some((salt, key))
}
