use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as _;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Argon2;

use crate::errors::PasswordError;

/// Well-formed hash with the default Argon2 parameters that no password
/// is known to match.
const UNMATCHABLE_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$cFNmZZgVj53dA5Mhm/IdTg$nsGnPpAFBcQj+P/60Fk3W7STk10BVbraPOTOSnyChvw";

/// Argon2id password hashing with a random salt per hash.
///
/// Hashes are PHC strings, so parameters and salt travel with the hash and
/// verification needs nothing but the stored string.
#[derive(Debug, Default, Clone, Copy)]
pub struct PasswordHasher;

impl PasswordHasher {
    pub fn new() -> Self {
        Self
    }

    /// Hash a plaintext password for storage.
    ///
    /// # Errors
    /// * `HashingFailed` - Argon2 rejected the input or parameters
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Check a plaintext password against a stored PHC hash.
    ///
    /// The digest comparison inside Argon2 runs in constant time.
    ///
    /// # Returns
    /// `true` when the password matches
    ///
    /// # Errors
    /// * `MalformedHash` - The stored string is not a PHC hash
    pub fn verify(&self, password: &str, stored_hash: &str) -> Result<bool, PasswordError> {
        let parsed = PasswordHash::new(stored_hash)
            .map_err(|e| PasswordError::MalformedHash(e.to_string()))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }

    /// Run a full verification with no stored hash to check against.
    ///
    /// Used when a login names an unknown account, so the response takes as
    /// long as a wrong password would.
    pub fn verify_unknown(&self, password: &str) {
        let _ = self.verify(password, UNMATCHABLE_HASH);
    }
}
