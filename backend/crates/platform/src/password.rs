//! Password Derivation and Verification
//!
//! Stored admin passwords are a `(hash, salt)` pair where
//! `hash = hex(PBKDF2-HMAC-SHA512(password, salt, 100_000 iterations, 64 bytes))`.
//!
//! ## Security Features
//! - Fixed, deterministic parameters so existing rows keep verifying
//! - Constant-time comparison of the hex digests
//! - Derived key buffers are zeroized after use
//! - Debug output never contains the hash or salt

use std::fmt;

use pbkdf2::pbkdf2_hmac;
use sha2::Sha512;
use zeroize::Zeroize;

use crate::crypto::{constant_time_eq, random_hex};

// ============================================================================
// Constants
// ============================================================================

/// PBKDF2 iteration count
pub const PBKDF2_ITERATIONS: u32 = 100_000;

/// Derived key length in bytes (hex output is twice as long)
pub const DERIVED_KEY_LEN: usize = 64;

/// Random salt length in bytes for newly provisioned passwords
pub const SALT_LEN: usize = 16;

// ============================================================================
// Stored Password
// ============================================================================

/// A password as persisted in the `admin_users` table
///
/// ## Examples
/// ```rust
/// use platform::password::StoredPassword;
///
/// let stored = StoredPassword::derive("correct horse");
/// assert!(stored.verify("correct horse"));
/// assert!(!stored.verify("battery staple"));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct StoredPassword {
    hash: String,
    salt: String,
}

impl StoredPassword {
    /// Wrap a hash/salt pair read from storage
    pub fn new(hash: impl Into<String>, salt: impl Into<String>) -> Self {
        Self {
            hash: hash.into(),
            salt: salt.into(),
        }
    }

    /// Derive a new stored password with a fresh random salt
    pub fn derive(password: &str) -> Self {
        let salt = random_hex(SALT_LEN);
        let hash = derive_hash(password, &salt);
        Self { hash, salt }
    }

    /// Hex-encoded derived key
    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// Salt, used verbatim as the PBKDF2 salt bytes
    pub fn salt(&self) -> &str {
        &self.salt
    }

    /// Verify a clear text password against this hash
    pub fn verify(&self, password: &str) -> bool {
        verify_password(password, &self.hash, &self.salt)
    }
}

impl fmt::Debug for StoredPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoredPassword")
            .field("hash", &"[HASH]")
            .field("salt", &"[SALT]")
            .finish()
    }
}

// ============================================================================
// Functions
// ============================================================================

/// Derive the hex digest for `password` and `salt`
pub fn derive_hash(password: &str, salt: &str) -> String {
    derive_hash_with(password, salt, PBKDF2_ITERATIONS)
}

/// Verify `password` against a stored `(hash, salt)` pair
///
/// A hash of the wrong length or alphabet simply fails to match; this
/// function never panics. An empty salt is a valid (if weak) PBKDF2 salt.
pub fn verify_password(password: &str, hash: &str, salt: &str) -> bool {
    if hash.len() != DERIVED_KEY_LEN * 2 {
        return false;
    }

    let candidate = derive_hash(password, salt);
    constant_time_eq(candidate.as_bytes(), hash.as_bytes())
}

fn derive_hash_with(password: &str, salt: &str, iterations: u32) -> String {
    let mut key = [0u8; DERIVED_KEY_LEN];
    pbkdf2_hmac::<Sha512>(password.as_bytes(), salt.as_bytes(), iterations, &mut key);
    let encoded = hex::encode(key);
    key.zeroize();
    encoded
}

// ============================================================================
// Tests
// ============================================================================
