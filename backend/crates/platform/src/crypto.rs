//! Cryptographic Utilities

use hmac::{Hmac, Mac};
use rand::{RngCore, rngs::OsRng};
use sha2::Sha256;

/// HMAC-SHA256 engine
pub type HmacSha256 = Hmac<Sha256>;

/// Generate cryptographically secure random bytes
pub fn random_bytes(len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    OsRng.fill_bytes(&mut bytes);
    bytes
}

/// Generate `len` random bytes, hex-encoded (lowercase)
pub fn random_hex(len: usize) -> String {
    hex::encode(random_bytes(len))
}

/// Compute HMAC-SHA256 with a key of arbitrary length
///
/// The error case is the `hmac` crate's `InvalidLength`; HMAC itself accepts
/// every key size, so callers normally never see it.
pub fn hmac_sha256(key: &[u8], data: &[u8]) -> Result<[u8; 32], hmac::digest::InvalidLength> {
    let mut mac = HmacSha256::new_from_slice(key)?;
    mac.update(data);
    Ok(mac.finalize().into_bytes().into())
}

/// HMAC-SHA256, hex-encoded (lowercase)
pub fn hmac_sha256_hex(key: &[u8], data: &[u8]) -> Result<String, hmac::digest::InvalidLength> {
    hmac_sha256(key, data).map(hex::encode)
}

/// Constant-time comparison to prevent timing attacks
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut result = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }
    result == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_bytes() {
        let bytes = random_bytes(32);
        assert_eq!(bytes.len(), 32);
        // Should not be all zeros (statistically)
        assert!(bytes.iter().any(|&b| b != 0));
    }

    #[test]
    fn test_random_hex_length_and_alphabet() {
        let id = random_hex(32);
        assert_eq!(id.len(), 64);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert_ne!(id, random_hex(32));
    }

    #[test]
    fn test_hmac_sha256_rfc4231_case_2() {
        // RFC 4231, test case 2
        let mac = hmac_sha256(b"Jefe", b"what do ya want for nothing?").unwrap();
        let expected =
            hex::decode("5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843")
                .unwrap();
        assert_eq!(mac.to_vec(), expected);
    }

    #[test]
    fn test_hmac_hex_depends_on_key() {
        let a = hmac_sha256_hex(b"key-a", b"payload").unwrap();
        let b = hmac_sha256_hex(b"key-b", b"payload").unwrap();
        assert_eq!(a.len(), 64);
        assert_ne!(a, b);
        assert_eq!(a, hmac_sha256_hex(b"key-a", b"payload").unwrap());
    }

    #[test]
    fn test_hmac_accepts_empty_and_long_keys() {
        assert!(hmac_sha256(b"", b"data").is_ok());
        assert!(hmac_sha256(&[7u8; 200], b"data").is_ok());
    }

    #[test]
    fn test_constant_time_eq() {
        let a = [1u8, 2, 3, 4];
        let b = [1u8, 2, 3, 4];
        let c = [1u8, 2, 3, 5];
        assert!(constant_time_eq(&a, &b));
        assert!(!constant_time_eq(&a, &c));
        assert!(!constant_time_eq(&a, &a[..3]));
    }
}
