//! Session Token
//!
//! Wire format: `id:expiresAtEpochMs:signature` where `signature` is the
//! lowercase hex HMAC-SHA256 of `id:expiresAtEpochMs`.

use crate::domain::value_object::session_id::SessionId;
use crate::error::TokenRejection;

/// Separator between token fields
pub const TOKEN_SEPARATOR: char = ':';

/// A signed session token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken {
    pub session_id: SessionId,
    pub expires_at_ms: i64,
    pub signature: String,
}

impl SessionToken {
    /// The bytes covered by the signature
    pub fn signing_payload(session_id: &SessionId, expires_at_ms: i64) -> String {
        format!("{}{}{}", session_id, TOKEN_SEPARATOR, expires_at_ms)
    }

    /// Encode for transport (before cookie percent-encoding)
    pub fn encode(&self) -> String {
        format!(
            "{}{}{}{}{}",
            self.session_id, TOKEN_SEPARATOR, self.expires_at_ms, TOKEN_SEPARATOR, self.signature
        )
    }
}

/// The three raw fields of a token string, not yet verified
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenParts<'a> {
    pub id: &'a str,
    pub expires_at: &'a str,
    pub signature: &'a str,
}

impl<'a> TokenParts<'a> {
    /// Split a token into exactly three non-empty fields
    pub fn split(raw: &'a str) -> Result<Self, TokenRejection> {
        let parts: Vec<&str> = raw.split(TOKEN_SEPARATOR).collect();
        if parts.len() != 3 || parts.iter().any(|part| part.is_empty()) {
            return Err(TokenRejection::InvalidFormat);
        }

        Ok(Self {
            id: parts[0],
            expires_at: parts[1],
            signature: parts[2],
        })
    }

    /// Parse the expiry field; anything but an integer counts as expired
    pub fn expires_at_ms(&self) -> Result<i64, TokenRejection> {
        self.expires_at
            .parse::<i64>()
            .map_err(|_| TokenRejection::ExpiredToken)
    }

    /// `id:expiresAt` exactly as received
    pub fn signing_payload(&self) -> String {
        format!("{}{}{}", self.id, TOKEN_SEPARATOR, self.expires_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_then_split() {
        let token = SessionToken {
            session_id: SessionId::from_token_part("abc"),
            expires_at_ms: 1_700_000_000_000,
            signature: "f00d".to_string(),
        };

        let encoded = token.encode();
        assert_eq!(encoded, "abc:1700000000000:f00d");

        let parts = TokenParts::split(&encoded).unwrap();
        assert_eq!(parts.id, "abc");
        assert_eq!(parts.expires_at_ms(), Ok(1_700_000_000_000));
        assert_eq!(parts.signature, "f00d");
        assert_eq!(parts.signing_payload(), "abc:1700000000000");
    }

    #[test]
    fn test_split_rejects_bad_shapes() {
        for raw in ["", "abc", "abc:123", "abc:123:sig:extra", ":123:sig", "abc::sig", "abc:123:"] {
            assert_eq!(
                TokenParts::split(raw),
                Err(TokenRejection::InvalidFormat),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_unparsable_expiry_is_expired() {
        let parts = TokenParts::split("abc:soon:sig").unwrap();
        assert_eq!(parts.expires_at_ms(), Err(TokenRejection::ExpiredToken));
    }
}
