use std::fmt;

use platform::crypto::random_hex;

/// Random bytes behind a session id (256 bits)
pub const SESSION_ID_BYTES: usize = 32;

/// Opaque session identifier (64 lowercase hex chars when generated here)
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    /// Generate a fresh random session id
    pub fn generate() -> Self {
        Self(random_hex(SESSION_ID_BYTES))
    }

    /// Wrap an id taken from a token
    pub fn from_token_part(part: &str) -> Self {
        Self(part.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Prefix safe to put in logs
    pub fn short(&self) -> &str {
        let end = self
            .0
            .char_indices()
            .nth(8)
            .map(|(idx, _)| idx)
            .unwrap_or(self.0.len());
        &self.0[..end]
    }
}

impl fmt::Debug for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionId({}…)", self.short())
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
