//! In-memory session registry
//!
//! Process-local: every session is lost on restart and is not shared between
//! instances.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::domain::entity::SessionRecord;
use crate::domain::repository::SessionStore;
use crate::domain::value_object::SessionId;

/// `HashMap` registry behind a read/write lock
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<SessionId, SessionRecord>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for InMemorySessionStore {
    fn put(&self, id: SessionId, record: SessionRecord) {
        self.sessions.write().insert(id, record);
    }

    fn has(&self, id: &SessionId) -> bool {
        self.sessions.read().contains_key(id)
    }

    fn get(&self, id: &SessionId) -> Option<SessionRecord> {
        self.sessions.read().get(id).copied()
    }

    fn delete(&self, id: &SessionId) -> bool {
        self.sessions.write().remove(id).is_some()
    }

    fn cleanup_expired(&self, now_ms: i64) -> usize {
        let mut sessions = self.sessions.write();
        let before = sessions.len();
        sessions.retain(|_, record| record.expires_at_ms >= now_ms);
        before - sessions.len()
    }

    fn len(&self) -> usize {
        self.sessions.read().len()
    }
}
