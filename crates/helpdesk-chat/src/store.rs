//! In-memory session store.
//!
//! Each session id maps to one [`SessionRecord`] holding both the session
//! metadata and its transcript, so the two are always created together.
//! Records are never removed. All access goes through a single mutex, and
//! callers that read-then-append do so inside one [`SessionStore::update`]
//! call.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use uuid::Uuid;

use helpdesk_core::types::{now_millis, Session, Turn};

use crate::error::ChatError;

// =============================================================================
// SessionRecord
// =============================================================================

/// Session metadata plus its append-only transcript.
#[derive(Debug, Clone)]
pub struct SessionRecord {
    session: Session,
    transcript: Vec<Turn>,
}

impl SessionRecord {
    fn new(id: String) -> Self {
        Self {
            session: Session::new(id),
            transcript: Vec::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn transcript(&self) -> &[Turn] {
        &self.transcript
    }

    /// Append a turn. Turns are never edited or removed.
    pub fn append(&mut self, turn: Turn) {
        self.transcript.push(turn);
    }

    /// Count one handled message.
    pub fn record_message(&mut self) {
        self.session.message_count += 1;
    }

    /// Flag the session as escalated without recording a reason.
    pub fn mark_escalated(&mut self) {
        self.session.escalated = true;
    }

    /// Escalate with a reason and timestamp. Repeated calls overwrite both.
    pub fn escalate(&mut self, reason: Option<String>) {
        self.session.escalated = true;
        self.session.escalation_reason = reason;
        self.session.escalation_time = Some(now_millis());
    }
}

// =============================================================================
// SessionStore
// =============================================================================

/// Process-wide session map. Entries live for the lifetime of the process.
#[derive(Debug, Default)]
pub struct SessionStore {
    records: Mutex<HashMap<String, SessionRecord>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, SessionRecord>>, ChatError> {
        self.records
            .lock()
            .map_err(|e| ChatError::StorageError(format!("session lock poisoned: {}", e)))
    }

    /// Create a session with a fresh UUIDv4 id and an empty transcript.
    pub fn init(&self) -> Result<Session, ChatError> {
        let id = Uuid::new_v4().to_string();
        let record = SessionRecord::new(id.clone());
        let session = record.session.clone();
        self.lock()?.insert(id, record);
        Ok(session)
    }

    /// Snapshot of a session record.
    pub fn get(&self, id: &str) -> Result<SessionRecord, ChatError> {
        self.lock()?
            .get(id)
            .cloned()
            .ok_or_else(|| ChatError::SessionNotFound(id.to_string()))
    }

    /// Run `f` against a session record while holding the store lock.
    ///
    /// Unknown ids fail with `SessionNotFound` before `f` runs.
    pub fn update<T>(
        &self,
        id: &str,
        f: impl FnOnce(&mut SessionRecord) -> T,
    ) -> Result<T, ChatError> {
        let mut records = self.lock()?;
        let record = records
            .get_mut(id)
            .ok_or_else(|| ChatError::SessionNotFound(id.to_string()))?;
        Ok(f(record))
    }

    pub fn contains(&self, id: &str) -> Result<bool, ChatError> {
        Ok(self.lock()?.contains_key(id))
    }

    /// Number of sessions created so far.
    pub fn len(&self) -> Result<usize, ChatError> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, ChatError> {
        Ok(self.lock()?.is_empty())
    }
}
