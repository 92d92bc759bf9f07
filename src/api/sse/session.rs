//! Session registry for SSE connections

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use uuid::Uuid;

use crate::utils::time::current_timestamp;

/// One logical client connection
#[derive(Debug, Clone)]
pub struct Session {
    pub id: String,
    pub connected_at: u64,
    pub active: bool,
}

/// Registry of active sessions keyed by opaque id.
///
/// Each session is only ever mutated by the stream task that owns it, so a
/// plain mutex around insert/remove is all the coordination required;
/// lookups are read-only and tolerate races.
#[derive(Clone)]
pub struct SessionRegistry {
    sessions: Arc<Mutex<HashMap<String, Session>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Allocate a new session with a process-unique id
    pub fn create(&self) -> Session {
        let session = Session {
            id: Uuid::new_v4().to_string(),
            connected_at: current_timestamp(),
            active: true,
        };
        self.sessions
            .lock()
            .unwrap()
            .insert(session.id.clone(), session.clone());
        session
    }

    /// O(1) existence check
    pub fn exists(&self, id: &str) -> bool {
        self.sessions.lock().unwrap().contains_key(id)
    }

    /// Remove a session; removing an unknown id is a no-op
    pub fn remove(&self, id: &str) {
        self.sessions.lock().unwrap().remove(id);
    }

    /// Number of active sessions
    pub fn count(&self) -> usize {
        self.sessions.lock().unwrap().len()
    }
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Removes its session from the registry when dropped.
///
/// Owned by the SSE stream, so cleanup runs on every exit path: client
/// disconnect, framing failure, and server shutdown.
pub struct SessionGuard {
    registry: SessionRegistry,
    id: String,
}

impl SessionGuard {
    pub fn new(registry: SessionRegistry, id: String) -> Self {
        Self { registry, id }
    }
}

impl Drop for SessionGuard {
    fn drop(&mut self) {
        self.registry.remove(&self.id);
        tracing::debug!(session_id = %self.id, "session closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_lifecycle() {
        let registry = SessionRegistry::new();

        let session = registry.create();
        assert!(session.active);
        assert!(registry.exists(&session.id));
        assert_eq!(registry.count(), 1);

        registry.remove(&session.id);
        assert!(!registry.exists(&session.id));
        assert_eq!(registry.count(), 0);

        // Idempotent: removing again is a no-op
        registry.remove(&session.id);
        assert_eq!(registry.count(), 0);
    }

    #[test]
    fn test_session_ids_unique() {
        let registry = SessionRegistry::new();
        let a = registry.create();
        let b = registry.create();
        assert_ne!(a.id, b.id);
        assert_eq!(registry.count(), 2);
    }

    #[test]
    fn test_guard_removes_on_drop() {
        let registry = SessionRegistry::new();
        let session = registry.create();

        {
            let _guard = SessionGuard::new(registry.clone(), session.id.clone());
            assert!(registry.exists(&session.id));
        }

        assert!(!registry.exists(&session.id));
    }
}
