use chrono::{DateTime, Utc};
use docsum_llm::DEFAULT_FILE_NAME;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// State of one interactive session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Last successfully generated text
    pub generated_text: String,

    /// Filename for the exported document
    pub file_name: String,

    /// When the current text was generated
    pub generated_at: Option<DateTime<Utc>>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            generated_text: String::new(),
            file_name: DEFAULT_FILE_NAME.to_string(),
            generated_at: None,
        }
    }
}

impl Session {
    /// Whether there is anything to render or download
    pub fn has_result(&self) -> bool {
        !self.generated_text.is_empty()
    }
}

/// Per-session state keyed by session id
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Issue a new session id with default state
    pub async fn create(&self) -> String {
        let session_id = Uuid::new_v4().to_string();
        self.initialize(&session_id).await;
        session_id
    }

    /// Insert default state unless the session already exists.
    /// Returns whether a new session was created.
    pub async fn initialize(&self, session_id: &str) -> bool {
        let mut sessions = self.sessions.write().await;
        if sessions.contains_key(session_id) {
            return false;
        }
        sessions.insert(session_id.to_string(), Session::default());
        true
    }

    /// Replace text, filename and timestamp in one step
    pub async fn update(&self, session_id: &str, text: String, file_name: &str) -> Session {
        let session = Session {
            generated_text: text,
            file_name: file_name.to_string(),
            generated_at: Some(Utc::now()),
        };

        self.sessions
            .write()
            .await
            .insert(session_id.to_string(), session.clone());
        session
    }

    /// Current state; unknown ids read as a fresh session
    pub async fn read(&self, session_id: &str) -> Session {
        self.sessions
            .read()
            .await
            .get(session_id)
            .cloned()
            .unwrap_or_default()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_initialize_is_idempotent() {
        let store = SessionStore::new();
        assert!(store.initialize("s1").await);

        store.update("s1", "### 요약".to_string(), "기획서.docx").await;
        assert!(!store.initialize("s1").await);

        let session = store.read("s1").await;
        assert_eq!(session.generated_text, "### 요약");
        assert_eq!(session.file_name, "기획서.docx");
    }

    #[tokio::test]
    async fn test_defaults() {
        let store = SessionStore::new();
        let id = store.create().await;
        let session = store.read(&id).await;
        assert_eq!(session, Session::default());
        assert_eq!(session.file_name, "정리결과.docx");
        assert!(!session.has_result());
        assert!(session.generated_at.is_none());
    }

    #[tokio::test]
    async fn test_read_unknown_session_never_fails() {
        let store = SessionStore::new();
        assert_eq!(store.read("missing").await, Session::default());
    }

    #[tokio::test]
    async fn test_update_replaces_all_fields_together() {
        let store = SessionStore::new();
        let id = store.create().await;

        let first = store.update(&id, "첫 결과".to_string(), "내용정리리포트.docx").await;
        let second = store.update(&id, "둘째 결과".to_string(), "기획서.docx").await;

        let current = store.read(&id).await;
        assert_eq!(current, second);
        assert_ne!(current.generated_text, first.generated_text);
        assert!(current.generated_at.is_some());
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let store = SessionStore::new();
        let a = store.create().await;
        let b = store.create().await;
        assert_ne!(a, b);

        store.update(&a, "A".to_string(), "기획서.docx").await;
        assert_eq!(store.read(&b).await, Session::default());
    }
}
