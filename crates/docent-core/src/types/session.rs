//! Document session storage.
//!
//! Each uploaded document gets its own session keyed by a generated id.
//! Records are replaced wholesale per key; there is no cross-session
//! coupling, so a single `RwLock` over the map is sufficient.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

/// The processed document and its derived artifacts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentSession {
    /// Original filename of the upload.
    pub filename: String,
    /// Extracted plain text of the document.
    pub text: String,
    /// Generated summary.
    pub summary: String,
    /// Generated comprehension questions, in order.
    pub questions: Vec<String>,
}

impl DocumentSession {
    /// Create a new session record.
    pub fn new(
        filename: impl Into<String>,
        text: impl Into<String>,
        summary: impl Into<String>,
        questions: Vec<String>,
    ) -> Self {
        Self {
            filename: filename.into(),
            text: text.into(),
            summary: summary.into(),
            questions,
        }
    }
}

/// Keyed in-memory store of document sessions.
///
/// Sessions live for the process lifetime only; no persistence.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<String, DocumentSession>>>,
}

impl SessionStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a session, returning its generated id.
    pub async fn insert(&self, session: DocumentSession) -> String {
        let id = Uuid::new_v4().to_string();
        self.inner.write().await.insert(id.clone(), session);
        id
    }

    /// Get a snapshot of a session by id.
    pub async fn get(&self, id: &str) -> Option<DocumentSession> {
        self.inner.read().await.get(id).cloned()
    }

    /// Replace the stored questions for a session.
    ///
    /// Returns false if the session does not exist.
    pub async fn set_questions(&self, id: &str, questions: Vec<String>) -> bool {
        match self.inner.write().await.get_mut(id) {
            Some(session) => {
                session.questions = questions;
                true
            }
            None => false,
        }
    }

    /// Remove a session. Returns the removed record, if any.
    pub async fn remove(&self, id: &str) -> Option<DocumentSession> {
        self.inner.write().await.remove(id)
    }

    /// Number of live sessions.
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    /// Check whether the store holds no sessions.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}
