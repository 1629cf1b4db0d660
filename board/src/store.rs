//! Seams to the external collaborators: the document store that persists
//! finished tactics and the identity provider that names the acting user.
//!
//! The editor never talks to a backend itself. Hosts implement
//! [`DocumentStore`] over whatever transport they use; [`MemoryStore`] is the
//! in-process implementation used by tests and offline sessions.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::HashMap;

use crate::doc::{Document, new_id};

/// Error surfaced by a [`DocumentStore`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No tactic is stored under the given id.
    #[error("tactic not found: {0}")]
    NotFound(String),
    /// The document could not be encoded or a stored record could not be decoded.
    #[error("failed to encode or decode document: {0}")]
    Codec(#[from] serde_json::Error),
    /// The backing store refused the request.
    #[error("document store error: {0}")]
    Backend(String),
}

/// Metadata persisted alongside a document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TacticMeta {
    pub title: String,
    /// Acting user, if the identity provider knows one.
    pub author_id: Option<String>,
}

/// Persists documents and hands them back by id.
pub trait DocumentStore {
    /// Store `document` verbatim and return its new id.
    ///
    /// # Errors
    ///
    /// Implementation-defined; see [`StoreError`].
    fn save(&mut self, document: &Document, meta: &TacticMeta) -> Result<String, StoreError>;

    /// Fetch a previously saved document.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] when `id` is unknown.
    fn load(&self, id: &str) -> Result<Document, StoreError>;
}

/// Supplies the acting user's id to the persistence layer.
pub trait IdentityProvider {
    fn user_id(&self) -> Option<String>;
}

/// Identity provider with a fixed answer.
#[derive(Debug, Clone, Default)]
pub struct StaticIdentity(pub Option<String>);

impl IdentityProvider for StaticIdentity {
    fn user_id(&self) -> Option<String> {
        self.0.clone()
    }
}

/// A stored tactic: metadata plus the serialized document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredTactic {
    pub meta: TacticMeta,
    pub json: String,
}

/// In-memory [`DocumentStore`] keeping the serialized JSON of each save.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: HashMap<String, StoredTactic>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&StoredTactic> {
        self.records.get(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl DocumentStore for MemoryStore {
    fn save(&mut self, document: &Document, meta: &TacticMeta) -> Result<String, StoreError> {
        let json = serde_json::to_string(document)?;
        let id = new_id();
        self.records.insert(id.clone(), StoredTactic { meta: meta.clone(), json });
        Ok(id)
    }

    fn load(&self, id: &str) -> Result<Document, StoreError> {
        let record = self.records.get(id).ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        Ok(serde_json::from_str(&record.json)?)
    }
}
