use std::collections::BTreeMap;

use serde_json::Value;
use tracing::info;

use crate::document::{ActionReceipt, Document};
use crate::error::{Result, StoreError};
use crate::ids::DocumentId;

/// The narrow collaborator interface the specification core requires of a
/// document host: create, fetch, enumerate, and apply-action-to-state.
pub trait DocumentStore {
    fn create_document(&mut self, name: Option<String>) -> Result<DocumentId>;

    fn document(&self, id: &DocumentId) -> Result<&Document>;

    fn document_ids(&self) -> Vec<DocumentId>;

    fn apply(&mut self, id: &DocumentId, action: Value) -> Result<ActionReceipt>;
}

/// In-memory store keyed by document id. Actions are sequenced in call
/// order; each apply is atomic with respect to the stored document.
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: BTreeMap<DocumentId, Document>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Adopt an externally loaded document (e.g. read from a file host),
    /// keyed by its header id.
    pub fn insert(&mut self, document: Document) -> DocumentId {
        let id = document.header.id;
        self.documents.insert(id, document);
        id
    }
}

impl DocumentStore for MemoryStore {
    fn create_document(&mut self, name: Option<String>) -> Result<DocumentId> {
        let id = DocumentId::generate();
        self.documents.insert(id, Document::new(id, name));
        info!(%id, "created document");
        Ok(id)
    }

    fn document(&self, id: &DocumentId) -> Result<&Document> {
        self.documents
            .get(id)
            .ok_or(StoreError::DocumentNotFound(*id))
    }

    fn document_ids(&self) -> Vec<DocumentId> {
        self.documents.keys().copied().collect()
    }

    fn apply(&mut self, id: &DocumentId, action: Value) -> Result<ActionReceipt> {
        let document = self
            .documents
            .get_mut(id)
            .ok_or(StoreError::DocumentNotFound(*id))?;
        document.apply(action)
    }
}
