pub mod document;
pub mod error;
pub mod ids;
pub mod store;

pub use document::{
    ActionReceipt, ActionStatus, DOCUMENT_TYPE, Document, DocumentHeader, Operation,
};
pub use error::{Result, StoreError};
pub use ids::DocumentId;
pub use store::{DocumentStore, MemoryStore};
