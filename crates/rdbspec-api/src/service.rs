use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use rdbspec_model::{
    AddQueryFilterParamInput, AddQuerySpecificationInput, AddRdbColumnInput, AddRdbTableInput,
    DeleteFilterParamInput, DeleteQuerySpecificationInput, DeleteRdbColumnInput,
    DeleteRdbTableInput, SetQuerySpecNameInput, SetSpecInput, SpecificationState,
    UpdateFilterParamInput, UpdateQueryExampleInput, UpdateQuerySchemaInput, UpdateRdbColumnInput,
    UpdateTableNameInput,
};
use rdbspec_reducer::Action;
use rdbspec_store::{Document, DocumentId, DocumentStore, StoreError};

use crate::error::{ApiError, Result};

/// Read-side projection of a document: header fields flattened next to the
/// materialized state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentView {
    pub id: DocumentId,
    pub document_type: String,
    pub name: Option<String>,
    pub created: DateTime<Utc>,
    pub last_modified: DateTime<Utc>,
    pub revision: u64,
    pub state: SpecificationState,
}

impl From<&Document> for DocumentView {
    fn from(document: &Document) -> Self {
        Self {
            id: document.header.id,
            document_type: document.header.document_type.clone(),
            name: document.header.name.clone(),
            created: document.header.created_at_utc,
            last_modified: document.header.last_modified_at_utc,
            revision: document.header.revision,
            state: document.state.clone(),
        }
    }
}

/// One query surface and one mutation per action over a document store.
///
/// Mutations verify the target document exists, forward the action to the
/// store, and surface a store rejection with its reason; there is no retry.
#[derive(Debug, Default)]
pub struct SpecificationService<S: DocumentStore> {
    store: S,
}

impl<S: DocumentStore> SpecificationService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn create_document(&mut self, name: Option<String>) -> Result<DocumentId> {
        self.store.create_document(name).map_err(map_store_error)
    }

    pub fn get_document(&self, id: &DocumentId) -> Result<DocumentView> {
        self.store
            .document(id)
            .map(DocumentView::from)
            .map_err(map_store_error)
    }

    pub fn list_documents(&self) -> Result<Vec<DocumentView>> {
        self.store
            .document_ids()
            .iter()
            .map(|id| self.get_document(id))
            .collect()
    }

    pub fn set_spec(&mut self, id: &DocumentId, input: SetSpecInput) -> Result<()> {
        self.forward(id, Action::SetSpec(input))
    }

    pub fn add_query_specification(
        &mut self,
        id: &DocumentId,
        input: AddQuerySpecificationInput,
    ) -> Result<()> {
        self.forward(id, Action::AddQuerySpecification(input))
    }

    pub fn update_query_schema(
        &mut self,
        id: &DocumentId,
        input: UpdateQuerySchemaInput,
    ) -> Result<()> {
        self.forward(id, Action::UpdateQuerySchema(input))
    }

    pub fn update_query_example(
        &mut self,
        id: &DocumentId,
        input: UpdateQueryExampleInput,
    ) -> Result<()> {
        self.forward(id, Action::UpdateQueryExample(input))
    }

    pub fn delete_query_specification(
        &mut self,
        id: &DocumentId,
        input: DeleteQuerySpecificationInput,
    ) -> Result<()> {
        self.forward(id, Action::DeleteQuerySpecification(input))
    }

    pub fn add_query_filter_param(
        &mut self,
        id: &DocumentId,
        input: AddQueryFilterParamInput,
    ) -> Result<()> {
        self.forward(id, Action::AddQueryFilterParam(input))
    }

    pub fn update_filter_param(
        &mut self,
        id: &DocumentId,
        input: UpdateFilterParamInput,
    ) -> Result<()> {
        self.forward(id, Action::UpdateFilterParam(input))
    }

    pub fn delete_filter_param(
        &mut self,
        id: &DocumentId,
        input: DeleteFilterParamInput,
    ) -> Result<()> {
        self.forward(id, Action::DeleteFilterParam(input))
    }

    pub fn set_query_spec_name(
        &mut self,
        id: &DocumentId,
        input: SetQuerySpecNameInput,
    ) -> Result<()> {
        self.forward(id, Action::SetQuerySpecName(input))
    }

    pub fn add_rdb_table(&mut self, id: &DocumentId, input: AddRdbTableInput) -> Result<()> {
        self.forward(id, Action::AddRdbTable(input))
    }

    pub fn update_table_name(
        &mut self,
        id: &DocumentId,
        input: UpdateTableNameInput,
    ) -> Result<()> {
        self.forward(id, Action::UpdateTableName(input))
    }

    pub fn delete_rdb_table(&mut self, id: &DocumentId, input: DeleteRdbTableInput) -> Result<()> {
        self.forward(id, Action::DeleteRdbTable(input))
    }

    pub fn add_rdb_column(&mut self, id: &DocumentId, input: AddRdbColumnInput) -> Result<()> {
        self.forward(id, Action::AddRdbColumn(input))
    }

    pub fn update_rdb_column(
        &mut self,
        id: &DocumentId,
        input: UpdateRdbColumnInput,
    ) -> Result<()> {
        self.forward(id, Action::UpdateRdbColumn(input))
    }

    pub fn delete_rdb_column(
        &mut self,
        id: &DocumentId,
        input: DeleteRdbColumnInput,
    ) -> Result<()> {
        self.forward(id, Action::DeleteRdbColumn(input))
    }

    fn forward(&mut self, id: &DocumentId, action: Action) -> Result<()> {
        // existence check first, so a missing target reads as not-found
        // rather than as a rejected action
        self.store.document(id).map_err(map_store_error)?;

        let kind = action.kind();
        let value = action.to_value().map_err(|error| ApiError::Rejected {
            action: kind.to_string(),
            reason: error.to_string(),
        })?;
        match self.store.apply(id, value) {
            Ok(receipt) => {
                debug!(%id, action = kind, revision = receipt.revision, "forwarded action");
                Ok(())
            }
            Err(StoreError::DocumentNotFound(missing)) => Err(ApiError::NotFound(missing)),
            Err(StoreError::Rejected(reason)) => Err(ApiError::Rejected {
                action: kind.to_string(),
                reason: reason.to_string(),
            }),
        }
    }
}

fn map_store_error(error: StoreError) -> ApiError {
    match error {
        StoreError::DocumentNotFound(id) => ApiError::NotFound(id),
        StoreError::Rejected(reason) => ApiError::Rejected {
            action: "apply".to_string(),
            reason: reason.to_string(),
        },
    }
}
