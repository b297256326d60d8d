//! Document service
//!
//! Shared teaching materials: create, list, delete, and the
//! save/unsave bookmark pair with its denormalized counter.

use chalk_core::entities::Document;
use chalk_core::{DomainError, Snowflake};
use tracing::{info, instrument};

use crate::dto::{CreateDocumentRequest, DocumentResponse, PaginatedResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Document service
pub struct DocumentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> DocumentService<'a> {
    /// Create a new DocumentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Share a document
    #[instrument(skip(self, request), fields(title = %request.title))]
    pub async fn create(
        &self,
        owner_id: Snowflake,
        request: CreateDocumentRequest,
    ) -> ServiceResult<DocumentResponse> {
        let mut document = Document::new(
            self.ctx.generate_id(),
            owner_id,
            request.title,
            request.file_url,
        );
        document.description = request.description;
        document.subject = request.subject;

        self.ctx.document_repo().create(&document).await?;

        info!(document_id = %document.id, owner_id = %owner_id, "Document shared");
        Ok(DocumentResponse::from(&document))
    }

    /// Get a document
    #[instrument(skip(self))]
    pub async fn get(&self, id: Snowflake) -> ServiceResult<DocumentResponse> {
        let document = self
            .ctx
            .document_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Document", id.to_string()))?;

        Ok(DocumentResponse::from(&document))
    }

    /// Paginated listing, newest first
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        page: i64,
        per_page: i64,
    ) -> ServiceResult<PaginatedResponse<DocumentResponse>> {
        let offset = (page - 1) * per_page;
        let documents = self.ctx.document_repo().list(per_page, offset).await?;
        let total = self.ctx.document_repo().count().await?;

        let data = documents.iter().map(DocumentResponse::from).collect();
        Ok(PaginatedResponse::new(data, page, per_page, total))
    }

    /// Soft delete a document; owner or admin
    #[instrument(skip(self))]
    pub async fn delete(&self, user_id: Snowflake, id: Snowflake) -> ServiceResult<()> {
        let document = self
            .ctx
            .document_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Document", id.to_string()))?;

        if document.owner_id != user_id {
            let actor = self
                .ctx
                .user_repo()
                .find_by_id(user_id)
                .await?
                .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;
            if !actor.is_admin() {
                return Err(ServiceError::from(DomainError::NotResourceOwner));
            }
        }

        self.ctx.document_repo().delete(id).await?;

        info!(document_id = %id, deleted_by = %user_id, "Document deleted");
        Ok(())
    }

    /// Save a document to the caller's collection
    #[instrument(skip(self))]
    pub async fn save(&self, user_id: Snowflake, id: Snowflake) -> ServiceResult<()> {
        if self.ctx.document_repo().find_by_id(id).await?.is_none() {
            return Err(ServiceError::not_found("Document", id.to_string()));
        }

        // Duplicate saves surface as AlreadySaved from the repository
        self.ctx.document_repo().save(user_id, id).await?;

        info!(document_id = %id, user_id = %user_id, "Document saved");
        Ok(())
    }

    /// Remove a document from the caller's collection
    #[instrument(skip(self))]
    pub async fn unsave(&self, user_id: Snowflake, id: Snowflake) -> ServiceResult<()> {
        self.ctx.document_repo().unsave(user_id, id).await?;

        info!(document_id = %id, user_id = %user_id, "Document unsaved");
        Ok(())
    }
}
