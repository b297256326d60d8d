//! Document entity <-> model mapper

use chalk_core::entities::Document;
use chalk_core::value_objects::Snowflake;

use crate::models::DocumentModel;

/// Convert DocumentModel to Document entity
impl From<DocumentModel> for Document {
    fn from(model: DocumentModel) -> Self {
        Document {
            id: Snowflake::new(model.id),
            owner_id: Snowflake::new(model.owner_id),
            title: model.title,
            description: model.description,
            file_url: model.file_url,
            subject: model.subject,
            save_count: model.save_count,
            created_at: model.created_at,
        }
    }
}

/// Convert Document entity reference to values for database insertion
pub struct DocumentInsert<'a> {
    pub id: i64,
    pub owner_id: i64,
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub file_url: &'a str,
    pub subject: Option<&'a str>,
}

impl<'a> DocumentInsert<'a> {
    pub fn new(document: &'a Document) -> Self {
        Self {
            id: document.id.into_inner(),
            owner_id: document.owner_id.into_inner(),
            title: &document.title,
            description: document.description.as_deref(),
            file_url: &document.file_url,
            subject: document.subject.as_deref(),
        }
    }
}
