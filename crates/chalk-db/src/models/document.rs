//! Document database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the documents table
#[derive(Debug, Clone, FromRow)]
pub struct DocumentModel {
    pub id: i64,
    pub owner_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub file_url: String,
    pub subject: Option<String>,
    pub save_count: i32,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl DocumentModel {
    /// Check if document is soft deleted
    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}
