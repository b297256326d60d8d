//! Document entity - a shared teaching resource

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Document entity
///
/// `file_url` is an opaque string supplied by the client; the platform
/// does not handle uploads. `save_count` is a best-effort counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub id: Snowflake,
    pub owner_id: Snowflake,
    pub title: String,
    pub description: Option<String>,
    pub file_url: String,
    pub subject: Option<String>,
    pub save_count: i32,
    pub created_at: DateTime<Utc>,
}

impl Document {
    pub fn new(id: Snowflake, owner_id: Snowflake, title: String, file_url: String) -> Self {
        Self {
            id,
            owner_id,
            title,
            description: None,
            file_url,
            subject: None,
            save_count: 0,
            created_at: Utc::now(),
        }
    }

    #[inline]
    pub fn is_owned_by(&self, user_id: Snowflake) -> bool {
        self.owner_id == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_document() {
        let doc = Document::new(
            Snowflake::new(1),
            Snowflake::new(2),
            "Photosynthesis worksheet".to_string(),
            "https://files.example.com/ws.pdf".to_string(),
        );
        assert_eq!(doc.save_count, 0);
        assert!(doc.is_owned_by(Snowflake::new(2)));
    }
}
