//! Story entity <-> model mapper

use chalk_core::entities::Story;
use chalk_core::value_objects::Snowflake;

use crate::models::StoryModel;

/// Convert StoryModel to Story entity
impl From<StoryModel> for Story {
    fn from(model: StoryModel) -> Self {
        Story {
            id: Snowflake::new(model.id),
            author_id: Snowflake::new(model.author_id),
            title: model.title,
            content: model.content,
            image_url: model.image_url,
            like_count: model.like_count,
            comment_count: model.comment_count,
            view_count: model.view_count,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Convert Story entity reference to values for database insertion
pub struct StoryInsert<'a> {
    pub id: i64,
    pub author_id: i64,
    pub title: &'a str,
    pub content: &'a str,
    pub image_url: Option<&'a str>,
}

impl<'a> StoryInsert<'a> {
    pub fn new(story: &'a Story) -> Self {
        Self {
            id: story.id.into_inner(),
            author_id: story.author_id.into_inner(),
            title: &story.title,
            content: &story.content,
            image_url: story.image_url.as_deref(),
        }
    }
}
