//! Comment entity <-> model mapper

use chalk_core::entities::{Comment, User};
use chalk_core::traits::CommentWithVotes;
use chalk_core::value_objects::{Snowflake, UserRole};

use crate::models::{CommentModel, CommentVoteModel};

/// Convert CommentModel to Comment entity
impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: Snowflake::new(model.id),
            story_id: Snowflake::new(model.story_id),
            author_id: Snowflake::new(model.author_id),
            parent_id: model.parent_id.map(Snowflake::new),
            content: model.content,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Split the joined listing row into comment, author, and vote tallies
impl From<CommentVoteModel> for CommentWithVotes {
    fn from(model: CommentVoteModel) -> Self {
        CommentWithVotes {
            comment: Comment {
                id: Snowflake::new(model.id),
                story_id: Snowflake::new(model.story_id),
                author_id: Snowflake::new(model.author_id),
                parent_id: model.parent_id.map(Snowflake::new),
                content: model.content,
                created_at: model.created_at,
                updated_at: model.updated_at,
            },
            author: User {
                id: Snowflake::new(model.author_id),
                username: model.author_username,
                email: model.author_email,
                bio: model.author_bio,
                avatar: model.author_avatar,
                role: UserRole::parse(&model.author_role),
                is_active: model.author_is_active,
                created_at: model.author_created_at,
                updated_at: model.author_updated_at,
            },
            upvotes: model.upvotes,
            downvotes: model.downvotes,
        }
    }
}

/// Convert Comment entity reference to values for database insertion
pub struct CommentInsert<'a> {
    pub id: i64,
    pub story_id: i64,
    pub author_id: i64,
    pub parent_id: Option<i64>,
    pub content: &'a str,
}

impl<'a> CommentInsert<'a> {
    pub fn new(comment: &'a Comment) -> Self {
        Self {
            id: comment.id.into_inner(),
            story_id: comment.story_id.into_inner(),
            author_id: comment.author_id.into_inner(),
            parent_id: comment.parent_id.map(Snowflake::into_inner),
            content: &comment.content,
        }
    }
}
