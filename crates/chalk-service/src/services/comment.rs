//! Comment service
//!
//! Creation with reply validation, deletion, and the vote-ranked
//! listing. Ranking happens here, not in SQL: all active comments for
//! the story are loaded with their tallies, scored, stable-sorted, and
//! paginated over the top-level comments only.

use std::collections::HashMap;

use chalk_core::entities::{Comment, NotificationEntity, NotificationType};
use chalk_core::traits::CommentWithVotes;
use chalk_core::{DomainError, Snowflake};
use tracing::{info, instrument, warn};

use crate::dto::{CommentResponse, CreateCommentRequest, PaginatedResponse, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::notification::NotificationService;

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    /// Create a new CommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a comment or reply on a story
    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        user_id: Snowflake,
        story_id: Snowflake,
        request: CreateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        let story = self
            .ctx
            .story_repo()
            .find_by_id(story_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Story", story_id.to_string()))?;

        let parent = match request.parent_id.as_deref() {
            Some(raw) => {
                let parent_id: Snowflake = raw
                    .parse()
                    .map_err(|_| ServiceError::validation("Invalid parent_id"))?;
                let parent = self
                    .ctx
                    .comment_repo()
                    .find_by_id(parent_id)
                    .await?
                    .ok_or(DomainError::CommentNotFound(parent_id))
                    .map_err(ServiceError::from)?;

                // One level of nesting only
                if parent.is_reply() {
                    return Err(ServiceError::from(DomainError::ReplyTooDeep));
                }
                if parent.story_id != story_id {
                    return Err(ServiceError::from(DomainError::ReplyStoryMismatch));
                }
                Some(parent)
            }
            None => None,
        };

        let id = self.ctx.generate_id();
        let comment = match &parent {
            Some(p) => Comment::new_reply(id, story_id, user_id, p.id, request.content),
            None => Comment::new(id, story_id, user_id, request.content),
        };

        self.ctx.comment_repo().create(&comment).await?;

        info!(comment_id = %id, story_id = %story_id, "Comment created");

        let author = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        // Best-effort notifications, after the comment is persisted
        let notifications = NotificationService::new(self.ctx);
        let result = notifications
            .create_notification(
                story.author_id,
                user_id,
                NotificationType::CommentOnStory,
                NotificationEntity::Story,
                story_id,
                format!("{} commented on your story \"{}\"", author.username, story.title),
            )
            .await;
        if let Err(e) = result {
            warn!(story_id = %story_id, error = %e, "Comment notification failed");
        }

        if let Some(parent) = &parent {
            let result = notifications
                .create_notification(
                    parent.author_id,
                    user_id,
                    NotificationType::ReplyToComment,
                    NotificationEntity::Comment,
                    parent.id,
                    format!("{} replied to your comment", author.username),
                )
                .await;
            if let Err(e) = result {
                warn!(parent_id = %parent.id, error = %e, "Reply notification failed");
            }
        }

        Ok(flat_response(&CommentWithVotes {
            comment,
            author,
            upvotes: 0,
            downvotes: 0,
        }))
    }

    /// Delete a comment; author or admin
    #[instrument(skip(self))]
    pub async fn delete(&self, user_id: Snowflake, id: Snowflake) -> ServiceResult<()> {
        let comment = self
            .ctx
            .comment_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::CommentNotFound(id))
            .map_err(ServiceError::from)?;

        if !comment.is_authored_by(user_id) {
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

        self.ctx.comment_repo().delete(id, comment.story_id).await?;

        info!(comment_id = %id, deleted_by = %user_id, "Comment deleted");
        Ok(())
    }

    /// List a story's comments ranked by vote score
    ///
    /// Pagination applies to top-level comments; every reply rides along
    /// with its parent and `total` counts parents only.
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        story_id: Snowflake,
        page: i64,
        per_page: i64,
    ) -> ServiceResult<PaginatedResponse<CommentResponse>> {
        if self.ctx.story_repo().find_by_id(story_id).await?.is_none() {
            return Err(ServiceError::not_found("Story", story_id.to_string()));
        }

        let rows = self.ctx.comment_repo().list_for_story(story_id).await?;
        let (data, total) = assemble_comment_page(&rows, page, per_page);

        Ok(PaginatedResponse::new(data, page, per_page, total))
    }
}

/// Map one loaded row to a response with no replies attached
fn flat_response(row: &CommentWithVotes) -> CommentResponse {
    CommentResponse {
        id: row.comment.id.to_string(),
        story_id: row.comment.story_id.to_string(),
        parent_id: row.comment.parent_id.map(|id| id.to_string()),
        content: row.comment.content.clone(),
        author: UserResponse::from(&row.author),
        upvotes: row.upvotes,
        downvotes: row.downvotes,
        vote_score: row.upvotes - row.downvotes,
        created_at: row.comment.created_at,
        replies: Vec::new(),
    }
}

/// Build one page of the ranked comment tree
///
/// `rows` arrive in load order (`created_at ASC, id ASC`), which the
/// stable sort preserves as the tie-break for equal scores. Returns the
/// page slice and the total count of top-level comments.
fn assemble_comment_page(
    rows: &[CommentWithVotes],
    page: i64,
    per_page: i64,
) -> (Vec<CommentResponse>, i64) {
    let mut parents: Vec<CommentResponse> = Vec::new();
    let mut replies: Vec<(Snowflake, CommentResponse)> = Vec::new();

    for row in rows {
        let response = flat_response(row);
        match row.comment.parent_id {
            Some(parent_id) => replies.push((parent_id, response)),
            None => parents.push(response),
        }
    }

    replies.sort_by_key(|(_, r)| std::cmp::Reverse(r.vote_score));
    let mut by_parent: HashMap<String, Vec<CommentResponse>> = HashMap::new();
    for (parent_id, reply) in replies {
        by_parent.entry(parent_id.to_string()).or_default().push(reply);
    }

    parents.sort_by_key(|p| std::cmp::Reverse(p.vote_score));
    for parent in &mut parents {
        if let Some(children) = by_parent.remove(&parent.id) {
            parent.replies = children;
        }
    }

    let total = parents.len() as i64;
    let start = ((page - 1) * per_page).max(0) as usize;
    let data = parents
        .into_iter()
        .skip(start)
        .take(per_page.max(0) as usize)
        .collect();

    (data, total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chalk_core::entities::User;
    use chrono::{Duration, Utc};

    fn row(
        id: i64,
        parent_id: Option<i64>,
        upvotes: i64,
        downvotes: i64,
        offset_secs: i64,
    ) -> CommentWithVotes {
        let created = Utc::now() + Duration::seconds(offset_secs);
        let mut comment = Comment::new(
            Snowflake::new(id),
            Snowflake::new(100),
            Snowflake::new(200),
            format!("comment {id}"),
        );
        comment.parent_id = parent_id.map(Snowflake::new);
        comment.created_at = created;
        CommentWithVotes {
            comment,
            author: User::new(
                Snowflake::new(200),
                "author".to_string(),
                "author@example.com".to_string(),
            ),
            upvotes,
            downvotes,
        }
    }

    #[test]
    fn test_parents_sorted_by_score_descending() {
        let rows = vec![row(1, None, 1, 0, 0), row(2, None, 5, 0, 1), row(3, None, 3, 0, 2)];
        let (page, total) = assemble_comment_page(&rows, 1, 20);

        assert_eq!(total, 3);
        let ids: Vec<_> = page.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["2", "3", "1"]);
    }

    #[test]
    fn test_equal_scores_keep_load_order() {
        let rows = vec![row(1, None, 2, 0, 0), row(2, None, 2, 0, 1), row(3, None, 2, 0, 2)];
        let (page, _) = assemble_comment_page(&rows, 1, 20);

        let ids: Vec<_> = page.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
    }

    #[test]
    fn test_negative_scores_sort_last() {
        let rows = vec![row(1, None, 0, 4, 0), row(2, None, 1, 0, 1)];
        let (page, _) = assemble_comment_page(&rows, 1, 20);

        assert_eq!(page[0].id, "2");
        assert_eq!(page[1].id, "1");
        assert_eq!(page[1].vote_score, -4);
    }

    #[test]
    fn test_replies_attach_to_parents_and_sort() {
        let rows = vec![
            row(1, None, 0, 0, 0),
            row(10, Some(1), 1, 0, 1),
            row(11, Some(1), 7, 0, 2),
            row(12, Some(1), 3, 0, 3),
        ];
        let (page, total) = assemble_comment_page(&rows, 1, 20);

        // Replies never count toward the total
        assert_eq!(total, 1);
        let reply_ids: Vec<_> = page[0].replies.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(reply_ids, ["11", "12", "10"]);
    }

    #[test]
    fn test_replies_without_a_surviving_parent_are_dropped() {
        // Parent 9 was deleted, so its reply has nothing to attach to
        // and stays out of the listing entirely
        let rows = vec![row(1, None, 0, 0, 0), row(10, Some(1), 0, 0, 1), row(20, Some(9), 0, 0, 2)];
        let (page, total) = assemble_comment_page(&rows, 1, 20);

        assert_eq!(total, 1);
        assert_eq!(page[0].replies.len(), 1);
        assert_eq!(page[0].replies[0].id, "10");
        assert!(page.iter().all(|c| c.id != "20"));
    }

    #[test]
    fn test_pagination_slices_parents_only() {
        let mut rows: Vec<_> = (1..=5).map(|i| row(i, None, 10 - i, 0, i)).collect();
        rows.push(row(50, Some(1), 0, 0, 6));

        let (first, total) = assemble_comment_page(&rows, 1, 2);
        assert_eq!(total, 5);
        assert_eq!(first.len(), 2);
        assert_eq!(first[0].id, "1");
        assert_eq!(first[0].replies.len(), 1);

        let (last, _) = assemble_comment_page(&rows, 3, 2);
        assert_eq!(last.len(), 1);
        assert_eq!(last[0].id, "5");

        let (past_end, _) = assemble_comment_page(&rows, 4, 2);
        assert!(past_end.is_empty());
    }
}
