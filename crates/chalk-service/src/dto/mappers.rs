//! Entity -> response DTO mappers

use chalk_core::entities::{Document, Notification, Reaction, Story, User};

use super::responses::{
    CurrentUserResponse, DocumentResponse, NotificationResponse, ReactionResponse,
    ReactionWithUserResponse, StoryResponse, UserResponse,
};

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.clone(),
            bio: user.bio.clone(),
            avatar: user.avatar.clone(),
            role: user.role.as_str().to_string(),
            created_at: user.created_at,
        }
    }
}

impl From<&User> for CurrentUserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.clone(),
            email: user.email.clone(),
            bio: user.bio.clone(),
            avatar: user.avatar.clone(),
            role: user.role.as_str().to_string(),
            is_active: user.is_active,
            created_at: user.created_at,
        }
    }
}

impl From<&Story> for StoryResponse {
    fn from(story: &Story) -> Self {
        Self {
            id: story.id.to_string(),
            author_id: story.author_id.to_string(),
            title: story.title.clone(),
            content: story.content.clone(),
            image_url: story.image_url.clone(),
            like_count: story.like_count,
            comment_count: story.comment_count,
            view_count: story.view_count,
            created_at: story.created_at,
            updated_at: story.updated_at,
        }
    }
}

impl From<&Reaction> for ReactionResponse {
    fn from(reaction: &Reaction) -> Self {
        Self {
            id: reaction.id.to_string(),
            user_id: reaction.user_id.to_string(),
            target_type: reaction.target.kind.as_str().to_string(),
            target_id: reaction.target.id.to_string(),
            reaction_type: reaction.reaction_type.as_str().to_string(),
            created_at: reaction.created_at,
        }
    }
}

impl From<&(Reaction, User)> for ReactionWithUserResponse {
    fn from((reaction, user): &(Reaction, User)) -> Self {
        Self {
            id: reaction.id.to_string(),
            reaction_type: reaction.reaction_type.as_str().to_string(),
            user: UserResponse::from(user),
            created_at: reaction.created_at,
        }
    }
}

impl From<&Notification> for NotificationResponse {
    fn from(notification: &Notification) -> Self {
        Self {
            id: notification.id.to_string(),
            actor_id: notification.actor_id.to_string(),
            notification_type: notification.notification_type.as_str().to_string(),
            entity_type: notification.entity_type.as_str().to_string(),
            entity_id: notification.entity_id.to_string(),
            message: notification.message.clone(),
            is_read: notification.is_read,
            created_at: notification.created_at,
        }
    }
}

impl From<&Document> for DocumentResponse {
    fn from(document: &Document) -> Self {
        Self {
            id: document.id.to_string(),
            owner_id: document.owner_id.to_string(),
            title: document.title.clone(),
            description: document.description.clone(),
            file_url: document.file_url.clone(),
            subject: document.subject.clone(),
            save_count: document.save_count,
            created_at: document.created_at,
        }
    }
}
