//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL, JWT_SECRET, API_PORT
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;

/// Register a fresh user and return the auth payload
async fn register(server: &TestServer) -> AuthResponse {
    let request = RegisterRequest::unique();
    let response = server.post("/api/auth/register", &request).await.unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

/// Create a story as the given user and return it
async fn create_story(server: &TestServer, token: &str) -> StoryResponse {
    let request = CreateStoryRequest::unique();
    let response = server
        .post_auth("/api/stories", token, &request)
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server.post("/api/auth/register", &request).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(auth.user.username, request.username);
    assert_eq!(auth.user.role, "teacher");
    assert_eq!(auth.token_type, "Bearer");
    assert!(!auth.access_token.is_empty());
    assert!(!auth.refresh_token.is_empty());
}

#[tokio::test]
async fn test_register_duplicate_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    // First registration
    server.post("/api/auth/register", &request).await.unwrap();

    // Second registration with same email
    let response = server.post("/api/auth/register", &request).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_register_weak_password() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = RegisterRequest::unique();
    request.password = "alllowercase".to_string();

    let response = server.post("/api/auth/register", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // Register first
    let register_req = RegisterRequest::unique();
    server
        .post("/api/auth/register", &register_req)
        .await
        .unwrap();

    // Login
    let login_req = LoginRequest::from_register(&register_req);
    let response = server.post("/api/auth/login", &login_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(auth.user.username, register_req.username);
    assert!(!auth.access_token.is_empty());
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let login_req = LoginRequest {
        email: "nonexistent@example.com".to_string(),
        password: "WrongPass123".to_string(),
    };

    let response = server.post("/api/auth/login", &login_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_refresh_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;

    let refresh_req = RefreshTokenRequest {
        refresh_token: auth.refresh_token.clone(),
    };
    let response = server.post("/api/auth/refresh", &refresh_req).await.unwrap();
    let refreshed: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(!refreshed.access_token.is_empty());
    assert_eq!(refreshed.user.id, auth.user.id);
}

#[tokio::test]
async fn test_protected_route_requires_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/users/me").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();

    let response = server.get_auth("/api/users/me", "not-a-jwt").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

// ============================================================================
// User and Profile Tests
// ============================================================================

#[tokio::test]
async fn test_get_current_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;

    let response = server
        .get_auth("/api/users/me", &auth.access_token)
        .await
        .unwrap();
    let me: CurrentUserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(me.id, auth.user.id);
    assert!(me.is_active);
}

#[tokio::test]
async fn test_update_profile() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;

    let update = serde_json::json!({ "bio": "Fourth grade, twelve years in" });
    let response = server
        .patch_auth("/api/users/me", &auth.access_token, &update)
        .await
        .unwrap();
    let me: CurrentUserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(me.bio.as_deref(), Some("Fourth grade, twelve years in"));
}

#[tokio::test]
async fn test_public_profile_counts() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = register(&server).await;
    let reader = register(&server).await;

    create_story(&server, &author.access_token).await;
    let follow_path = format!("/api/users/{}/follow", author.user.id);
    server
        .post_auth_empty(&follow_path, &reader.access_token)
        .await
        .unwrap();

    let response = server
        .get(&format!("/api/users/{}", author.user.id))
        .await
        .unwrap();
    let profile: ProfileResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(profile.story_count, 1);
    assert_eq!(profile.follower_count, 1);
    assert_eq!(profile.following_count, 0);
}

// ============================================================================
// Story Tests
// ============================================================================

#[tokio::test]
async fn test_story_crud() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;
    let story = create_story(&server, &auth.access_token).await;

    // Reads count views
    let path = format!("/api/stories/{}", story.id);
    let response = server.get(&path).await.unwrap();
    let fetched: StoryResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.view_count, 1);

    // Author can update
    let update = serde_json::json!({ "title": "Revised title" });
    let response = server
        .patch_auth(&path, &auth.access_token, &update)
        .await
        .unwrap();
    let updated: StoryResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.title, "Revised title");

    // A different user cannot
    let other = register(&server).await;
    let response = server
        .patch_auth(&path, &other.access_token, &update)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    // Author can delete; the story then 404s
    let response = server.delete_auth(&path, &auth.access_token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
    let response = server.get(&path).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_feed_shows_followed_authors() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = register(&server).await;
    let reader = register(&server).await;

    let story = create_story(&server, &author.access_token).await;

    // Empty before following
    let response = server
        .get_auth("/api/stories/feed", &reader.access_token)
        .await
        .unwrap();
    let feed: PaginatedResponse<StoryResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert!(feed.data.is_empty());

    // Follow, then the story appears
    let follow_path = format!("/api/users/{}/follow", author.user.id);
    server
        .post_auth_empty(&follow_path, &reader.access_token)
        .await
        .unwrap();

    let response = server
        .get_auth("/api/stories/feed", &reader.access_token)
        .await
        .unwrap();
    let feed: PaginatedResponse<StoryResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert!(feed.data.iter().any(|s| s.id == story.id));
}

// ============================================================================
// Follow Tests
// ============================================================================

#[tokio::test]
async fn test_follow_duplicate_conflict() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let a = register(&server).await;
    let b = register(&server).await;

    let path = format!("/api/users/{}/follow", b.user.id);
    let response = server
        .post_auth_empty(&path, &a.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    // Following twice conflicts
    let response = server
        .post_auth_empty(&path, &a.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();

    // Unfollow succeeds once
    let response = server.delete_auth(&path, &a.access_token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
    let response = server.delete_auth(&path, &a.access_token).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_self_follow_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let a = register(&server).await;

    let path = format!("/api/users/{}/follow", a.user.id);
    let response = server
        .post_auth_empty(&path, &a.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Comment Tests
// ============================================================================

#[tokio::test]
async fn test_comment_count_maintenance() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;
    let story = create_story(&server, &auth.access_token).await;

    let comments_path = format!("/api/comments/stories/{}/comments", story.id);
    let response = server
        .post_auth(
            &comments_path,
            &auth.access_token,
            &CreateCommentRequest::top_level("First!"),
        )
        .await
        .unwrap();
    let comment: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get(&format!("/api/stories/{}", story.id))
        .await
        .unwrap();
    let fetched: StoryResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.comment_count, 1);

    // Deleting the comment decrements the counter
    let response = server
        .delete_auth(
            &format!("/api/comments/{}", comment.id),
            &auth.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get(&format!("/api/stories/{}", story.id))
        .await
        .unwrap();
    let fetched: StoryResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.comment_count, 0);
}

#[tokio::test]
async fn test_comment_ranking_and_replies() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = register(&server).await;
    let voter = register(&server).await;
    let story = create_story(&server, &author.access_token).await;

    let comments_path = format!("/api/comments/stories/{}/comments", story.id);

    let response = server
        .post_auth(
            &comments_path,
            &author.access_token,
            &CreateCommentRequest::top_level("older comment"),
        )
        .await
        .unwrap();
    let older: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth(
            &comments_path,
            &author.access_token,
            &CreateCommentRequest::top_level("newer comment"),
        )
        .await
        .unwrap();
    let newer: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Upvote the newer comment so it outranks the older one
    let response = server
        .post_auth(
            "/api/reactions",
            &voter.access_token,
            &CreateReactionRequest::comment(&newer.id, "upvote"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // Attach a reply to the older comment
    let response = server
        .post_auth(
            &comments_path,
            &voter.access_token,
            &CreateCommentRequest::reply("a reply", &older.id),
        )
        .await
        .unwrap();
    let reply: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(reply.parent_id.as_deref(), Some(older.id.as_str()));

    let response = server.get(&comments_path).await.unwrap();
    let listing: PaginatedResponse<CommentResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();

    // Replies do not count toward the total; upvoted comment ranks first
    assert_eq!(listing.pagination.total, 2);
    assert_eq!(listing.data[0].id, newer.id);
    assert_eq!(listing.data[0].vote_score, 1);
    assert_eq!(listing.data[1].id, older.id);
    assert_eq!(listing.data[1].replies.len(), 1);
    assert_eq!(listing.data[1].replies[0].id, reply.id);
}

#[tokio::test]
async fn test_reply_to_reply_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;
    let story = create_story(&server, &auth.access_token).await;

    let comments_path = format!("/api/comments/stories/{}/comments", story.id);
    let response = server
        .post_auth(
            &comments_path,
            &auth.access_token,
            &CreateCommentRequest::top_level("parent"),
        )
        .await
        .unwrap();
    let parent: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth(
            &comments_path,
            &auth.access_token,
            &CreateCommentRequest::reply("reply", &parent.id),
        )
        .await
        .unwrap();
    let reply: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // One level only
    let response = server
        .post_auth(
            &comments_path,
            &auth.access_token,
            &CreateCommentRequest::reply("nested", &reply.id),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Reaction Tests
// ============================================================================

#[tokio::test]
async fn test_reaction_toggle_lifecycle() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = register(&server).await;
    let reactor = register(&server).await;
    let story = create_story(&server, &author.access_token).await;

    let like = CreateReactionRequest::story(&story.id, "like");

    // First toggle creates
    let response = server
        .post_auth("/api/reactions", &reactor.access_token, &like)
        .await
        .unwrap();
    let outcome: ToggleReactionResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(outcome.reaction.is_some());

    // Different type switches in place
    let love = CreateReactionRequest::story(&story.id, "love");
    let response = server
        .post_auth("/api/reactions", &reactor.access_token, &love)
        .await
        .unwrap();
    let outcome: ToggleReactionResponse = assert_json(response, StatusCode::OK).await.unwrap();
    let switched = outcome.reaction.expect("switched reaction present");
    assert_eq!(switched.reaction_type, "love");

    // Same type toggles off
    let response = server
        .post_auth("/api/reactions", &reactor.access_token, &love)
        .await
        .unwrap();
    let outcome: ToggleReactionResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(outcome.reaction.is_none());

    // Story like_count returns to zero
    let response = server
        .get(&format!("/api/stories/{}", story.id))
        .await
        .unwrap();
    let fetched: StoryResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.like_count, 0);
}

#[tokio::test]
async fn test_reaction_unknown_type_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;
    let story = create_story(&server, &auth.access_token).await;

    let request = CreateReactionRequest::story(&story.id, "sparkles");
    let response = server
        .post_auth("/api/reactions", &auth.access_token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_reaction_listing() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = register(&server).await;
    let reactor = register(&server).await;
    let story = create_story(&server, &author.access_token).await;

    let request = CreateReactionRequest::story(&story.id, "support");
    server
        .post_auth("/api/reactions", &reactor.access_token, &request)
        .await
        .unwrap();

    let response = server
        .get(&format!("/api/reactions/story/{}", story.id))
        .await
        .unwrap();
    let listing: PaginatedResponse<serde_json::Value> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(listing.pagination.total, 1);
    assert_eq!(listing.data[0]["reaction_type"], "support");
    assert_eq!(listing.data[0]["user"]["username"], reactor.user.username);
}

// ============================================================================
// Notification Tests
// ============================================================================

#[tokio::test]
async fn test_reaction_notification_and_unread_dedup() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = register(&server).await;
    let reactor = register(&server).await;
    let story = create_story(&server, &author.access_token).await;

    let like = CreateReactionRequest::story(&story.id, "like");

    // Create -> one unread notification for the author
    server
        .post_auth("/api/reactions", &reactor.access_token, &like)
        .await
        .unwrap();
    let response = server
        .get_auth("/api/notifications/unread-count", &author.access_token)
        .await
        .unwrap();
    let count: UnreadCountResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(count.unread, 1);

    // Toggle off, then on again: the unread row suppresses the repeat
    server
        .post_auth("/api/reactions", &reactor.access_token, &like)
        .await
        .unwrap();
    server
        .post_auth("/api/reactions", &reactor.access_token, &like)
        .await
        .unwrap();
    let response = server
        .get_auth("/api/notifications/unread-count", &author.access_token)
        .await
        .unwrap();
    let count: UnreadCountResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(count.unread, 1);
}

#[tokio::test]
async fn test_self_reaction_produces_no_notification() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = register(&server).await;
    let story = create_story(&server, &author.access_token).await;

    let like = CreateReactionRequest::story(&story.id, "like");
    server
        .post_auth("/api/reactions", &author.access_token, &like)
        .await
        .unwrap();

    let response = server
        .get_auth("/api/notifications/unread-count", &author.access_token)
        .await
        .unwrap();
    let count: UnreadCountResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(count.unread, 0);
}

#[tokio::test]
async fn test_mark_notifications_read() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = register(&server).await;
    let follower = register(&server).await;

    // Follow notifies the followee
    let follow_path = format!("/api/users/{}/follow", author.user.id);
    server
        .post_auth_empty(&follow_path, &follower.access_token)
        .await
        .unwrap();

    let response = server
        .get_auth("/api/notifications", &author.access_token)
        .await
        .unwrap();
    let listing: PaginatedResponse<NotificationResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(listing.pagination.total, 1);
    let notification = &listing.data[0];
    assert_eq!(notification.notification_type, "new_follower");
    assert!(!notification.is_read);

    // Only the recipient may mark it read
    let read_path = format!("/api/notifications/{}/read", notification.id);
    let response = server
        .patch_auth_empty(&read_path, &follower.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .patch_auth_empty(&read_path, &author.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get_auth("/api/notifications/unread-count", &author.access_token)
        .await
        .unwrap();
    let count: UnreadCountResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(count.unread, 0);
}

// ============================================================================
// Document Tests
// ============================================================================

#[tokio::test]
async fn test_document_share_and_save() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner = register(&server).await;
    let saver = register(&server).await;

    let request = CreateDocumentRequest::unique();
    let response = server
        .post_auth("/api/documents", &owner.access_token, &request)
        .await
        .unwrap();
    let document: DocumentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(document.save_count, 0);

    // Save bumps the counter; a second save conflicts
    let save_path = format!("/api/documents/{}/save", document.id);
    let response = server
        .post_auth_empty(&save_path, &saver.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();
    let response = server
        .post_auth_empty(&save_path, &saver.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();

    let response = server
        .get(&format!("/api/documents/{}", document.id))
        .await
        .unwrap();
    let fetched: DocumentResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.save_count, 1);

    // Unsave brings it back down
    let response = server
        .delete_auth(&save_path, &saver.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get(&format!("/api/documents/{}", document.id))
        .await
        .unwrap();
    let fetched: DocumentResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.save_count, 0);
}

#[tokio::test]
async fn test_document_delete_owner_only() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner = register(&server).await;
    let other = register(&server).await;

    let request = CreateDocumentRequest::unique();
    let response = server
        .post_auth("/api/documents", &owner.access_token, &request)
        .await
        .unwrap();
    let document: DocumentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let path = format!("/api/documents/{}", document.id);
    let response = server.delete_auth(&path, &other.access_token).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server.delete_auth(&path, &owner.access_token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}

// ============================================================================
// Admin Tests
// ============================================================================

#[tokio::test]
async fn test_admin_routes_require_admin_role() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;

    let response = server
        .get_auth("/api/admin/users", &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}
