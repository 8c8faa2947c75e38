//! Use-case orchestration: precondition ordering (existence before
//! ownership before mutation) and ownership resolution for replies.

mod common;

use std::sync::Arc;

use common::{add_comment, add_reply, add_thread, add_user, date, make_repo, setup_pool};
use forum_backend::error::AppError;
use forum_backend::models::{NewComment, NewReply, NewThread};
use forum_backend::services::{CommentService, ReplyService, ThreadService};

#[tokio::test]
async fn add_thread_returns_created_projection() {
    let pool = setup_pool().await;
    add_user(&pool, "user-123", "dicoding").await;

    let threads = ThreadService::new(Arc::new(make_repo(&pool)));
    let added = threads
        .add_thread(
            NewThread {
                title: "Thread Title".to_string(),
                body: "Thread Body".to_string(),
            },
            "user-123",
        )
        .await
        .unwrap();

    assert!(added.id.starts_with("thread-"));
    assert_eq!(added.title, "Thread Title");
    assert_eq!(added.owner, "user-123");
}

#[tokio::test]
async fn add_comment_fails_with_not_found_for_missing_thread() {
    let pool = setup_pool().await;
    add_user(&pool, "user-123", "dicoding").await;

    let comments = CommentService::new(Arc::new(make_repo(&pool)));
    let err = comments
        .add_comment(
            NewComment {
                content: "Thread Comment".to_string(),
            },
            "user-123",
            "thread-999",
        )
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM thread_comments")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn delete_comment_reports_not_found_before_checking_ownership() {
    let pool = setup_pool().await;
    add_user(&pool, "user-123", "dicoding").await;

    let comments = CommentService::new(Arc::new(make_repo(&pool)));

    // Arbitrary, non-owning caller; existence is checked first, so the
    // outcome must be NotFound rather than Forbidden.
    let err = comments
        .delete_comment("comment-999", "user-999")
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn delete_comment_rejects_non_owner_with_forbidden() {
    let pool = setup_pool().await;
    add_user(&pool, "user-123", "dicoding").await;
    add_user(&pool, "user-456", "johndoe").await;
    add_thread(&pool, "thread-123", "user-123").await;
    add_comment(
        &pool,
        "comment-123",
        "thread-123",
        "user-123",
        "Thread Comment",
        date("2022-08-04T19:20:33.555Z"),
        false,
    )
    .await;

    let comments = CommentService::new(Arc::new(make_repo(&pool)));

    let err = comments
        .delete_comment("comment-123", "user-456")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Forbidden(_)));

    // The comment is untouched.
    let (is_delete,): (bool,) =
        sqlx::query_as("SELECT is_delete FROM thread_comments WHERE id = ?")
            .bind("comment-123")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert!(!is_delete);
}

#[tokio::test]
async fn delete_comment_by_owner_soft_deletes() {
    let pool = setup_pool().await;
    add_user(&pool, "user-123", "dicoding").await;
    add_thread(&pool, "thread-123", "user-123").await;
    add_comment(
        &pool,
        "comment-123",
        "thread-123",
        "user-123",
        "Thread Comment",
        date("2022-08-04T19:20:33.555Z"),
        false,
    )
    .await;

    let comments = CommentService::new(Arc::new(make_repo(&pool)));
    comments
        .delete_comment("comment-123", "user-123")
        .await
        .unwrap();

    let (is_delete,): (bool,) =
        sqlx::query_as("SELECT is_delete FROM thread_comments WHERE id = ?")
            .bind("comment-123")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert!(is_delete);
}

#[tokio::test]
async fn add_reply_verifies_thread_then_comment() {
    let pool = setup_pool().await;
    add_user(&pool, "user-123", "dicoding").await;
    add_thread(&pool, "thread-123", "user-123").await;

    let replies = ReplyService::new(Arc::new(make_repo(&pool)));

    let err = replies
        .add_reply(
            NewReply {
                content: "Thread Reply".to_string(),
            },
            "user-123",
            "thread-999",
            "comment-123",
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    let err = replies
        .add_reply(
            NewReply {
                content: "Thread Reply".to_string(),
            },
            "user-123",
            "thread-123",
            "comment-999",
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM thread_comment_replies")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn delete_reply_fails_with_not_found_for_missing_link() {
    let pool = setup_pool().await;
    add_user(&pool, "user-123", "dicoding").await;

    let replies = ReplyService::new(Arc::new(make_repo(&pool)));
    let err = replies
        .delete_reply("reply-999", "user-123")
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn delete_reply_authorizes_against_the_backing_comment_owner() {
    let pool = setup_pool().await;
    add_user(&pool, "user-123", "dicoding").await;
    add_user(&pool, "user-456", "johndoe").await;
    add_thread(&pool, "thread-123", "user-123").await;
    // Parent comment by user-123, reply authored by user-456.
    add_comment(
        &pool,
        "comment-123",
        "thread-123",
        "user-123",
        "Thread Comment",
        date("2022-08-04T19:20:33.555Z"),
        false,
    )
    .await;
    add_reply(
        &pool,
        "reply-123",
        "comment-345",
        "comment-123",
        "thread-123",
        "user-456",
        "Thread Reply",
        date("2022-08-05T19:20:33.555Z"),
        false,
    )
    .await;

    let replies = ReplyService::new(Arc::new(make_repo(&pool)));

    // Owning the parent comment does not grant access to the reply.
    let err = replies
        .delete_reply("reply-123", "user-123")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Forbidden(_)));

    replies.delete_reply("reply-123", "user-456").await.unwrap();

    let (is_delete,): (bool,) =
        sqlx::query_as("SELECT is_delete FROM thread_comments WHERE id = ?")
            .bind("comment-345")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert!(is_delete);
}

#[tokio::test]
async fn like_comment_verifies_thread_and_comment_first() {
    let pool = setup_pool().await;
    add_user(&pool, "user-123", "dicoding").await;
    add_thread(&pool, "thread-123", "user-123").await;

    let comments = CommentService::new(Arc::new(make_repo(&pool)));

    let err = comments
        .like_comment("thread-999", "comment-123", "user-123")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    let err = comments
        .like_comment("thread-123", "comment-999", "user-123")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM thread_comment_likes")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}
