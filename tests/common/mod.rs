//! Shared fixtures: an in-memory database with the production schema and
//! direct-insert seed helpers for rows the test under scrutiny does not
//! create itself.

// Not every test binary uses every helper.
#![allow(dead_code)]

use std::str::FromStr;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use forum_backend::db;
use forum_backend::id::RandomIdGenerator;
use forum_backend::repository::SqliteThreadRepository;

/// One shared in-memory connection; more than one would each see an empty
/// database of their own.
pub async fn setup_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("valid sqlite url")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("failed to open in-memory database");

    db::run_migrations(&pool)
        .await
        .expect("failed to run migrations");

    pool
}

pub fn make_repo(pool: &SqlitePool) -> SqliteThreadRepository {
    SqliteThreadRepository::new(pool.clone(), Arc::new(RandomIdGenerator))
}

pub fn date(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .expect("valid rfc3339 date")
        .with_timezone(&Utc)
}

pub async fn add_user(pool: &SqlitePool, id: &str, username: &str) {
    sqlx::query("INSERT INTO users (id, username, hashed_password, date) VALUES (?, ?, ?, ?)")
        .bind(id)
        .bind(username)
        .bind("secret-hash")
        .bind(Utc::now())
        .execute(pool)
        .await
        .expect("failed to seed user");
}

pub async fn add_thread(pool: &SqlitePool, id: &str, owner: &str) {
    sqlx::query("INSERT INTO threads (id, title, body, owner, date) VALUES (?, ?, ?, ?, ?)")
        .bind(id)
        .bind("Thread Title")
        .bind("Thread Body")
        .bind(owner)
        .bind(Utc::now())
        .execute(pool)
        .await
        .expect("failed to seed thread");
}

#[allow(clippy::too_many_arguments)]
pub async fn add_comment(
    pool: &SqlitePool,
    id: &str,
    thread_id: &str,
    owner: &str,
    content: &str,
    date: DateTime<Utc>,
    is_delete: bool,
) {
    sqlx::query(
        r#"
        INSERT INTO thread_comments (id, content, owner, thread_id, is_delete, is_reply, date)
        VALUES (?, ?, ?, ?, ?, FALSE, ?)
        "#,
    )
    .bind(id)
    .bind(content)
    .bind(owner)
    .bind(thread_id)
    .bind(is_delete)
    .bind(date)
    .execute(pool)
    .await
    .expect("failed to seed comment");
}

/// Seeds a reply the way the store writes one: a backing comment row with
/// `is_reply = TRUE` plus the link row pointing at its parent.
#[allow(clippy::too_many_arguments)]
pub async fn add_reply(
    pool: &SqlitePool,
    reply_id: &str,
    backing_comment_id: &str,
    reply_to: &str,
    thread_id: &str,
    owner: &str,
    content: &str,
    date: DateTime<Utc>,
    is_delete: bool,
) {
    sqlx::query(
        r#"
        INSERT INTO thread_comments (id, content, owner, thread_id, is_delete, is_reply, date)
        VALUES (?, ?, ?, ?, ?, TRUE, ?)
        "#,
    )
    .bind(backing_comment_id)
    .bind(content)
    .bind(owner)
    .bind(thread_id)
    .bind(is_delete)
    .bind(date)
    .execute(pool)
    .await
    .expect("failed to seed reply comment");

    sqlx::query("INSERT INTO thread_comment_replies (id, reply_to, comment_id) VALUES (?, ?, ?)")
        .bind(reply_id)
        .bind(reply_to)
        .bind(backing_comment_id)
        .execute(pool)
        .await
        .expect("failed to seed reply link");
}

pub async fn add_like(pool: &SqlitePool, comment_id: &str, user_id: &str) {
    sqlx::query("INSERT INTO thread_comment_likes (comment_id, user_id) VALUES (?, ?)")
        .bind(comment_id)
        .bind(user_id)
        .execute(pool)
        .await
        .expect("failed to seed like");
}
