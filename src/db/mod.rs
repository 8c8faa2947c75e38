use std::str::FromStr;

use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};

pub async fn init_db(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    // Foreign keys are off by default in SQLite; the reply and like tables
    // rely on them to reject writes against missing parents.
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    run_migrations(&pool).await?;

    Ok(pool)
}

pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id TEXT PRIMARY KEY,
            username TEXT NOT NULL UNIQUE,
            hashed_password TEXT NOT NULL,
            date DATETIME NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS threads (
            id TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            body TEXT NOT NULL,
            owner TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            date DATETIME NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Replies live in this table as well, flagged with is_reply and linked to
    // their parent comment through thread_comment_replies.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS thread_comments (
            id TEXT PRIMARY KEY,
            content TEXT NOT NULL,
            owner TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            thread_id TEXT NOT NULL REFERENCES threads(id) ON DELETE CASCADE,
            is_delete BOOLEAN NOT NULL DEFAULT FALSE,
            is_reply BOOLEAN NOT NULL DEFAULT FALSE,
            date DATETIME NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS thread_comment_replies (
            id TEXT PRIMARY KEY,
            reply_to TEXT NOT NULL REFERENCES thread_comments(id) ON DELETE CASCADE,
            comment_id TEXT NOT NULL REFERENCES thread_comments(id) ON DELETE CASCADE
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS thread_comment_likes (
            comment_id TEXT NOT NULL REFERENCES thread_comments(id) ON DELETE CASCADE,
            user_id TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            UNIQUE (comment_id, user_id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_thread_comments_thread_id_date
        ON thread_comments (thread_id, date)
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_thread_comment_replies_reply_to
        ON thread_comment_replies (reply_to)
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
