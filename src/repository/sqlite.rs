use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};

use crate::error::AppError;
use crate::id::{COMMENT_PREFIX, IdGenerator, REPLY_PREFIX, THREAD_PREFIX};
use crate::models::{
    AddedComment, AddedReply, AddedThread, CommentReply, ThreadComment, ThreadInfo,
};
use crate::repository::ThreadRepository;

pub struct SqliteThreadRepository {
    pool: SqlitePool,
    id_gen: Arc<dyn IdGenerator>,
}

impl SqliteThreadRepository {
    pub fn new(pool: SqlitePool, id_gen: Arc<dyn IdGenerator>) -> Self {
        Self { pool, id_gen }
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    id: String,
    date: DateTime<Utc>,
    username: String,
    content: String,
    is_delete: bool,
}

#[derive(Debug, FromRow)]
struct ReplyRow {
    id: String,
    reply_to: String,
    date: DateTime<Utc>,
    username: String,
    content: String,
    is_delete: bool,
}

#[async_trait]
impl ThreadRepository for SqliteThreadRepository {
    async fn add_thread(
        &self,
        title: &str,
        body: &str,
        owner: &str,
    ) -> Result<AddedThread, AppError> {
        let id = self.id_gen.generate(THREAD_PREFIX);

        sqlx::query("INSERT INTO threads (id, title, body, owner, date) VALUES (?, ?, ?, ?, ?)")
            .bind(&id)
            .bind(title)
            .bind(body)
            .bind(owner)
            .bind(Utc::now())
            .execute(&self.pool)
            .await?;

        Ok(AddedThread {
            id,
            title: title.to_string(),
            owner: owner.to_string(),
        })
    }

    async fn add_comment(
        &self,
        content: &str,
        owner: &str,
        thread_id: &str,
    ) -> Result<AddedComment, AppError> {
        let id = self.id_gen.generate(COMMENT_PREFIX);

        sqlx::query(
            r#"
            INSERT INTO thread_comments (id, content, owner, thread_id, is_delete, is_reply, date)
            VALUES (?, ?, ?, ?, FALSE, FALSE, ?)
            "#,
        )
        .bind(&id)
        .bind(content)
        .bind(owner)
        .bind(thread_id)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(AddedComment {
            id,
            content: content.to_string(),
            owner: owner.to_string(),
        })
    }

    async fn add_reply(
        &self,
        content: &str,
        owner: &str,
        thread_id: &str,
        comment_id: &str,
    ) -> Result<AddedReply, AppError> {
        let reply_id = self.id_gen.generate(REPLY_PREFIX);
        let backing_comment_id = self.id_gen.generate(COMMENT_PREFIX);

        // Both rows or neither: the transaction rolls back on drop if either
        // insert fails.
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO thread_comments (id, content, owner, thread_id, is_delete, is_reply, date)
            VALUES (?, ?, ?, ?, FALSE, TRUE, ?)
            "#,
        )
        .bind(&backing_comment_id)
        .bind(content)
        .bind(owner)
        .bind(thread_id)
        .bind(Utc::now())
        .execute(&mut *tx)
        .await?;

        sqlx::query("INSERT INTO thread_comment_replies (id, reply_to, comment_id) VALUES (?, ?, ?)")
            .bind(&reply_id)
            .bind(comment_id)
            .bind(&backing_comment_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(AddedReply {
            id: reply_id,
            content: content.to_string(),
            owner: owner.to_string(),
        })
    }

    async fn delete_comment(&self, comment_id: &str) -> Result<(), AppError> {
        sqlx::query("UPDATE thread_comments SET is_delete = TRUE WHERE id = ?")
            .bind(comment_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn verify_thread_exists(&self, thread_id: &str) -> Result<(), AppError> {
        sqlx::query_as::<_, (String,)>("SELECT id FROM threads WHERE id = ?")
            .bind(thread_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("thread tidak dapat ditemukan".to_string()))?;

        Ok(())
    }

    async fn verify_comment_exists(&self, comment_id: &str) -> Result<(), AppError> {
        sqlx::query_as::<_, (String,)>("SELECT id FROM thread_comments WHERE id = ?")
            .bind(comment_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("komentar tidak dapat ditemukan".to_string()))?;

        Ok(())
    }

    async fn verify_reply_exists(&self, reply_id: &str) -> Result<String, AppError> {
        let (comment_id,) = sqlx::query_as::<_, (String,)>(
            "SELECT comment_id FROM thread_comment_replies WHERE id = ?",
        )
        .bind(reply_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("balasan tidak dapat ditemukan".to_string()))?;

        Ok(comment_id)
    }

    async fn verify_comment_owner(
        &self,
        comment_id: &str,
        user_id: &str,
    ) -> Result<(), AppError> {
        sqlx::query_as::<_, (String,)>(
            "SELECT owner FROM thread_comments WHERE id = ? AND owner = ?",
        )
        .bind(comment_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::Forbidden("kamu tidak memiliki akses".to_string()))?;

        Ok(())
    }

    async fn get_thread(&self, thread_id: &str) -> Result<ThreadInfo, AppError> {
        sqlx::query_as::<_, ThreadInfo>(
            r#"
            SELECT t.id, t.title, t.body, t.date, u.username
            FROM threads t
            JOIN users u ON u.id = t.owner
            WHERE t.id = ?
            "#,
        )
        .bind(thread_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("thread tidak dapat ditemukan".to_string()))
    }

    async fn get_thread_comments(&self, thread_id: &str) -> Result<Vec<ThreadComment>, AppError> {
        let comments = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT c.id, c.date, u.username, c.content, c.is_delete
            FROM thread_comments c
            JOIN users u ON u.id = c.owner
            WHERE c.thread_id = ? AND c.is_reply = FALSE
            ORDER BY c.date ASC
            "#,
        )
        .bind(thread_id)
        .fetch_all(&self.pool)
        .await?;

        let reply_rows = sqlx::query_as::<_, ReplyRow>(
            r#"
            SELECT r.id, r.reply_to, c.date, u.username, c.content, c.is_delete
            FROM thread_comment_replies r
            JOIN thread_comments c ON c.id = r.comment_id
            JOIN users u ON u.id = c.owner
            WHERE c.thread_id = ?
            ORDER BY c.date ASC
            "#,
        )
        .bind(thread_id)
        .fetch_all(&self.pool)
        .await?;

        let like_rows = sqlx::query_as::<_, (String, i64)>(
            r#"
            SELECT l.comment_id, COUNT(*)
            FROM thread_comment_likes l
            JOIN thread_comments c ON c.id = l.comment_id
            WHERE c.thread_id = ?
            GROUP BY l.comment_id
            "#,
        )
        .bind(thread_id)
        .fetch_all(&self.pool)
        .await?;

        // Reply rows arrive in ascending date order, so per-comment insertion
        // order is already the output order.
        let mut replies_by_comment: HashMap<String, Vec<CommentReply>> = HashMap::new();
        for row in reply_rows {
            replies_by_comment
                .entry(row.reply_to)
                .or_default()
                .push(CommentReply {
                    id: row.id,
                    username: row.username,
                    date: row.date,
                    content: row.content,
                    is_delete: row.is_delete,
                });
        }

        let like_counts: HashMap<String, i64> = like_rows.into_iter().collect();

        Ok(comments
            .into_iter()
            .map(|row| {
                let replies = replies_by_comment.remove(&row.id).unwrap_or_default();
                let like_count = like_counts.get(&row.id).copied().unwrap_or(0);
                ThreadComment {
                    id: row.id,
                    username: row.username,
                    date: row.date,
                    content: row.content,
                    is_delete: row.is_delete,
                    replies,
                    like_count,
                }
            })
            .collect())
    }

    async fn is_liked(&self, comment_id: &str, user_id: &str) -> Result<bool, AppError> {
        let row = sqlx::query_as::<_, (String,)>(
            "SELECT comment_id FROM thread_comment_likes WHERE comment_id = ? AND user_id = ?",
        )
        .bind(comment_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.is_some())
    }

    async fn add_comment_like(&self, comment_id: &str, user_id: &str) -> Result<(), AppError> {
        // No upsert: a duplicate pair trips the UNIQUE constraint and
        // surfaces as a database error. Callers branch through is_liked.
        sqlx::query("INSERT INTO thread_comment_likes (comment_id, user_id) VALUES (?, ?)")
            .bind(comment_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete_comment_like(&self, comment_id: &str, user_id: &str) -> Result<(), AppError> {
        sqlx::query("DELETE FROM thread_comment_likes WHERE comment_id = ? AND user_id = ?")
            .bind(comment_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
