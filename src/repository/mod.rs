mod sqlite;

pub use sqlite::SqliteThreadRepository;

use async_trait::async_trait;

use crate::error::AppError;
use crate::models::{AddedComment, AddedReply, AddedThread, ThreadComment, ThreadInfo};

/// Storage contract for threads, comments, replies and likes.
///
/// The `verify_*` operations are the precondition checks the services compose
/// before every mutation; the store itself does not re-verify existence, so a
/// write against a missing parent fails at the database boundary instead.
#[async_trait]
pub trait ThreadRepository: Send + Sync {
    async fn add_thread(
        &self,
        title: &str,
        body: &str,
        owner: &str,
    ) -> Result<AddedThread, AppError>;

    async fn add_comment(
        &self,
        content: &str,
        owner: &str,
        thread_id: &str,
    ) -> Result<AddedComment, AppError>;

    /// Inserts the backing comment row and the reply link as one transaction.
    async fn add_reply(
        &self,
        content: &str,
        owner: &str,
        thread_id: &str,
        comment_id: &str,
    ) -> Result<AddedReply, AppError>;

    /// Soft-deletes a comment. Reply deletion goes through here too, with the
    /// backing comment id resolved via `verify_reply_exists`.
    async fn delete_comment(&self, comment_id: &str) -> Result<(), AppError>;

    async fn verify_thread_exists(&self, thread_id: &str) -> Result<(), AppError>;

    async fn verify_comment_exists(&self, comment_id: &str) -> Result<(), AppError>;

    /// Returns the backing comment id of the reply link.
    async fn verify_reply_exists(&self, reply_id: &str) -> Result<String, AppError>;

    async fn verify_comment_owner(&self, comment_id: &str, user_id: &str)
    -> Result<(), AppError>;

    async fn get_thread(&self, thread_id: &str) -> Result<ThreadInfo, AppError>;

    /// Full comment tree of a thread: top-level comments in ascending date
    /// order, each with its replies (ascending date) and like count. Content
    /// comes back raw; redaction is the caller's job.
    async fn get_thread_comments(&self, thread_id: &str) -> Result<Vec<ThreadComment>, AppError>;

    async fn is_liked(&self, comment_id: &str, user_id: &str) -> Result<bool, AppError>;

    async fn add_comment_like(&self, comment_id: &str, user_id: &str) -> Result<(), AppError>;

    async fn delete_comment_like(&self, comment_id: &str, user_id: &str) -> Result<(), AppError>;
}
