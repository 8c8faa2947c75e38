use std::sync::Arc;

use crate::error::AppError;
use crate::models::{
    AddedThread, CommentDetail, NewThread, ReplyDetail, ThreadComment, ThreadDetail,
};
use crate::repository::ThreadRepository;
use crate::services::{DELETED_COMMENT_CONTENT, DELETED_REPLY_CONTENT};

#[derive(Clone)]
pub struct ThreadService {
    repo: Arc<dyn ThreadRepository>,
}

impl ThreadService {
    pub fn new(repo: Arc<dyn ThreadRepository>) -> Self {
        Self { repo }
    }

    pub async fn add_thread(
        &self,
        payload: NewThread,
        owner: &str,
    ) -> Result<AddedThread, AppError> {
        self.repo
            .add_thread(&payload.title, &payload.body, owner)
            .await
    }

    /// Assembles the full detail view of a thread.
    ///
    /// The thread row and the comment tree have no ordering dependency, so
    /// both fetches are issued concurrently once existence is confirmed.
    pub async fn get_thread_detail(&self, thread_id: &str) -> Result<ThreadDetail, AppError> {
        self.repo.verify_thread_exists(thread_id).await?;

        let (thread, comments) = tokio::try_join!(
            self.repo.get_thread(thread_id),
            self.repo.get_thread_comments(thread_id)
        )?;

        Ok(ThreadDetail {
            id: thread.id,
            title: thread.title,
            body: thread.body,
            date: thread.date,
            username: thread.username,
            comments: comments.into_iter().map(redact_comment).collect(),
        })
    }
}

/// Swaps the content of soft-deleted comments and replies for the fixed
/// placeholders and drops the delete flag from the output shape.
fn redact_comment(comment: ThreadComment) -> CommentDetail {
    CommentDetail {
        id: comment.id,
        username: comment.username,
        date: comment.date,
        content: if comment.is_delete {
            DELETED_COMMENT_CONTENT.to_string()
        } else {
            comment.content
        },
        replies: comment
            .replies
            .into_iter()
            .map(|reply| ReplyDetail {
                id: reply.id,
                username: reply.username,
                date: reply.date,
                content: if reply.is_delete {
                    DELETED_REPLY_CONTENT.to_string()
                } else {
                    reply.content
                },
            })
            .collect(),
        like_count: comment.like_count,
    }
}
