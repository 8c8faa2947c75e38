use std::sync::Arc;

use crate::error::AppError;
use crate::models::{AddedComment, NewComment};
use crate::repository::ThreadRepository;

#[derive(Clone)]
pub struct CommentService {
    repo: Arc<dyn ThreadRepository>,
}

impl CommentService {
    pub fn new(repo: Arc<dyn ThreadRepository>) -> Self {
        Self { repo }
    }

    pub async fn add_comment(
        &self,
        payload: NewComment,
        owner: &str,
        thread_id: &str,
    ) -> Result<AddedComment, AppError> {
        self.repo.verify_thread_exists(thread_id).await?;
        self.repo
            .add_comment(&payload.content, owner, thread_id)
            .await
    }

    /// Existence is checked before ownership: deleting somebody else's
    /// nonexistent comment reports NotFound, not Forbidden.
    pub async fn delete_comment(&self, comment_id: &str, user_id: &str) -> Result<(), AppError> {
        self.repo.verify_comment_exists(comment_id).await?;
        self.repo.verify_comment_owner(comment_id, user_id).await?;
        self.repo.delete_comment(comment_id).await
    }

    /// Toggles the caller's like on a comment.
    pub async fn like_comment(
        &self,
        thread_id: &str,
        comment_id: &str,
        user_id: &str,
    ) -> Result<(), AppError> {
        self.repo.verify_thread_exists(thread_id).await?;
        self.repo.verify_comment_exists(comment_id).await?;

        if self.repo.is_liked(comment_id, user_id).await? {
            self.repo.delete_comment_like(comment_id, user_id).await
        } else {
            self.repo.add_comment_like(comment_id, user_id).await
        }
    }
}
