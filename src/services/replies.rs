use std::sync::Arc;

use crate::error::AppError;
use crate::models::{AddedReply, NewReply};
use crate::repository::ThreadRepository;

#[derive(Clone)]
pub struct ReplyService {
    repo: Arc<dyn ThreadRepository>,
}

impl ReplyService {
    pub fn new(repo: Arc<dyn ThreadRepository>) -> Self {
        Self { repo }
    }

    pub async fn add_reply(
        &self,
        payload: NewReply,
        owner: &str,
        thread_id: &str,
        comment_id: &str,
    ) -> Result<AddedReply, AppError> {
        self.repo.verify_thread_exists(thread_id).await?;
        self.repo.verify_comment_exists(comment_id).await?;
        self.repo
            .add_reply(&payload.content, owner, thread_id, comment_id)
            .await
    }

    /// Ownership is checked against the backing comment; the reply link
    /// itself carries no owner.
    pub async fn delete_reply(&self, reply_id: &str, user_id: &str) -> Result<(), AppError> {
        let comment_id = self.repo.verify_reply_exists(reply_id).await?;
        self.repo.verify_comment_owner(&comment_id, user_id).await?;
        self.repo.delete_comment(&comment_id).await
    }
}
