use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::{CommentReply, ReplyDetail};

/// Row in `thread_comments`. Replies are stored here too (`is_reply = true`)
/// and are linked to their parent through `thread_comment_replies`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Comment {
    pub id: String,
    pub content: String,
    pub owner: String,
    pub thread_id: String,
    pub is_delete: bool,
    pub is_reply: bool,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct NewComment {
    pub content: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AddedComment {
    pub id: String,
    pub content: String,
    pub owner: String,
}

/// One top-level comment as fetched for the thread detail view: raw content,
/// the soft-delete flag still attached, replies in ascending date order and
/// the like count. Redaction happens later, in the service layer.
#[derive(Debug, Clone, PartialEq)]
pub struct ThreadComment {
    pub id: String,
    pub username: String,
    pub date: DateTime<Utc>,
    pub content: String,
    pub is_delete: bool,
    pub replies: Vec<CommentReply>,
    pub like_count: i64,
}

/// The redacted, client-facing shape of a top-level comment.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CommentDetail {
    pub id: String,
    pub username: String,
    pub date: DateTime<Utc>,
    pub content: String,
    pub replies: Vec<ReplyDetail>,
    #[serde(rename = "likeCount")]
    pub like_count: i64,
}
