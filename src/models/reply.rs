use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct NewReply {
    pub content: String,
}

/// Minimal projection returned right after reply creation. `id` is the
/// reply-link id, not the backing comment id.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AddedReply {
    pub id: String,
    pub content: String,
    pub owner: String,
}

/// One reply as fetched for the thread detail view, raw content with the
/// soft-delete flag still attached.
#[derive(Debug, Clone, PartialEq)]
pub struct CommentReply {
    pub id: String,
    pub username: String,
    pub date: DateTime<Utc>,
    pub content: String,
    pub is_delete: bool,
}

/// The redacted, client-facing shape of a reply.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ReplyDetail {
    pub id: String,
    pub username: String,
    pub date: DateTime<Utc>,
    pub content: String,
}
