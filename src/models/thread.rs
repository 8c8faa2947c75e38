use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::CommentDetail;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Thread {
    pub id: String,
    pub title: String,
    pub body: String,
    pub owner: String,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct NewThread {
    pub title: String,
    pub body: String,
}

/// Minimal projection returned right after thread creation.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AddedThread {
    pub id: String,
    pub title: String,
    pub owner: String,
}

/// Thread row joined with its owner's username, as read by the detail view.
#[derive(Debug, Clone, Serialize, FromRow, PartialEq)]
pub struct ThreadInfo {
    pub id: String,
    pub title: String,
    pub body: String,
    pub date: DateTime<Utc>,
    pub username: String,
}

/// The aggregated view of a thread: its fields plus the full, already
/// redacted comment tree.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ThreadDetail {
    pub id: String,
    pub title: String,
    pub body: String,
    pub date: DateTime<Utc>,
    pub username: String,
    pub comments: Vec<CommentDetail>,
}
