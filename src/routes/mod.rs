pub mod auth;
pub mod threads;

pub use auth::auth_routes;
pub use threads::threads_routes;

use sqlx::SqlitePool;

use crate::services::{CommentService, ReplyService, ThreadService};

/// State shared by every handler. The pool is only used by the auth adapter;
/// forum operations go through the services.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub threads: ThreadService,
    pub comments: CommentService,
    pub replies: ReplyService,
}
