mod comments;
mod replies;
mod threads;

pub use comments::CommentService;
pub use replies::ReplyService;
pub use threads::ThreadService;

/// Placeholder shown instead of the stored content once a comment is
/// soft-deleted. The row itself keeps the original text.
pub const DELETED_COMMENT_CONTENT: &str = "**komentar telah dihapus**";
pub const DELETED_REPLY_CONTENT: &str = "**balasan telah dihapus**";
