//! Comment domain model.

use serde::{Deserialize, Serialize};

/// A single comment on a post.
///
/// Comments are append-only: once added to the interaction ledger they are never
/// edited or removed, and their order within a post is the order in which they
/// were added (chronological by construction).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Username of the comment author.
    pub author: String,

    /// Comment body text.
    pub content: String,

    /// ISO 8601 timestamp of when the comment was written.
    pub date: String,
}

impl Comment {
    /// Creates a comment stamped with the current time.
    ///
    /// # Examples
    ///
    /// ```
    /// use trailshare::domain::Comment;
    ///
    /// let comment = Comment::new("alice", "Stunning view!");
    /// assert_eq!(comment.author, "alice");
    /// assert!(!comment.date.is_empty());
    /// ```
    #[must_use]
    pub fn new(author: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            content: content.into(),
            date: chrono::Utc::now().to_rfc3339(),
        }
    }
}
