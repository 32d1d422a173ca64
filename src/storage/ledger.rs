//! Interaction ledger: per-post likes, bookmarks, and comments.
//!
//! This module implements the durable per-viewer interaction state. The ledger
//! tracks, per post id, whether the current user has liked or bookmarked the
//! post, plus an append-only comment list, and flushes every mutation to the
//! storage backend before the call returns.
//!
//! # Persistence Contract
//!
//! Each of the three categories is serialized in full under its own fixed key
//! ([`LIKES_KEY`], [`BOOKMARKS_KEY`], [`COMMENTS_KEY`]) on every mutating call.
//! On construction each category is deserialized from storage, or initialized
//! empty if the key is absent or the payload is malformed; corrupt data is
//! never fatal.
//!
//! # Failure Semantics
//!
//! A failed flush does not roll back the in-memory mutation. The error is
//! returned so the caller can report it, and the ledger remains usable for the
//! rest of the session. The in-memory state is authoritative once loaded.

use crate::domain::error::Result;
use crate::domain::Comment;
use crate::storage::backend::{Storage, BOOKMARKS_KEY, COMMENTS_KEY, LIKES_KEY};
use std::collections::HashMap;

/// Durable store of per-post interaction state for the current user.
///
/// Owns the like/bookmark flags and comment lists keyed by post id, backed by a
/// dependency-injected [`Storage`] implementation. Constructed once at startup
/// via [`InteractionLedger::load`] and passed by reference to whichever
/// component needs it; there is no hidden global instance.
///
/// # Examples
///
/// ```
/// use trailshare::storage::{InteractionLedger, MemoryStorage};
///
/// let mut ledger = InteractionLedger::load(Box::new(MemoryStorage::new()));
/// ledger.toggle_like(1)?;
/// assert!(ledger.is_liked(1));
/// ledger.toggle_like(1)?;
/// assert!(!ledger.is_liked(1));
/// # Ok::<(), trailshare::domain::TrailshareError>(())
/// ```
pub struct InteractionLedger {
    likes: HashMap<u64, bool>,
    bookmarks: HashMap<u64, bool>,
    comments: HashMap<u64, Vec<Comment>>,
    backend: Box<dyn Storage>,
}

impl InteractionLedger {
    /// Loads the ledger from the given backend.
    ///
    /// Each category is read from its fixed key. An absent key or a payload that
    /// fails to deserialize yields an empty category; the latter is logged at
    /// warn level. Read errors from the backend itself are likewise downgraded
    /// to an empty category, so loading never fails.
    #[must_use]
    pub fn load(backend: Box<dyn Storage>) -> Self {
        let likes = Self::load_category(backend.as_ref(), LIKES_KEY);
        let bookmarks = Self::load_category(backend.as_ref(), BOOKMARKS_KEY);
        let comments = Self::load_category(backend.as_ref(), COMMENTS_KEY);

        tracing::debug!(
            liked = likes.len(),
            bookmarked = bookmarks.len(),
            commented = comments.len(),
            "interaction ledger loaded"
        );

        Self {
            likes,
            bookmarks,
            comments,
            backend,
        }
    }

    fn load_category<T>(backend: &dyn Storage, key: &str) -> HashMap<u64, T>
    where
        T: serde::de::DeserializeOwned,
    {
        match backend.read(key) {
            Ok(Some(payload)) => match serde_json::from_str(&payload) {
                Ok(parsed) => parsed,
                Err(e) => {
                    tracing::warn!(key = %key, error = %e, "malformed payload, starting empty");
                    HashMap::new()
                }
            },
            Ok(None) => HashMap::new(),
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "failed to read key, starting empty");
                HashMap::new()
            }
        }
    }

    fn flush<T: serde::Serialize>(&mut self, key: &str, category: &T) -> Result<()> {
        let payload = serde_json::to_string(category)
            .map_err(|e| crate::domain::TrailshareError::Storage(format!(
                "failed to serialize {key}: {e}"
            )))?;
        self.backend.write(key, &payload)
    }

    /// Flips the like flag for `post_id` and persists the like category.
    ///
    /// Two successive calls restore the original state. Ids never seen before
    /// start from `false`.
    ///
    /// # Errors
    ///
    /// Returns an error if the flush fails; the in-memory flip is kept either
    /// way.
    pub fn toggle_like(&mut self, post_id: u64) -> Result<()> {
        let flag = self.likes.entry(post_id).or_insert(false);
        *flag = !*flag;
        tracing::debug!(post_id, liked = *flag, "like toggled");

        let snapshot = self.likes.clone();
        self.flush(LIKES_KEY, &snapshot)
    }

    /// Returns whether the current user has liked `post_id`.
    ///
    /// Posts never touched report `false`.
    #[must_use]
    pub fn is_liked(&self, post_id: u64) -> bool {
        self.likes.get(&post_id).copied().unwrap_or(false)
    }

    /// Flips the bookmark flag for `post_id` and persists the bookmark category.
    ///
    /// Same contract as [`toggle_like`](Self::toggle_like), independent
    /// namespace.
    ///
    /// # Errors
    ///
    /// Returns an error if the flush fails; the in-memory flip is kept either
    /// way.
    pub fn toggle_bookmark(&mut self, post_id: u64) -> Result<()> {
        let flag = self.bookmarks.entry(post_id).or_insert(false);
        *flag = !*flag;
        tracing::debug!(post_id, bookmarked = *flag, "bookmark toggled");

        let snapshot = self.bookmarks.clone();
        self.flush(BOOKMARKS_KEY, &snapshot)
    }

    /// Returns whether the current user has bookmarked `post_id`.
    #[must_use]
    pub fn is_bookmarked(&self, post_id: u64) -> bool {
        self.bookmarks.get(&post_id).copied().unwrap_or(false)
    }

    /// Appends `comment` to the comment list for `post_id` and persists the
    /// comment category.
    ///
    /// The list is created on first use. Comments are append-only; their order
    /// is the order of `add_comment` calls.
    ///
    /// # Errors
    ///
    /// Returns an error if the flush fails; the appended comment is kept either
    /// way.
    pub fn add_comment(&mut self, post_id: u64, comment: Comment) -> Result<()> {
        self.comments.entry(post_id).or_default().push(comment);
        tracing::debug!(
            post_id,
            count = self.comments.get(&post_id).map_or(0, Vec::len),
            "comment added"
        );

        let snapshot = self.comments.clone();
        self.flush(COMMENTS_KEY, &snapshot)
    }

    /// Returns the comments for `post_id` in append order.
    ///
    /// Posts without comments yield an empty slice. Consumers must not assume a
    /// bound on the length.
    #[must_use]
    pub fn comments(&self, post_id: u64) -> &[Comment] {
        self.comments.get(&post_id).map_or(&[], Vec::as_slice)
    }

    /// Returns the number of comments on `post_id`.
    #[must_use]
    pub fn comment_count(&self, post_id: u64) -> usize {
        self.comments.get(&post_id).map_or(0, Vec::len)
    }

    /// Returns the ids of all posts currently liked, sorted ascending.
    ///
    /// Ids whose flag has been toggled back to `false` are excluded.
    #[must_use]
    pub fn liked_posts(&self) -> Vec<u64> {
        let mut ids: Vec<u64> = self
            .likes
            .iter()
            .filter(|(_, liked)| **liked)
            .map(|(id, _)| *id)
            .collect();
        ids.sort_unstable();
        ids
    }

    /// Returns the ids of all posts currently bookmarked, sorted ascending.
    #[must_use]
    pub fn bookmarked_posts(&self) -> Vec<u64> {
        let mut ids: Vec<u64> = self
            .bookmarks
            .iter()
            .filter(|(_, bookmarked)| **bookmarked)
            .map(|(id, _)| *id)
            .collect();
        ids.sort_unstable();
        ids
    }
}
