//! Storage backend abstraction.
//!
//! This module defines the [`Storage`] trait that abstracts over durable
//! key-value persistence, plus the fixed key names that make up the storage
//! namespace. Ledger and analytics state is serialized as JSON and written under
//! these keys; swapping the backend never changes business logic.
//!
//! # Design Philosophy
//!
//! The trait is deliberately a flat string-keyed blob store rather than a
//! generic ORM. Every mutating ledger operation serializes the entire affected
//! category and writes it under its fixed key, so the backend only needs two
//! operations. The namespace is process-wide and unsynchronized across
//! concurrent processes: last write wins, by design of the single-session
//! target.

use crate::domain::error::Result;
use std::collections::HashMap;

/// Storage key for the per-post like flags.
pub const LIKES_KEY: &str = "userLikes";

/// Storage key for the per-post bookmark flags.
pub const BOOKMARKS_KEY: &str = "userBookmarks";

/// Storage key for the per-post comment lists.
pub const COMMENTS_KEY: &str = "userComments";

/// Storage key for the share-event aggregates.
///
/// Owned by the share-analytics tracker, not the ledger, but it lives in the
/// same namespace and must not collide with the ledger keys above.
pub const SHARE_ANALYTICS_KEY: &str = "shareAnalytics";

/// Abstraction over durable key-value storage backends.
///
/// Implementations must tolerate absent keys on read and must make writes as
/// atomic as the medium allows, so that a crash never leaves a key half-written.
///
/// # Implementations
///
/// - [`JsonFileStorage`](crate::storage::JsonFileStorage): one JSON file per key
///   with atomic writes (default)
/// - [`MemoryStorage`]: ephemeral in-process map, used in tests and anywhere
///   durability is not wanted
pub trait Storage: Send {
    /// Reads the payload stored under `key`.
    ///
    /// Returns `Ok(None)` if the key has never been written.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying read fails for reasons other than
    /// absence (permissions, I/O).
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Writes `payload` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails (quota, permissions, I/O). Callers
    /// treat this as non-fatal: the in-memory state stays authoritative for the
    /// rest of the session.
    fn write(&mut self, key: &str, payload: &str) -> Result<()>;
}

/// Ephemeral in-process storage backend.
///
/// Holds key/value pairs in a `HashMap` with no durability. Primarily used by
/// tests, and as the backend of last resort when no data directory is
/// available.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    /// Creates an empty in-memory backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, payload: &str) -> Result<()> {
        self.entries.insert(key.to_string(), payload.to_string());
        Ok(())
    }
}
