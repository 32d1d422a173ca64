//! JSON file-based storage backend.
//!
//! This module implements the [`Storage`] trait over a directory of JSON files,
//! one file per storage key. It uses atomic file writes (write-to-temp + rename)
//! to prevent corruption on crashes.
//!
//! # Performance Characteristics
//!
//! - **Read**: O(1) - one file read per key
//! - **Write**: O(n) - rewrites the full payload for the key
//! - **Best for**: small per-key payloads, infrequent writes
//!
//! # Layout
//!
//! Each key maps to `<data_dir>/<key>.json`, e.g. the like flags live in
//! `userLikes.json`. Keys are fixed names from
//! [`backend`](crate::storage::backend), never user input, so they are safe to
//! use as file names directly.

use crate::domain::error::{Result, TrailshareError};
use crate::storage::backend::Storage;
use std::path::PathBuf;

/// File-per-key JSON storage backend.
///
/// Writes each key's payload to its own file inside a data directory, using a
/// temp-file-and-rename discipline so a crash mid-write never leaves a key
/// truncated.
///
/// # Thread Safety
///
/// This type is `Send` but not `Sync`. All mutations in the application happen
/// synchronously on a single thread, matching the event-driven architecture.
pub struct JsonFileStorage {
    /// Directory holding one `<key>.json` file per storage key.
    data_dir: PathBuf,
}

impl JsonFileStorage {
    /// Creates or opens a JSON file storage backend rooted at `data_dir`.
    ///
    /// The directory (and any missing parents) is created if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use trailshare::storage::JsonFileStorage;
    /// use std::path::PathBuf;
    ///
    /// let storage = JsonFileStorage::new(PathBuf::from("/tmp/trailshare"))?;
    /// # Ok::<(), trailshare::domain::TrailshareError>(())
    /// ```
    pub fn new(data_dir: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?data_dir, "initializing JSON file storage");
        std::fs::create_dir_all(&data_dir)?;
        Ok(Self { data_dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{key}.json"))
    }
}

impl Storage for JsonFileStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            tracing::debug!(key = %key, "storage key not present");
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&path)?;
        tracing::debug!(key = %key, bytes = contents.len(), "storage key read");
        Ok(Some(contents))
    }

    fn write(&mut self, key: &str, payload: &str) -> Result<()> {
        let _span = tracing::debug_span!("storage_write", key = %key).entered();

        let path = self.path_for(key);
        let tmp_path = path.with_extension("json.tmp");

        tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
        std::fs::write(&tmp_path, payload).map_err(|e| {
            TrailshareError::Storage(format!("failed to write key {key}: {e}"))
        })?;

        tracing::trace!("renaming temporary file to final location");
        std::fs::rename(&tmp_path, &path).map_err(|e| {
            TrailshareError::Storage(format!("failed to commit key {key}: {e}"))
        })?;

        tracing::debug!(bytes = payload.len(), "storage key written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::backend::LIKES_KEY;

    #[test]
    fn missing_key_reads_as_none() {
        let dir = tempfile::tempdir().expect("tempdir");
        let storage = JsonFileStorage::new(dir.path().to_path_buf()).expect("storage");
        assert!(storage.read(LIKES_KEY).expect("read").is_none());
    }

    #[test]
    fn written_key_reads_back() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut storage = JsonFileStorage::new(dir.path().to_path_buf()).expect("storage");

        storage.write(LIKES_KEY, "{\"3\":true}").expect("write");
        assert_eq!(
            storage.read(LIKES_KEY).expect("read"),
            Some("{\"3\":true}".to_string())
        );
    }

    #[test]
    fn write_replaces_previous_payload() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut storage = JsonFileStorage::new(dir.path().to_path_buf()).expect("storage");

        storage.write(LIKES_KEY, "{\"1\":true}").expect("first write");
        storage.write(LIKES_KEY, "{}").expect("second write");
        assert_eq!(storage.read(LIKES_KEY).expect("read"), Some("{}".to_string()));
    }

    #[test]
    fn write_leaves_no_temp_file_behind() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut storage = JsonFileStorage::new(dir.path().to_path_buf()).expect("storage");

        storage.write(LIKES_KEY, "{}").expect("write");
        let leftovers: Vec<_> = std::fs::read_dir(dir.path())
            .expect("read_dir")
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().is_some_and(|ext| ext == "tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn keys_do_not_share_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut storage = JsonFileStorage::new(dir.path().to_path_buf()).expect("storage");

        storage.write("userLikes", "{\"1\":true}").expect("write");
        storage.write("userBookmarks", "{\"2\":true}").expect("write");

        assert_eq!(
            storage.read("userLikes").expect("read"),
            Some("{\"1\":true}".to_string())
        );
        assert_eq!(
            storage.read("userBookmarks").expect("read"),
            Some("{\"2\":true}".to_string())
        );
    }
}
