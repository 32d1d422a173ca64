//! Share-event tracking and aggregation.
//!
//! This module records every share of a post to an external platform and keeps
//! per-post, per-platform aggregates in durable storage under the
//! [`SHARE_ANALYTICS_KEY`] key. The aggregates feed the analytics dashboard in
//! the presentation layer; the actual share-platform integration (SDKs, URLs)
//! is an external collaborator.
//!
//! # Storage Format
//!
//! Aggregates are keyed by the composite `share_<postId>_<platform>` name, each
//! holding a count, first/last share timestamps, and the most recent events.
//! Only the last [`MAX_EVENTS_PER_KEY`] events are retained per key to avoid
//! unbounded growth of the stored payload.

use crate::domain::error::{Result, TrailshareError};
use crate::domain::Post;
use crate::storage::backend::{Storage, SHARE_ANALYTICS_KEY};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Maximum number of retained events per post/platform aggregate.
pub const MAX_EVENTS_PER_KEY: usize = 10;

/// External platforms a post can be shared to.
///
/// The core only records which platform was used; opening the actual share
/// target is the presentation layer's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SharePlatform {
    Facebook,
    Twitter,
    LinkedIn,
    WhatsApp,
    Email,
    Reddit,
    Pinterest,
    Telegram,
    /// Copying the post link to the clipboard counts as a share too.
    CopyLink,
}

impl SharePlatform {
    /// Returns the lowercase platform name used in composite storage keys.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Facebook => "facebook",
            Self::Twitter => "twitter",
            Self::LinkedIn => "linkedin",
            Self::WhatsApp => "whatsapp",
            Self::Email => "email",
            Self::Reddit => "reddit",
            Self::Pinterest => "pinterest",
            Self::Telegram => "telegram",
            Self::CopyLink => "copylink",
        }
    }
}

impl std::fmt::Display for SharePlatform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single recorded share.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareEvent {
    pub platform: SharePlatform,
    pub post_id: u64,
    pub post_title: String,
    pub post_category: String,
    /// ISO 8601 timestamp of the share.
    pub timestamp: String,
}

/// Aggregate share statistics for one post/platform pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareRecord {
    /// Total number of shares, including events no longer retained.
    pub count: u32,

    /// Timestamp of the first recorded share.
    pub first_share: String,

    /// Timestamp of the most recent share.
    pub last_share: String,

    /// Most recent events, capped at [`MAX_EVENTS_PER_KEY`].
    pub events: Vec<ShareEvent>,
}

/// Tracker for share events with durable aggregates.
///
/// Shares the storage namespace with the interaction ledger but owns only the
/// [`SHARE_ANALYTICS_KEY`] key. Every logged event rewrites the full aggregate
/// structure, mirroring the ledger's always-persisted contract.
///
/// # Examples
///
/// ```
/// use trailshare::storage::{MemoryStorage, ShareAnalytics, SharePlatform};
/// use trailshare::domain::Post;
///
/// # let post = Post {
/// #     id: 1, title: "T".into(), description: "D".into(), location: "L".into(),
/// #     category: "C".into(), date: "2023-10-15".into(), author: "alice".into(),
/// #     images: vec![], likes: vec![], comments: vec![],
/// # };
/// let mut analytics = ShareAnalytics::load(Box::new(MemoryStorage::new()));
/// let count = analytics.log_share(SharePlatform::Twitter, &post)?;
/// assert_eq!(count, 1);
/// assert_eq!(analytics.total_shares(Some(1)), 1);
/// # Ok::<(), trailshare::domain::TrailshareError>(())
/// ```
pub struct ShareAnalytics {
    records: HashMap<String, ShareRecord>,
    backend: Box<dyn Storage>,
}

impl ShareAnalytics {
    /// Loads share aggregates from the given backend.
    ///
    /// An absent key or malformed payload yields an empty tracker, never an
    /// error.
    #[must_use]
    pub fn load(backend: Box<dyn Storage>) -> Self {
        let records = match backend.read(SHARE_ANALYTICS_KEY) {
            Ok(Some(payload)) => match serde_json::from_str(&payload) {
                Ok(parsed) => parsed,
                Err(e) => {
                    tracing::warn!(error = %e, "malformed share analytics, starting empty");
                    HashMap::new()
                }
            },
            Ok(None) => HashMap::new(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read share analytics, starting empty");
                HashMap::new()
            }
        };

        tracing::debug!(aggregates = records.len(), "share analytics loaded");
        Self { records, backend }
    }

    fn composite_key(post_id: u64, platform: SharePlatform) -> String {
        format!("share_{post_id}_{platform}")
    }

    /// Records a share of `post` on `platform` and persists the aggregates.
    ///
    /// Bumps the count and `last_share` timestamp of the post/platform
    /// aggregate, creating it on first share, and appends the event. Only the
    /// most recent [`MAX_EVENTS_PER_KEY`] events are kept per aggregate.
    ///
    /// Returns the new share count for that post/platform pair.
    ///
    /// # Errors
    ///
    /// Returns an error if the flush fails; the in-memory aggregate is kept
    /// either way.
    pub fn log_share(&mut self, platform: SharePlatform, post: &Post) -> Result<u32> {
        let _span = tracing::debug_span!("log_share", post_id = post.id, platform = %platform)
            .entered();

        let timestamp = chrono::Utc::now().to_rfc3339();
        let event = ShareEvent {
            platform,
            post_id: post.id,
            post_title: post.title.clone(),
            post_category: post.category.clone(),
            timestamp: timestamp.clone(),
        };

        let key = Self::composite_key(post.id, platform);
        let record = self.records.entry(key).or_insert_with(|| ShareRecord {
            count: 0,
            first_share: timestamp.clone(),
            last_share: timestamp.clone(),
            events: Vec::new(),
        });

        record.count += 1;
        record.last_share = timestamp;
        record.events.push(event);
        if record.events.len() > MAX_EVENTS_PER_KEY {
            let excess = record.events.len() - MAX_EVENTS_PER_KEY;
            record.events.drain(..excess);
        }

        let count = record.count;
        tracing::debug!(count, "share recorded");

        self.flush()?;
        Ok(count)
    }

    fn flush(&mut self) -> Result<()> {
        let payload = serde_json::to_string(&self.records).map_err(|e| {
            TrailshareError::Storage(format!("failed to serialize share analytics: {e}"))
        })?;
        self.backend.write(SHARE_ANALYTICS_KEY, &payload)
    }

    /// Returns the aggregates for `post_id`, keyed by platform name.
    #[must_use]
    pub fn stats_for_post(&self, post_id: u64) -> HashMap<String, ShareRecord> {
        let prefix = format!("share_{post_id}_");
        self.records
            .iter()
            .filter(|(key, _)| key.starts_with(&prefix))
            .map(|(key, record)| (key[prefix.len()..].to_string(), record.clone()))
            .collect()
    }

    /// Returns the total share count, for one post or across all posts.
    #[must_use]
    pub fn total_shares(&self, post_id: Option<u64>) -> u32 {
        match post_id {
            Some(id) => {
                let prefix = format!("share_{id}_");
                self.records
                    .iter()
                    .filter(|(key, _)| key.starts_with(&prefix))
                    .map(|(_, record)| record.count)
                    .sum()
            }
            None => self.records.values().map(|record| record.count).sum(),
        }
    }

    /// Returns per-platform share totals across all posts, sorted by platform
    /// name for deterministic output.
    #[must_use]
    pub fn platform_breakdown(&self) -> Vec<(String, u32)> {
        let mut totals: HashMap<String, u32> = HashMap::new();
        for (key, record) in &self.records {
            if let Some(platform) = key.splitn(3, '_').nth(2) {
                *totals.entry(platform.to_string()).or_insert(0) += record.count;
            }
        }

        let mut breakdown: Vec<(String, u32)> = totals.into_iter().collect();
        breakdown.sort_by(|a, b| a.0.cmp(&b.0));
        breakdown
    }

    /// Returns the most recent retained share events, newest first, up to
    /// `limit`.
    #[must_use]
    pub fn recent_shares(&self, limit: usize) -> Vec<ShareEvent> {
        let mut events: Vec<ShareEvent> = self
            .records
            .values()
            .flat_map(|record| record.events.iter().cloned())
            .collect();
        events.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        events.truncate(limit);
        events
    }

    /// Removes all aggregates and persists the empty structure.
    ///
    /// # Errors
    ///
    /// Returns an error if the flush fails.
    pub fn clear(&mut self) -> Result<()> {
        self.records.clear();
        tracing::debug!("share analytics cleared");
        self.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::backend::MemoryStorage;
    use crate::storage::JsonFileStorage;

    fn post(id: u64) -> Post {
        Post {
            id,
            title: format!("Post {id}"),
            description: "D".to_string(),
            location: "L".to_string(),
            category: "Adventure".to_string(),
            date: "2023-10-15".to_string(),
            author: "alice".to_string(),
            images: vec![],
            likes: vec![],
            comments: vec![],
        }
    }

    #[test]
    fn counts_accumulate_per_post_and_platform() {
        let mut analytics = ShareAnalytics::load(Box::new(MemoryStorage::new()));

        analytics.log_share(SharePlatform::Twitter, &post(1)).expect("log");
        analytics.log_share(SharePlatform::Twitter, &post(1)).expect("log");
        analytics.log_share(SharePlatform::Email, &post(1)).expect("log");
        analytics.log_share(SharePlatform::Twitter, &post(2)).expect("log");

        assert_eq!(analytics.total_shares(Some(1)), 3);
        assert_eq!(analytics.total_shares(Some(2)), 1);
        assert_eq!(analytics.total_shares(None), 4);

        let stats = analytics.stats_for_post(1);
        assert_eq!(stats.get("twitter").map(|r| r.count), Some(2));
        assert_eq!(stats.get("email").map(|r| r.count), Some(1));
    }

    #[test]
    fn retained_events_are_capped_but_count_is_not() {
        let mut analytics = ShareAnalytics::load(Box::new(MemoryStorage::new()));

        for _ in 0..15 {
            analytics.log_share(SharePlatform::Reddit, &post(1)).expect("log");
        }

        let stats = analytics.stats_for_post(1);
        let record = stats.get("reddit").expect("record");
        assert_eq!(record.count, 15);
        assert_eq!(record.events.len(), MAX_EVENTS_PER_KEY);
    }

    #[test]
    fn aggregates_survive_a_reload() {
        let dir = tempfile::tempdir().expect("tempdir");

        let backend = JsonFileStorage::new(dir.path().to_path_buf()).expect("storage");
        let mut analytics = ShareAnalytics::load(Box::new(backend));
        analytics.log_share(SharePlatform::WhatsApp, &post(3)).expect("log");
        drop(analytics);

        let backend = JsonFileStorage::new(dir.path().to_path_buf()).expect("storage");
        let reloaded = ShareAnalytics::load(Box::new(backend));
        assert_eq!(reloaded.total_shares(Some(3)), 1);
    }

    #[test]
    fn platform_breakdown_spans_posts() {
        let mut analytics = ShareAnalytics::load(Box::new(MemoryStorage::new()));
        analytics.log_share(SharePlatform::Twitter, &post(1)).expect("log");
        analytics.log_share(SharePlatform::Twitter, &post(2)).expect("log");
        analytics.log_share(SharePlatform::Facebook, &post(1)).expect("log");

        assert_eq!(
            analytics.platform_breakdown(),
            vec![("facebook".to_string(), 1), ("twitter".to_string(), 2)]
        );
    }

    fn record_at(post_id: u64, platform: SharePlatform, timestamp: &str) -> (String, ShareRecord) {
        let event = ShareEvent {
            platform,
            post_id,
            post_title: format!("Post {post_id}"),
            post_category: "Adventure".to_string(),
            timestamp: timestamp.to_string(),
        };
        let key = format!("share_{post_id}_{platform}");
        let record = ShareRecord {
            count: 1,
            first_share: timestamp.to_string(),
            last_share: timestamp.to_string(),
            events: vec![event],
        };
        (key, record)
    }

    #[test]
    fn recent_shares_are_newest_first_and_truncated() {
        let records: HashMap<String, ShareRecord> = [
            record_at(1, SharePlatform::Twitter, "2023-10-15T08:00:00+00:00"),
            record_at(2, SharePlatform::Email, "2023-10-17T08:00:00+00:00"),
            record_at(3, SharePlatform::Facebook, "2023-10-16T08:00:00+00:00"),
            record_at(4, SharePlatform::Reddit, "2023-10-14T08:00:00+00:00"),
        ]
        .into_iter()
        .collect();

        let mut backend = MemoryStorage::new();
        let payload = serde_json::to_string(&records).expect("serialize");
        backend.write(SHARE_ANALYTICS_KEY, &payload).expect("write");
        let analytics = ShareAnalytics::load(Box::new(backend));

        let recent = analytics.recent_shares(3);
        let order: Vec<u64> = recent.iter().map(|event| event.post_id).collect();
        assert_eq!(order, vec![2, 3, 1]);
        assert_eq!(recent[0].platform, SharePlatform::Email);

        // A limit beyond the retained events returns everything.
        assert_eq!(analytics.recent_shares(100).len(), 4);
    }

    #[test]
    fn clear_removes_everything() {
        let mut analytics = ShareAnalytics::load(Box::new(MemoryStorage::new()));
        analytics.log_share(SharePlatform::Telegram, &post(1)).expect("log");
        analytics.clear().expect("clear");

        assert_eq!(analytics.total_shares(None), 0);
        assert!(analytics.recent_shares(10).is_empty());
    }

    #[test]
    fn malformed_payload_loads_as_empty() {
        let mut backend = MemoryStorage::new();
        backend.write(SHARE_ANALYTICS_KEY, "[1,2,3]").expect("write");

        let analytics = ShareAnalytics::load(Box::new(backend));
        assert_eq!(analytics.total_shares(None), 0);
    }
}
