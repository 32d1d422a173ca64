//! Post domain model.
//!
//! This module defines the core [`Post`] type representing a user-authored record
//! of a visited place, along with [`PostImage`] for attached pictures and
//! [`NewPost`] for form submissions. Posts are immutable after creation: all
//! per-viewer interaction state (likes, bookmarks, comments) lives in the
//! interaction ledger, keyed by post id.

use serde::{Deserialize, Serialize};

use super::comment::Comment;

/// An image attached to a post.
///
/// Carries the metadata the upload form captures. The `url` may point at a remote
/// image or a local object URL; the core never fetches or decodes image bytes
/// (image handling belongs to the presentation layer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostImage {
    /// Unique image identifier within the session.
    pub id: u64,

    /// Location of the image content.
    pub url: String,

    /// Original file name, used as a caption fallback.
    pub name: String,

    /// File size in bytes as reported by the upload form.
    pub size: u64,

    /// MIME type of the image, e.g. `image/jpeg`.
    #[serde(rename = "type")]
    pub mime_type: String,
}

/// A user-authored record describing a visited place.
///
/// Posts are created from a [`NewPost`] form submission by the post store, which
/// assigns the id, the author, and the creation timestamp. They are never deleted
/// and never mutated afterwards.
///
/// # Fields
///
/// - `id`: session-unique integer, assigned by the store (`current count + 1`,
///   monotonic within a session, not collision-free across sessions)
/// - `date`: ISO 8601 timestamp string, either a full RFC 3339 timestamp or a
///   bare `YYYY-MM-DD` date
/// - `likes` / `comments`: legacy embedded interaction state, superseded by the
///   interaction ledger; always empty after creation and kept only for
///   compatibility with persisted post payloads that still carry them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub location: String,
    pub category: String,
    pub date: String,
    pub author: String,
    #[serde(default)]
    pub images: Vec<PostImage>,

    /// Deprecated embedded like list. The interaction ledger is authoritative.
    #[serde(default)]
    pub likes: Vec<String>,

    /// Deprecated embedded comment list. The interaction ledger is authoritative.
    #[serde(default)]
    pub comments: Vec<Comment>,
}

/// Form data for creating a post.
///
/// Produced by the presentation layer's post form. The four text fields are
/// required; the form layer is responsible for validating them before
/// submission (see [`NewPost::is_complete`]). Any `date` supplied by the form is
/// ignored at creation time: the store stamps the submission time itself.
///
/// # Examples
///
/// ```
/// use trailshare::domain::NewPost;
///
/// let draft = NewPost {
///     title: "Sunrise at Mount Batur".to_string(),
///     description: "Two hour hike in the dark, worth every step.".to_string(),
///     location: "Bali, Indonesia".to_string(),
///     category: "Adventure".to_string(),
///     ..Default::default()
/// };
/// assert!(draft.is_complete());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub description: String,
    pub location: String,
    pub category: String,

    /// Date field from the form, if present. Overridden with the submission
    /// time when the post is created.
    #[serde(default)]
    pub date: Option<String>,

    /// Images attached via the upload form.
    #[serde(default)]
    pub images: Vec<PostImage>,
}

impl NewPost {
    /// Returns `true` when all required text fields are non-empty after trimming.
    ///
    /// The post store itself does not re-validate (documented caller contract);
    /// the event handler uses this to reject incomplete submissions before they
    /// reach the store.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty()
            && !self.description.trim().is_empty()
            && !self.location.trim().is_empty()
            && !self.category.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> NewPost {
        NewPost {
            title: "T".to_string(),
            description: "D".to_string(),
            location: "L".to_string(),
            category: "C".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn complete_draft_passes_validation() {
        assert!(draft().is_complete());
    }

    #[test]
    fn blank_required_field_fails_validation() {
        let mut missing_title = draft();
        missing_title.title = "   ".to_string();
        assert!(!missing_title.is_complete());

        let mut missing_category = draft();
        missing_category.category = String::new();
        assert!(!missing_category.is_complete());
    }

    #[test]
    fn post_deserializes_without_legacy_fields() {
        let payload = r#"{
            "id": 1,
            "title": "T",
            "description": "D",
            "location": "L",
            "category": "C",
            "date": "2023-10-15",
            "author": "alice"
        }"#;
        let post: Post = serde_json::from_str(payload).expect("valid post payload");
        assert!(post.likes.is_empty());
        assert!(post.comments.is_empty());
        assert!(post.images.is_empty());
    }

    #[test]
    fn image_mime_type_round_trips_as_type() {
        let image = PostImage {
            id: 7,
            url: "https://example.com/a.jpg".to_string(),
            name: "a.jpg".to_string(),
            size: 1024,
            mime_type: "image/jpeg".to_string(),
        };
        let json = serde_json::to_string(&image).expect("serializable");
        assert!(json.contains("\"type\":\"image/jpeg\""));
    }
}
