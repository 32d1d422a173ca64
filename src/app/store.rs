//! Canonical post collection for the current session.
//!
//! This module defines [`PostStore`], the insertion-ordered owner of all posts.
//! Posts are session-scoped and never persisted: only the per-user interaction
//! state survives a restart, via the storage layer.

use crate::domain::{NewPost, Post, PostImage};

/// Insertion-ordered collection of posts for the current session.
///
/// Supports creation and read-only snapshots; posts are never deleted or
/// updated in place (comments and likes live in the interaction ledger, not on
/// the post).
///
/// Ids are assigned as `current count + 1`, so they are monotonic within a
/// session but not guaranteed collision-free across sessions.
#[derive(Debug, Default)]
pub struct PostStore {
    posts: Vec<Post>,
}

impl PostStore {
    /// Creates an empty post store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the bundled sample posts.
    ///
    /// Gives a fresh install something to browse before the first submission,
    /// like the mock feed the original app ships with.
    #[must_use]
    pub fn with_sample_posts() -> Self {
        Self {
            posts: sample_posts(),
        }
    }

    /// Creates a post from form data and appends it to the collection.
    ///
    /// Assigns the next id, stamps the submission time (any date carried by the
    /// form is ignored), sets `author`, and leaves the legacy embedded
    /// `likes`/`comments` empty. Returns a reference to the stored post.
    ///
    /// The store does not validate `new_post`: callers are responsible for
    /// rejecting incomplete form data first (see
    /// [`NewPost::is_complete`]). Calling this with missing fields produces a
    /// post with missing fields.
    pub fn create(&mut self, new_post: NewPost, author: &str) -> &Post {
        let id = self.posts.len() as u64 + 1;
        let post = Post {
            id,
            title: new_post.title,
            description: new_post.description,
            location: new_post.location,
            category: new_post.category,
            date: chrono::Utc::now().to_rfc3339(),
            author: author.to_string(),
            images: new_post.images,
            likes: vec![],
            comments: vec![],
        };

        tracing::debug!(post_id = id, author = %author, "post created");
        let idx = self.posts.len();
        self.posts.push(post);
        &self.posts[idx]
    }

    /// Returns the current snapshot in insertion order.
    ///
    /// Consumers must not mutate posts in place; the derived view works on
    /// clones.
    #[must_use]
    pub fn all(&self) -> &[Post] {
        &self.posts
    }

    /// Returns the number of posts in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    /// Returns `true` when the store holds no posts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Returns the posts authored by `author`, in insertion order.
    ///
    /// Backs the profile view.
    #[must_use]
    pub fn posts_by_author(&self, author: &str) -> Vec<&Post> {
        self.posts.iter().filter(|post| post.author == author).collect()
    }

    /// Looks up a post by id.
    #[must_use]
    pub fn get(&self, post_id: u64) -> Option<&Post> {
        self.posts.iter().find(|post| post.id == post_id)
    }
}

/// The bundled sample feed.
///
/// Mirrors the mock data the original client ships with: a handful of
/// French-language travel posts with remote placeholder images.
#[must_use]
pub fn sample_posts() -> Vec<Post> {
    vec![
        Post {
            id: 1,
            title: "Aventure dans les Alpes".to_string(),
            description: "Une magnifique randonnée dans les montagnes alpines avec des \
                          paysages à couper le souffle. Chaque pas révélait des vues \
                          spectaculaires sur les vallées en contrebas."
                .to_string(),
            location: "Chamonix, France".to_string(),
            category: "Aventure".to_string(),
            date: "2023-10-15".to_string(),
            author: "User".to_string(),
            images: vec![
                PostImage {
                    id: 1,
                    url: "https://picsum.photos/seed/alps1/800/600.jpg".to_string(),
                    name: "Vue des Alpes".to_string(),
                    size: 1_024_000,
                    mime_type: "image/jpeg".to_string(),
                },
                PostImage {
                    id: 2,
                    url: "https://picsum.photos/seed/alps2/800/600.jpg".to_string(),
                    name: "Coucher de soleil".to_string(),
                    size: 950_000,
                    mime_type: "image/jpeg".to_string(),
                },
            ],
            likes: vec![],
            comments: vec![],
        },
        Post {
            id: 2,
            title: "Découverte gastronomique à Tokyo".to_string(),
            description: "Exploration des saveurs uniques de la cuisine japonaise dans \
                          les ruelles de Tokyo. Chaque repas était une célébration de la \
                          précision et de l'art culinaire japonais."
                .to_string(),
            location: "Tokyo, Japon".to_string(),
            category: "Nourriture".to_string(),
            date: "2023-09-22".to_string(),
            author: "User".to_string(),
            images: vec![PostImage {
                id: 4,
                url: "https://picsum.photos/seed/sushi1/800/600.jpg".to_string(),
                name: "Sushis frais".to_string(),
                size: 850_000,
                mime_type: "image/jpeg".to_string(),
            }],
            likes: vec![],
            comments: vec![],
        },
        Post {
            id: 3,
            title: "Trésors cachés de Marrakech".to_string(),
            description: "Immersion dans la culture marocaine à travers les souks colorés \
                          et les riads paisibles. Une expérience sensorielle inoubliable."
                .to_string(),
            location: "Marrakech, Maroc".to_string(),
            category: "Culture".to_string(),
            date: "2023-08-10".to_string(),
            author: "User".to_string(),
            images: vec![PostImage {
                id: 6,
                url: "https://picsum.photos/seed/marrakech1/800/600.jpg".to_string(),
                name: "Souk coloré".to_string(),
                size: 1_050_000,
                mime_type: "image/jpeg".to_string(),
            }],
            likes: vec![],
            comments: vec![],
        },
    ]
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
    fn created_post_carries_author_date_and_empty_legacy_fields() {
        let mut store = PostStore::new();
        let post = store.create(draft(), "alice");

        assert_eq!(post.id, 1);
        assert_eq!(post.author, "alice");
        assert_eq!(post.title, "T");
        assert!(!post.date.is_empty());
        assert!(post.likes.is_empty());
        assert!(post.comments.is_empty());
    }

    #[test]
    fn ids_are_monotonic_within_a_session() {
        let mut store = PostStore::new();
        let first = store.create(draft(), "alice").id;
        let second = store.create(draft(), "bob").id;
        assert_eq!(first, 1);
        assert_eq!(second, 2);
    }

    #[test]
    fn form_supplied_date_is_overridden_with_submission_time() {
        let mut store = PostStore::new();
        let mut new_post = draft();
        new_post.date = Some("1999-01-01".to_string());

        let post = store.create(new_post, "alice");
        assert_ne!(post.date, "1999-01-01");
        assert!(chrono::DateTime::parse_from_rfc3339(&post.date).is_ok());
    }

    #[test]
    fn snapshot_preserves_insertion_order() {
        let mut store = PostStore::new();
        store.create(draft(), "alice");
        store.create(draft(), "bob");

        let authors: Vec<&str> = store.all().iter().map(|p| p.author.as_str()).collect();
        assert_eq!(authors, vec!["alice", "bob"]);
    }

    #[test]
    fn posts_by_author_backs_the_profile_view() {
        let mut store = PostStore::new();
        store.create(draft(), "alice");
        store.create(draft(), "bob");
        store.create(draft(), "alice");

        let alices = store.posts_by_author("alice");
        assert_eq!(alices.len(), 2);
        assert!(alices.iter().all(|p| p.author == "alice"));
        assert!(store.posts_by_author("carol").is_empty());
    }

    #[test]
    fn sample_store_is_browsable_and_extendable() {
        let mut store = PostStore::with_sample_posts();
        let base = store.len();
        assert!(base > 0);

        let post_id = store.create(draft(), "alice").id;
        assert_eq!(post_id, base as u64 + 1);
    }
}
