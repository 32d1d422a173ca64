//! Application state container and derived-view management.
//!
//! This module defines [`AppState`], the central state container of the core,
//! holding the post collection, the interaction ledger, the share analytics
//! tracker, the current filter parameters, and the session (logged-in user and
//! active view). It is the single source of truth the presentation layer reads.
//!
//! # Architecture
//!
//! `AppState` separates canonical data (the post store, the ledger) from
//! derived state (the filtered post list). The derived view is recomputed
//! explicitly by [`AppState::apply_filters`] after every relevant mutation.
//! There is no reactive framework and no incremental computation; a full
//! recompute completes before the next event is processed.
//!
//! # Example
//!
//! ```
//! use trailshare::app::{AppState, PostStore};
//! use trailshare::storage::{InteractionLedger, MemoryStorage, ShareAnalytics};
//!
//! let state = AppState::new(
//!     PostStore::with_sample_posts(),
//!     InteractionLedger::load(Box::new(MemoryStorage::new())),
//!     ShareAnalytics::load(Box::new(MemoryStorage::new())),
//! );
//! assert!(!state.filtered_posts().is_empty());
//! ```

use crate::app::filter::{compute_view, FilterParams};
use crate::app::store::PostStore;
use crate::app::view::View;
use crate::domain::Post;
use crate::storage::{InteractionLedger, ShareAnalytics};

/// Central application state container.
///
/// Mutated by the event handler in response to user events; read by the
/// presentation layer. The ledger and analytics tracker are owned here and
/// persist themselves on every mutation.
pub struct AppState {
    /// Canonical, insertion-ordered post collection for the session.
    pub store: PostStore,

    /// Durable per-post interaction state (likes, bookmarks, comments).
    pub ledger: InteractionLedger,

    /// Durable share-event aggregates.
    pub analytics: ShareAnalytics,

    /// Current filter and sort parameters.
    pub filters: FilterParams,

    /// Username of the logged-in user, `None` before login.
    pub current_user: Option<String>,

    /// Currently active named view.
    pub view: View,

    /// Derived view: posts matching `filters`, in sorted order.
    ///
    /// Recomputed by [`apply_filters`](Self::apply_filters); never mutated
    /// directly.
    filtered_posts: Vec<Post>,
}

impl AppState {
    /// Creates the application state and computes the initial derived view.
    #[must_use]
    pub fn new(store: PostStore, ledger: InteractionLedger, analytics: ShareAnalytics) -> Self {
        let mut state = Self {
            store,
            ledger,
            analytics,
            filters: FilterParams::default(),
            current_user: None,
            view: View::default(),
            filtered_posts: vec![],
        };
        state.apply_filters();
        state
    }

    /// Recomputes the derived view from the post collection and the current
    /// filter parameters.
    ///
    /// Called after every mutation of the posts or of any filter parameter.
    /// The computation is a pure function of its inputs (see
    /// [`compute_view`]); this method just stores the result.
    pub fn apply_filters(&mut self) {
        self.filtered_posts = compute_view(self.store.all(), &self.filters);
        tracing::debug!(
            total = self.store.len(),
            filtered = self.filtered_posts.len(),
            "filters applied"
        );
    }

    /// Returns the current derived view in sorted order.
    ///
    /// Read-only; the sequence is replaced wholesale on recomputation.
    #[must_use]
    pub fn filtered_posts(&self) -> &[Post] {
        &self.filtered_posts
    }

    /// Returns `true` when a user is logged in.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.current_user.is_some()
    }

    /// Returns the logged-in user's own posts, for the profile view.
    ///
    /// Empty when nobody is logged in.
    #[must_use]
    pub fn profile_posts(&self) -> Vec<&Post> {
        self.current_user
            .as_deref()
            .map(|user| self.store.posts_by_author(user))
            .unwrap_or_default()
    }
}
