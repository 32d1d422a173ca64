//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user-triggered
//! events, translating them into state mutations and action sequences. It is
//! the primary control flow coordinator of the application.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the presentation shell
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` and its owned stores
//! 4. The derived view is recomputed where relevant
//! 5. Actions are collected and returned for execution by the shell
//!
//! All mutations are synchronous; an event is fully processed (including the
//! derived-view recompute and the storage flush) before the next one arrives.
//!
//! # Failure Semantics
//!
//! Persistence failures from the ledger or the analytics tracker are logged and
//! swallowed here: the in-memory mutation has already happened and stays
//! authoritative for the session, so the UI should still re-render. Invalid
//! input (incomplete post form, unknown post id, blank comment) degrades to a
//! logged no-op with prior state preserved. Nothing in this module is fatal.

use crate::app::filter::{parse_date_range, FilterParams, SortOrder};
use crate::app::view::View;
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::{Comment, NewPost};
use crate::storage::SharePlatform;

/// Events triggered by user input in the presentation shell.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The handler processes them sequentially, ensuring
/// deterministic state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Logs a user in. There is no authentication; the shell supplies whatever
    /// username was entered.
    Login {
        /// Username for the session.
        username: String,
    },

    /// Logs the current user out and returns to the discover view.
    Logout,

    /// Switches the active named view.
    Navigate(View),

    /// Submits the post form.
    ///
    /// Rejected (logged no-op) when nobody is logged in or a required field is
    /// blank; incomplete form data never reaches the post store.
    SubmitPost(NewPost),

    /// Sets the category filter ("All"/"Toutes" for no filtering).
    SetCategory(String),

    /// Sets the free-text search query.
    SetSearch(String),

    /// Sets the location-only substring filter.
    SetLocationFilter(String),

    /// Sets the inclusive date range from raw input strings.
    ///
    /// If either bound fails to parse, the range is cleared rather than
    /// rejected: an unparseable range means the date filter is not applied.
    SetDateRange {
        /// Raw start-bound input.
        start: String,
        /// Raw end-bound input.
        end: String,
    },

    /// Clears the date range.
    ClearDateRange,

    /// Selects the sort order.
    SetSort(SortOrder),

    /// Resets all filter parameters to their defaults.
    ClearFilters,

    /// Flips the like flag for a post.
    ToggleLike(u64),

    /// Flips the bookmark flag for a post.
    ToggleBookmark(u64),

    /// Adds a comment by the logged-in user to a post.
    AddComment {
        /// Id of the post being commented on.
        post_id: u64,
        /// Comment body.
        content: String,
    },

    /// Shares a post to an external platform.
    ///
    /// The share is recorded in the analytics aggregates; the returned action
    /// tells the shell to open the actual share target.
    Share {
        /// Id of the post being shared.
        post_id: u64,
        /// Platform picked in the share popover.
        platform: SharePlatform,
    },
}

/// Logs a persistence failure without interrupting the session.
///
/// The in-memory mutation is already in place; storage write failures degrade
/// to "state is session-only until the next successful flush".
fn report_flush_failure(context: &str, result: Result<()>) {
    if let Err(e) = result {
        tracing::warn!(context = %context, error = %e, "persistence failed, in-memory state kept");
    }
}

/// Processes an event, mutates application state, and returns actions to
/// execute.
///
/// Returns a re-render hint and the actions for the shell. The hint is `false`
/// when the event was rejected or changed nothing observable.
///
/// # Errors
///
/// Currently never fails: every failure mode degrades to a logged no-op or a
/// logged successful-in-memory mutation. The `Result` return keeps the
/// signature stable for shells that treat handler errors uniformly.
///
/// # Example
///
/// ```
/// use trailshare::app::{handle_event, AppState, Event, PostStore};
/// use trailshare::storage::{InteractionLedger, MemoryStorage, ShareAnalytics};
///
/// let mut state = AppState::new(
///     PostStore::new(),
///     InteractionLedger::load(Box::new(MemoryStorage::new())),
///     ShareAnalytics::load(Box::new(MemoryStorage::new())),
/// );
/// let (rerender, actions) = handle_event(
///     &mut state,
///     &Event::Login { username: "alice".to_string() },
/// )?;
/// assert!(rerender);
/// assert!(actions.is_empty());
/// # Ok::<(), trailshare::domain::TrailshareError>(())
/// ```
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Login { username } => {
            tracing::debug!(username = %username, "user logged in");
            state.current_user = Some(username.clone());
            Ok((true, vec![]))
        }
        Event::Logout => {
            tracing::debug!("user logged out");
            state.current_user = None;
            state.view = View::Discover;
            Ok((true, vec![]))
        }
        Event::Navigate(view) => {
            state.view = *view;
            Ok((true, vec![]))
        }
        Event::SubmitPost(new_post) => {
            let Some(author) = state.current_user.clone() else {
                tracing::warn!("post submission without a logged-in user rejected");
                return Ok((false, vec![]));
            };
            if !new_post.is_complete() {
                tracing::warn!("post submission with missing required fields rejected");
                return Ok((false, vec![]));
            }

            state.store.create(new_post.clone(), &author);
            state.apply_filters();
            Ok((true, vec![]))
        }
        Event::SetCategory(category) => {
            state.filters.category = category.clone();
            state.apply_filters();
            Ok((true, vec![]))
        }
        Event::SetSearch(query) => {
            state.filters.search_query = query.clone();
            state.apply_filters();
            Ok((true, vec![]))
        }
        Event::SetLocationFilter(location) => {
            state.filters.location_filter = location.clone();
            state.apply_filters();
            Ok((true, vec![]))
        }
        Event::SetDateRange { start, end } => {
            state.filters.date_range = parse_date_range(start, end);
            state.apply_filters();
            Ok((true, vec![]))
        }
        Event::ClearDateRange => {
            state.filters.date_range = None;
            state.apply_filters();
            Ok((true, vec![]))
        }
        Event::SetSort(sort_by) => {
            state.filters.sort_by = *sort_by;
            state.apply_filters();
            Ok((true, vec![]))
        }
        Event::ClearFilters => {
            state.filters = FilterParams::default();
            state.apply_filters();
            Ok((true, vec![]))
        }
        Event::ToggleLike(post_id) => {
            report_flush_failure("toggle_like", state.ledger.toggle_like(*post_id));
            Ok((true, vec![]))
        }
        Event::ToggleBookmark(post_id) => {
            report_flush_failure("toggle_bookmark", state.ledger.toggle_bookmark(*post_id));
            Ok((true, vec![]))
        }
        Event::AddComment { post_id, content } => {
            let Some(author) = state.current_user.clone() else {
                tracing::warn!(post_id, "comment without a logged-in user rejected");
                return Ok((false, vec![]));
            };
            if content.trim().is_empty() {
                tracing::debug!(post_id, "blank comment ignored");
                return Ok((false, vec![]));
            }

            let comment = Comment::new(author, content.clone());
            report_flush_failure("add_comment", state.ledger.add_comment(*post_id, comment));
            Ok((true, vec![]))
        }
        Event::Share { post_id, platform } => {
            let Some(post) = state.store.get(*post_id).cloned() else {
                tracing::warn!(post_id, "share of unknown post ignored");
                return Ok((false, vec![]));
            };

            match state.analytics.log_share(*platform, &post) {
                Ok(count) => {
                    tracing::debug!(post_id, platform = %platform, count, "share recorded");
                }
                Err(e) => {
                    tracing::warn!(error = %e, "share persistence failed, aggregate kept in memory");
                }
            }

            Ok((
                true,
                vec![Action::OpenShareTarget {
                    platform: *platform,
                    post_id: *post_id,
                }],
            ))
        }
    }
}
