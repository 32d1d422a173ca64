//! Filter and sort pipeline for the post feed.
//!
//! This module implements the derived view over the post collection: a pure
//! function of the master post list and the current [`FilterParams`], recomputed
//! in full after any relevant state change (no incremental computation, no
//! reactive framework).
//!
//! # Pipeline
//!
//! Steps apply in a fixed order, each on the output of the previous one
//! (conjunctive filtering):
//!
//! 1. Category: exact, case-sensitive match unless the "all" sentinel is set
//! 2. Search: trimmed, case-insensitive substring over title, description, and
//!    location
//! 3. Location: trimmed, case-insensitive substring over location only, kept
//!    as an independent predicate in addition to step 2, both conjunctive
//! 4. Date range: inclusive bounds, applied only when both bounds are present
//! 5. Sort by the selected [`SortOrder`]
//!
//! The result is always a new ordered sequence; the source is never mutated.

use crate::domain::Post;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Category values meaning "no category filter applied".
///
/// The presentation layer ships with both English and French chrome, so both
/// sentinel spellings are honored.
const ALL_SENTINELS: [&str; 2] = ["All", "Toutes"];

/// Returns `true` if `category` is one of the "no filter" sentinel values.
#[must_use]
pub fn is_all_sentinel(category: &str) -> bool {
    ALL_SENTINELS.contains(&category)
}

/// Sort order for the derived view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Descending by post date.
    #[default]
    Newest,

    /// Ascending by post date.
    Oldest,

    /// Declared by the feed chrome but without a defined comparator; leaves the
    /// order unchanged. Not an error.
    Popular,
}

/// Parameters driving the filter/sort pipeline.
///
/// Six independent inputs; defaults mean "everything, newest first". The
/// parameters are plain data: mutate them and call
/// [`compute_view`] (or [`AppState::apply_filters`](crate::app::AppState::apply_filters))
/// to refresh the derived view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterParams {
    /// Exact category to retain, or an "all" sentinel for no filtering.
    pub category: String,

    /// Free-text query matched against title, description, and location.
    pub search_query: String,

    /// Location-only substring filter, independent of `search_query`.
    pub location_filter: String,

    /// Inclusive date bounds; `None` means no date filtering.
    pub date_range: Option<(DateTime<Utc>, DateTime<Utc>)>,

    /// Selected sort order.
    pub sort_by: SortOrder,
}

impl Default for FilterParams {
    fn default() -> Self {
        Self {
            category: "All".to_string(),
            search_query: String::new(),
            location_filter: String::new(),
            date_range: None,
            sort_by: SortOrder::default(),
        }
    }
}

/// Parses a post or filter date string.
///
/// Accepts full RFC 3339 timestamps and bare `YYYY-MM-DD` dates (interpreted as
/// midnight UTC). Returns `None` for anything else; callers treat that as
/// "no date available" rather than an error.
#[must_use]
pub fn parse_date(input: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(input.trim()) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Parses a date-range input into inclusive bounds.
///
/// Returns `None` if either bound fails to parse; an unparseable range means
/// the date filter is simply not applied.
#[must_use]
pub fn parse_date_range(start: &str, end: &str) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    match (parse_date(start), parse_date(end)) {
        (Some(start), Some(end)) => Some((start, end)),
        _ => {
            tracing::debug!(start = %start, end = %end, "unparseable date range, filter not applied");
            None
        }
    }
}

fn cmp_post_dates(a: &Post, b: &Post) -> Ordering {
    match (parse_date(&a.date), parse_date(&b.date)) {
        (Some(date_a), Some(date_b)) => date_a.cmp(&date_b),
        // A post without a parseable date keeps its relative position.
        _ => Ordering::Equal,
    }
}

/// Computes the derived view: the filtered, sorted subset of `posts`.
///
/// Deterministic, pure function of its inputs. Returns a fresh sequence of
/// cloned posts; the source slice is never reordered or mutated.
///
/// # Examples
///
/// ```
/// use trailshare::app::filter::{compute_view, FilterParams};
///
/// let params = FilterParams {
///     category: "Food".to_string(),
///     ..Default::default()
/// };
/// let view = compute_view(&[], &params);
/// assert!(view.is_empty());
/// ```
#[must_use]
pub fn compute_view(posts: &[Post], params: &FilterParams) -> Vec<Post> {
    let _span = tracing::debug_span!(
        "compute_view",
        total_posts = posts.len(),
        category = %params.category,
        sort_by = ?params.sort_by
    )
    .entered();

    let query = params.search_query.trim().to_lowercase();
    let location = params.location_filter.trim().to_lowercase();

    let mut view: Vec<Post> = posts
        .iter()
        .filter(|post| {
            if !is_all_sentinel(&params.category) && post.category != params.category {
                return false;
            }

            if !query.is_empty() {
                let hit = post.title.to_lowercase().contains(&query)
                    || post.description.to_lowercase().contains(&query)
                    || post.location.to_lowercase().contains(&query);
                if !hit {
                    return false;
                }
            }

            if !location.is_empty() && !post.location.to_lowercase().contains(&location) {
                return false;
            }

            if let Some((start, end)) = params.date_range {
                match parse_date(&post.date) {
                    Some(date) => {
                        if date < start || date > end {
                            return false;
                        }
                    }
                    // A post whose date cannot be parsed never falls inside a range.
                    None => return false,
                }
            }

            true
        })
        .cloned()
        .collect();

    match params.sort_by {
        SortOrder::Newest => view.sort_by(|a, b| cmp_post_dates(b, a)),
        SortOrder::Oldest => view.sort_by(cmp_post_dates),
        SortOrder::Popular => {}
    }

    tracing::debug!(view_len = view.len(), "derived view computed");
    view
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: u64, category: &str, location: &str, date: &str) -> Post {
        Post {
            id,
            title: format!("Trip {id}"),
            description: format!("Description for trip {id}"),
            location: location.to_string(),
            category: category.to_string(),
            date: date.to_string(),
            author: "alice".to_string(),
            images: vec![],
            likes: vec![],
            comments: vec![],
        }
    }

    fn ids(view: &[Post]) -> Vec<u64> {
        view.iter().map(|p| p.id).collect()
    }

    #[test]
    fn category_and_location_filters_are_conjunctive() {
        let posts = vec![
            post(1, "Food", "Paris", "2023-01-01"),
            post(2, "Adventure", "Paris", "2023-06-01"),
        ];

        let params = FilterParams {
            category: "Food".to_string(),
            location_filter: "Paris".to_string(),
            ..Default::default()
        };

        assert_eq!(ids(&compute_view(&posts, &params)), vec![1]);
    }

    #[test]
    fn sentinel_categories_apply_no_filter() {
        let posts = vec![
            post(1, "Food", "Paris", "2023-01-01"),
            post(2, "Adventure", "Lyon", "2023-06-01"),
        ];

        for sentinel in ["All", "Toutes"] {
            let params = FilterParams {
                category: sentinel.to_string(),
                sort_by: SortOrder::Oldest,
                ..Default::default()
            };
            assert_eq!(ids(&compute_view(&posts, &params)), vec![1, 2]);
        }
    }

    #[test]
    fn category_match_is_exact_and_case_sensitive() {
        let posts = vec![post(1, "Food", "Paris", "2023-01-01")];
        let params = FilterParams {
            category: "food".to_string(),
            ..Default::default()
        };
        assert!(compute_view(&posts, &params).is_empty());
    }

    #[test]
    fn search_matches_title_description_or_location() {
        let mut lyon = post(2, "Food", "Lyon", "2023-02-01");
        lyon.title = "Bouchon crawl".to_string();
        lyon.description = "Eating our way through traboules".to_string();
        let posts = vec![post(1, "Food", "Paris", "2023-01-01"), lyon];

        let by_location = FilterParams {
            search_query: "  PARIS ".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&compute_view(&posts, &by_location)), vec![1]);

        let by_description = FilterParams {
            search_query: "traboules".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&compute_view(&posts, &by_description)), vec![2]);
    }

    #[test]
    fn search_and_location_filters_both_apply() {
        let posts = vec![
            post(1, "Food", "Paris", "2023-01-01"),
            post(2, "Food", "Lyon", "2023-02-01"),
        ];

        // The search query alone matches both posts (shared description text),
        // but the location predicate narrows the result to Lyon.
        let params = FilterParams {
            search_query: "trip".to_string(),
            location_filter: "lyon".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&compute_view(&posts, &params)), vec![2]);
    }

    #[test]
    fn date_range_bounds_are_inclusive() {
        let posts = vec![
            post(1, "Food", "Paris", "2023-01-01"),
            post(2, "Food", "Paris", "2023-03-15"),
            post(3, "Food", "Paris", "2023-06-01"),
        ];

        let params = FilterParams {
            date_range: parse_date_range("2023-01-01", "2023-03-15"),
            sort_by: SortOrder::Oldest,
            ..Default::default()
        };
        assert_eq!(ids(&compute_view(&posts, &params)), vec![1, 2]);
    }

    #[test]
    fn unparseable_post_date_is_excluded_from_ranges() {
        let posts = vec![post(1, "Food", "Paris", "someday soon")];
        let params = FilterParams {
            date_range: parse_date_range("2023-01-01", "2023-12-31"),
            ..Default::default()
        };
        assert!(compute_view(&posts, &params).is_empty());
    }

    #[test]
    fn unparseable_range_input_parses_to_none() {
        assert!(parse_date_range("not a date", "2023-12-31").is_none());
        assert!(parse_date_range("2023-01-01", "").is_none());
        assert!(parse_date_range("2023-01-01", "2023-12-31").is_some());
    }

    #[test]
    fn newest_and_oldest_sort_by_parsed_date() {
        let posts = vec![
            post(1, "Food", "Paris", "2023-01-01"),
            post(2, "Food", "Paris", "2023-06-01"),
            post(3, "Food", "Paris", "2023-03-01"),
        ];

        let newest = FilterParams {
            sort_by: SortOrder::Newest,
            ..Default::default()
        };
        assert_eq!(ids(&compute_view(&posts, &newest)), vec![2, 3, 1]);

        let oldest = FilterParams {
            sort_by: SortOrder::Oldest,
            ..Default::default()
        };
        assert_eq!(ids(&compute_view(&posts, &oldest)), vec![1, 3, 2]);
    }

    #[test]
    fn rfc3339_and_bare_dates_sort_together() {
        let posts = vec![
            post(1, "Food", "Paris", "2023-06-01T18:30:00Z"),
            post(2, "Food", "Paris", "2023-06-01"),
        ];
        let params = FilterParams {
            sort_by: SortOrder::Oldest,
            ..Default::default()
        };
        assert_eq!(ids(&compute_view(&posts, &params)), vec![2, 1]);
    }

    #[test]
    fn popular_sort_leaves_order_unchanged() {
        let posts = vec![
            post(1, "Food", "Paris", "2023-01-01"),
            post(2, "Food", "Paris", "2023-06-01"),
            post(3, "Food", "Paris", "2023-03-01"),
        ];
        let params = FilterParams {
            sort_by: SortOrder::Popular,
            ..Default::default()
        };
        assert_eq!(ids(&compute_view(&posts, &params)), vec![1, 2, 3]);
    }

    #[test]
    fn source_slice_is_never_mutated() {
        let posts = vec![
            post(2, "Food", "Paris", "2023-06-01"),
            post(1, "Food", "Paris", "2023-01-01"),
        ];
        let params = FilterParams {
            sort_by: SortOrder::Oldest,
            ..Default::default()
        };
        let view = compute_view(&posts, &params);

        assert_eq!(ids(&view), vec![1, 2]);
        assert_eq!(ids(&posts), vec![2, 1]);
    }
}
