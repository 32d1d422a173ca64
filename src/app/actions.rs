//! Actions representing side effects to be executed by the presentation shell.
//!
//! This module defines the [`Action`] type, the imperative commands produced by
//! the event handler after processing an event. Actions bridge the core's pure
//! state transformations and the effectful operations only the shell can
//! perform (opening share targets, talking to platform SDKs).
//!
//! The event handler returns a `Vec<Action>` after each event so multiple side
//! effects can be queued atomically; the shell executes them in sequence.

use crate::storage::SharePlatform;

/// Commands for the presentation shell to execute.
///
/// The core records every share in the analytics tracker itself; the action
/// only tells the shell to hand the post off to the external platform, which
/// is out of scope for the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Opens the external share target for a post.
    ///
    /// Emitted after the share has been recorded in the analytics aggregates.
    OpenShareTarget {
        /// Platform the user picked in the share popover.
        platform: SharePlatform,
        /// Id of the post being shared.
        post_id: u64,
    },
}
