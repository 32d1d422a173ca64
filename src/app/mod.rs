//! Application layer coordinating state, events, and actions.
//!
//! This module is the core logic layer, sitting between the presentation shell
//! and the domain/storage layers. It implements the event-driven architecture
//! that powers the interactive feed.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                                │
//!                                └→ Derived View Recompute (filter/sort)
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`filter`]: Pure filter/sort pipeline producing the derived view
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`state`]: Central application state container
//! - [`store`]: Canonical post collection
//! - [`view`]: Named views routed by the shell

pub mod actions;
pub mod filter;
pub mod handler;
pub mod state;
pub mod store;
pub mod view;

pub use actions::Action;
pub use filter::{compute_view, FilterParams, SortOrder};
pub use handler::{handle_event, Event};
pub use state::AppState;
pub use store::PostStore;
pub use view::View;
