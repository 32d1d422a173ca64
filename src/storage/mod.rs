//! Storage layer for durable per-user interaction state.
//!
//! This module provides the persistence abstraction for likes, bookmarks,
//! comments, and share-event aggregates. All state lives in memory and is
//! flushed in full to a key-value backend on every mutation, so a page-reload
//! equivalent (process restart) reproduces the same state.
//!
//! # Modules
//!
//! - `backend`: Storage trait abstraction and the fixed key namespace
//! - `json`: JSON file-per-key storage implementation
//! - `ledger`: Per-post like/bookmark/comment ledger
//! - `analytics`: Share-event tracking and aggregates

pub mod analytics;
pub mod backend;
pub mod json;
pub mod ledger;

pub use analytics::{ShareAnalytics, ShareEvent, SharePlatform, ShareRecord};
pub use backend::{MemoryStorage, Storage};
pub use json::JsonFileStorage;
pub use ledger::InteractionLedger;
