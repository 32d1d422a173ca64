//! Trailshare: a client-side travel place-sharing feed core.
//!
//! Trailshare is the state-management core of a social travel app: users log
//! in, browse a filtered and sorted feed of "place" posts, create posts with
//! images, like/bookmark/comment, and share posts to external platforms. All
//! state lives in memory and in durable local storage; there is no backend,
//! no real authentication, and no network protocol.
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Presentation Shell (out of scope)                  │  ← Rendering, routing,
//! └─────────────────────────────────────────────────────┘    share SDKs, i18n
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Event handling
//! │  - Post store and derived view (filter/sort)        │  ← View coordination
//! │  - Action dispatching                               │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Storage Layer (storage/)                           │
//! │  - Interaction ledger (likes/bookmarks/comments)    │
//! │  - Share analytics aggregates                       │
//! │  - JSON file backend with atomic writes             │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Data directory resolution (infrastructure/)      │
//! │  - Post/Comment models and errors (domain/)         │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state, event handler, post store, filter pipeline
//! - [`domain`]: Core domain types (Post, Comment, errors)
//! - [`storage`]: Durable persistence (ledger, share analytics, backends)
//! - [`infrastructure`]: Platform path utilities
//! - [`observability`]: Tracing subscriber setup
//!
//! # Initialization Flow
//!
//! 1. Load (or default) a [`Config`], typically from a TOML file
//! 2. Call [`observability::init_tracing`] once
//! 3. Call [`initialize`] to open storage, load the ledger and the share
//!    aggregates, and build the [`AppState`]
//! 4. Feed user input to [`handle_event`] and execute the returned actions
//!
//! # Example
//!
//! ```
//! use trailshare::{handle_event, initialize, Config, Event};
//!
//! let config = Config {
//!     in_memory: true, // nothing touches disk
//!     ..Default::default()
//! };
//! let mut state = initialize(&config)?;
//!
//! handle_event(&mut state, &Event::Login { username: "alice".to_string() })?;
//! handle_event(&mut state, &Event::ToggleLike(1))?;
//! assert!(state.ledger.is_liked(1));
//! # Ok::<(), trailshare::domain::TrailshareError>(())
//! ```
//!
//! # Concurrency Model
//!
//! Single-threaded, event-driven, cooperative: every mutation happens
//! synchronously in response to a discrete user event, including the flush to
//! durable storage and the derived-view recompute. The storage namespace is
//! unsynchronized across concurrent processes (last write wins), acceptable for
//! the single interactive session this targets.

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod storage;

pub use app::{handle_event, Action, AppState, Event, FilterParams, PostStore, SortOrder, View};
pub use domain::{Comment, NewPost, Post, PostImage, Result, TrailshareError};
pub use storage::{InteractionLedger, ShareAnalytics, SharePlatform};

use serde::Deserialize;
use std::path::PathBuf;

use crate::infrastructure::{default_data_dir, expand_tilde};
use crate::storage::{JsonFileStorage, MemoryStorage};

/// Application configuration.
///
/// Loaded from a TOML file by the presentation shell, or constructed directly.
/// All fields have defaults, so an empty file is a valid configuration.
///
/// # Example
///
/// ```toml
/// # ~/.config/trailshare/config.toml
/// data_dir = "~/.local/share/trailshare"
/// seed_sample_posts = true
/// trace_level = "debug"
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory for the JSON storage files.
    ///
    /// Tilde-prefixed paths are expanded against the home directory. `None`
    /// selects the platform default directory; set [`Config::in_memory`] for
    /// ephemeral storage instead.
    pub data_dir: Option<String>,

    /// Keep all state in memory, writing nothing to disk. Defaults to `false`.
    pub in_memory: bool,

    /// Pre-populate the feed with the bundled sample posts. Defaults to `true`.
    pub seed_sample_posts: bool,

    /// Tracing level for this crate when `RUST_LOG` is unset.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`.
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            in_memory: false,
            seed_sample_posts: true,
            trace_level: None,
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a [`TrailshareError::Config`] if the file cannot be read or
    /// parsed.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            TrailshareError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        toml::from_str(&contents).map_err(|e| {
            TrailshareError::Config(format!("failed to parse {}: {e}", path.display()))
        })
    }

    /// Resolves the effective data directory.
    fn resolved_data_dir(&self) -> PathBuf {
        self.data_dir
            .as_deref()
            .map_or_else(default_data_dir, |dir| PathBuf::from(expand_tilde(dir)))
    }
}

fn open_backend(config: &Config) -> Result<Box<dyn storage::Storage>> {
    if config.in_memory {
        tracing::debug!("using in-memory storage");
        return Ok(Box::new(MemoryStorage::new()));
    }

    let data_dir = config.resolved_data_dir();
    match JsonFileStorage::new(data_dir.clone()) {
        Ok(backend) => Ok(Box::new(backend)),
        // An explicitly configured directory that cannot be opened is a setup
        // problem worth surfacing; the default directory degrades quietly.
        Err(e) if config.data_dir.is_some() => Err(e),
        Err(e) => {
            tracing::warn!(path = ?data_dir, error = %e, "storage unavailable, falling back to memory");
            Ok(Box::new(MemoryStorage::new()))
        }
    }
}

/// Initializes the application state from configuration.
///
/// Opens the storage backends, loads the interaction ledger and the share
/// aggregates from durable storage (malformed or absent data loads as empty),
/// seeds the post store if configured, and computes the initial derived view.
///
/// The ledger and the analytics tracker each get their own backend handle;
/// they own disjoint keys in the same namespace, so the handles never contend.
///
/// # Errors
///
/// Returns an error only if an explicitly configured data directory cannot be
/// created; the default directory degrades to in-memory storage instead.
///
/// # Side Effects
///
/// - Creates the data directory if it doesn't exist
/// - Logs the initialization at debug level
pub fn initialize(config: &Config) -> Result<AppState> {
    tracing::debug!(seed = config.seed_sample_posts, "initializing trailshare core");

    let ledger_backend = open_backend(config)?;
    let analytics_backend = open_backend(config)?;

    let ledger = InteractionLedger::load(ledger_backend);
    let analytics = ShareAnalytics::load(analytics_backend);

    let store = if config.seed_sample_posts {
        PostStore::with_sample_posts()
    } else {
        PostStore::new()
    };

    Ok(AppState::new(store, ledger, analytics))
}
