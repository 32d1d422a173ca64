//! Domain layer for the trailshare core.
//!
//! This module contains the core domain types for the application, independent of
//! storage and presentation concerns. It follows domain-driven design principles
//! by keeping the data model isolated from external dependencies.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`post`]: Post model, attached images, and form data
//! - [`comment`]: Comment model
//!
//! # Examples
//!
//! ```
//! use trailshare::domain::{NewPost, Result};
//!
//! fn draft_post() -> Result<NewPost> {
//!     Ok(NewPost {
//!         title: "Hidden beaches of Menorca".to_string(),
//!         description: "A week of coves only reachable on foot.".to_string(),
//!         location: "Menorca, Spain".to_string(),
//!         category: "Adventure".to_string(),
//!         ..Default::default()
//!     })
//! }
//! ```

pub mod comment;
pub mod error;
pub mod post;

pub use comment::Comment;
pub use error::{Result, TrailshareError};
pub use post::{NewPost, Post, PostImage};
