//! Infrastructure layer: platform-specific utilities.
//!
//! Currently limited to path resolution for the durable storage directory.

pub mod paths;

pub use paths::{default_data_dir, expand_tilde};
