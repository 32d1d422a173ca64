//! Error types for the trailshare core.
//!
//! This module defines the centralized error type [`TrailshareError`] and a type
//! alias [`Result`] for convenient error handling throughout the crate. All errors
//! are implemented using the `thiserror` crate for automatic `Error` trait
//! implementation.

use thiserror::Error;

/// The main error type for trailshare operations.
///
/// This enum consolidates all error conditions that can occur in the core, from
/// durable-storage operations to I/O failures and configuration issues. Variants
/// that wrap underlying errors from external crates use `#[from]` for automatic
/// conversion.
///
/// Note that most recoverable conditions never surface as errors at all: malformed
/// persisted data loads as an empty structure, and invalid filter input means the
/// filter is simply not applied (see the storage and filter modules).
///
/// # Examples
///
/// ```
/// use trailshare::domain::TrailshareError;
///
/// fn validate_config() -> Result<(), TrailshareError> {
///     Err(TrailshareError::Config("missing data_dir".to_string()))
/// }
/// ```
#[derive(Debug, Error)]
pub enum TrailshareError {
    /// Durable storage operation failed.
    ///
    /// Occurs when serializing to or writing a storage key fails, for example
    /// because the disk is full or permissions changed underneath us. The
    /// in-memory state remains authoritative for the session; callers log this
    /// and carry on.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when a configuration file cannot be read or parsed, or when a
    /// required configuration value is malformed. The string describes the
    /// specific problem.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for trailshare operations.
///
/// This is a type alias for `std::result::Result<T, TrailshareError>` that
/// simplifies function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, TrailshareError>;
