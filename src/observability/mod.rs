//! Tracing subscriber initialization.
//!
//! The core instruments all mutating operations and the filter pipeline with
//! `tracing` spans and events. This module wires those to a formatted
//! subscriber so a presentation shell (or a test run with
//! `RUST_LOG=trailshare=debug`) can observe what the core is doing.

pub mod init;

pub use init::init_tracing;
