//! Shared test utilities for the agent-publisher workspace.
//!
//! This crate provides recording collaborators so tests can assert exactly
//! which filesystem and store calls a publish made. It is a dev-dependency
//! only, never published.
//!
//! # Modules
//!
//! - [`fs`] - [`RecordingFilesystem`] with in-memory files
//! - [`store`] - [`RecordingStore`] with scripted addresses and failures
//! - [`fixtures`] - sample configuration, keys and a fixed clock

pub mod fixtures;
pub mod fs;
pub mod store;

pub use fixtures::{TEST_ADDRESS, TEST_PRIVATE_KEY, fixed_clock, fixed_instant, sample_config};
pub use fs::{FsCall, RecordingFilesystem};
pub use store::RecordingStore;
