//! Shared test utilities

pub mod feed;

pub use feed::{FailingFeed, RecordingFeed, checker_with};
