//! Feed test utilities

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use a365::environment::StaticProbe;
use a365::version::checker::UpdateChecker;
use a365::version::error::FeedError;
use a365::version::feed::VersionFeed;
use a365::version::types::FeedVersions;

/// Feed that serves a fixed listing and counts requests
pub struct RecordingFeed {
    versions: Vec<String>,
    calls: AtomicUsize,
}

impl RecordingFeed {
    pub fn new(versions: &[&str]) -> Self {
        Self {
            versions: versions.iter().map(|v| v.to_string()).collect(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl VersionFeed for RecordingFeed {
    async fn fetch_versions(&self, _package_id: &str) -> Result<FeedVersions, FeedError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(FeedVersions::new(self.versions.clone()))
    }
}

/// Feed that always fails with an invalid response
pub struct FailingFeed;

#[async_trait]
impl VersionFeed for FailingFeed {
    async fn fetch_versions(&self, package_id: &str) -> Result<FeedVersions, FeedError> {
        Err(FeedError::InvalidResponse(format!(
            "simulated failure for {}",
            package_id
        )))
    }
}

/// Create a checker for `current` over `feed` with a fixed CI answer
pub fn checker_with(
    current: &str,
    feed: Arc<dyn VersionFeed>,
    automated: bool,
) -> UpdateChecker {
    UpdateChecker::new(current, feed, Arc::new(StaticProbe(automated)))
}
