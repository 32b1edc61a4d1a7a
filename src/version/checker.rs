//! Update check orchestration

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::config::PACKAGE_ID;
use crate::environment::AutomationProbe;
use crate::version::error::CheckError;
use crate::version::feed::VersionFeed;
use crate::version::semver::{CompareResult, compare_versions, select_latest};
use crate::version::types::VersionCheckResult;
use crate::version::upgrade::upgrade_command;

/// Checks the package feed for a newer release of the running tool
///
/// The check is advisory: feed failures and unparseable data all come back
/// as "no update available". Only cancellation is returned as an error.
pub struct UpdateChecker {
    current_version: String,
    package_id: String,
    feed: Arc<dyn VersionFeed>,
    probe: Arc<dyn AutomationProbe>,
}

impl UpdateChecker {
    pub fn new(
        current_version: impl Into<String>,
        feed: Arc<dyn VersionFeed>,
        probe: Arc<dyn AutomationProbe>,
    ) -> Self {
        Self {
            current_version: current_version.into(),
            package_id: PACKAGE_ID.to_string(),
            feed,
            probe,
        }
    }

    /// Query a different package on the feed
    pub fn with_package_id(mut self, package_id: impl Into<String>) -> Self {
        self.package_id = package_id.into();
        self
    }

    /// Run a single update check.
    ///
    /// A token that is already cancelled, or one cancelled while the feed
    /// request is in flight, yields `Err(CheckError::Cancelled)`. The feed is
    /// never contacted when the probe reports an automated environment.
    pub async fn check_for_updates(
        &self,
        cancel: &CancellationToken,
    ) -> Result<VersionCheckResult, CheckError> {
        if cancel.is_cancelled() {
            return Err(CheckError::Cancelled);
        }

        if self.probe.is_automated() {
            debug!("Skipping update check: automated environment");
            return Ok(VersionCheckResult::no_update(&self.current_version));
        }

        let fetched = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(CheckError::Cancelled),
            result = self.feed.fetch_versions(&self.package_id) => result,
        };

        let feed_versions = match fetched {
            Ok(feed_versions) => feed_versions,
            Err(e) => {
                debug!(
                    "Update check for {} degraded to no update: {}",
                    self.package_id, e
                );
                return Ok(VersionCheckResult::no_update(&self.current_version));
            }
        };

        Ok(self.evaluate(&feed_versions.versions))
    }

    /// Compare the running version against a feed listing
    pub fn evaluate(&self, versions: &[String]) -> VersionCheckResult {
        let Some(latest) = select_latest(versions) else {
            debug!(
                "No parseable versions among {} feed entries for {}",
                versions.len(),
                self.package_id
            );
            return VersionCheckResult::no_update(&self.current_version);
        };

        let status = compare_versions(&self.current_version, latest);
        let update_available = status == CompareResult::Outdated;
        info!(
            "Update check for {}: current {} latest {} ({:?})",
            self.package_id, self.current_version, latest, status
        );

        VersionCheckResult {
            update_available,
            current_version: self.current_version.clone(),
            latest_version: Some(latest.to_string()),
            upgrade_command: update_available.then(|| upgrade_command(&self.package_id, latest)),
        }
    }
}
