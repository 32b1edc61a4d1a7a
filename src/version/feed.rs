//! Feed trait for fetching published versions of the tool

#[cfg(test)]
use mockall::automock;

use crate::version::error::FeedError;
use crate::version::types::FeedVersions;

/// Trait for listing the versions a package feed has published
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait VersionFeed: Send + Sync {
    /// Fetches every published version of a package
    ///
    /// # Arguments
    /// * `package_id` - The package identifier (e.g., "Microsoft.Agents.A365.DevTools.Cli")
    ///
    /// # Returns
    /// * `Ok(FeedVersions)` - Raw version strings in the order the feed lists them
    /// * `Err(FeedError)` - If the request fails or the payload is malformed
    async fn fetch_versions(&self, package_id: &str) -> Result<FeedVersions, FeedError>;
}
