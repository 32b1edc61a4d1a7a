//! NuGet v3 flat-container feed implementation

use std::time::Duration;

use serde_json::Value;
use tracing::{debug, warn};

use crate::version::error::FeedError;
use crate::version::feed::VersionFeed;
use crate::version::types::FeedVersions;

/// Feed implementation for the NuGet flat-container API
///
/// `GET {base_url}/{id}/index.json` answers `{"versions": ["1.0.0", ...]}`.
pub struct NuGetFeed {
    client: reqwest::Client,
    base_url: String,
}

impl NuGetFeed {
    /// Creates a new NuGetFeed with a custom base URL and request timeout
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FeedError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("a365/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The flat container keys packages by their lowercased id
    fn index_url(&self, package_id: &str) -> String {
        format!(
            "{}/{}/index.json",
            self.base_url,
            package_id.to_lowercase()
        )
    }
}

/// Pull the `versions` array out of an index document.
///
/// The member name is matched case-insensitively. Anything other than an
/// array of strings is an invalid response.
fn extract_versions(body: &Value) -> Result<Vec<String>, FeedError> {
    let object = body
        .as_object()
        .ok_or_else(|| FeedError::InvalidResponse("Expected a JSON object".to_string()))?;

    let versions = object
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case("versions"))
        .map(|(_, value)| value)
        .ok_or_else(|| FeedError::InvalidResponse("Missing versions field".to_string()))?;

    let entries = versions
        .as_array()
        .ok_or_else(|| FeedError::InvalidResponse("versions is not an array".to_string()))?;

    entries
        .iter()
        .map(|entry| {
            entry.as_str().map(str::to_string).ok_or_else(|| {
                FeedError::InvalidResponse(format!("Non-string version entry: {}", entry))
            })
        })
        .collect()
}

#[async_trait::async_trait]
impl VersionFeed for NuGetFeed {
    async fn fetch_versions(&self, package_id: &str) -> Result<FeedVersions, FeedError> {
        let url = self.index_url(package_id);
        debug!("Fetching NuGet versions: {}", url);

        let response = self.client.get(&url).send().await?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(FeedError::NotFound(package_id.to_string()));
        }

        if !status.is_success() {
            warn!("NuGet feed returned status {}: {}", status, url);
            return Err(FeedError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        let body: Value = response.json().await.map_err(|e| {
            debug!("Failed to parse NuGet feed response: {}", e);
            FeedError::InvalidResponse(e.to_string())
        })?;

        let versions = extract_versions(&body)?;
        debug!("NuGet feed listed {} versions for {}", versions.len(), package_id);

        Ok(FeedVersions::new(versions))
    }
}
