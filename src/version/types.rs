//! Common types for the update check

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

/// A parsed tool version.
///
/// Ordering and equality look only at `major.minor.patch` and the synthesized
/// `revision`. The raw pre-release and build strings are carried for display.
#[derive(Debug, Clone)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    /// Fourth numeric component: either a plain `a.b.c.d` version or the
    /// iteration extracted from a `preview.<n>` pre-release
    pub revision: Option<u64>,
    /// Pre-release identifier after the first `-`
    pub pre: Option<String>,
    /// Build metadata after the first `+`
    pub build: Option<String>,
}

impl Version {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            revision: None,
            pre: None,
            build: None,
        }
    }

    // An absent revision sorts below any present one, so 1.2.0 < 1.2.0.0
    fn sort_key(&self) -> (u64, u64, u64, Option<u64>) {
        (self.major, self.minor, self.patch, self.revision)
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.sort_key() == other.sort_key()
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        match (&self.pre, self.revision) {
            (Some(pre), _) => write!(f, "-{}", pre)?,
            (None, Some(revision)) => write!(f, ".{}", revision)?,
            (None, None) => {}
        }
        if let Some(build) = &self.build {
            write!(f, "+{}", build)?;
        }
        Ok(())
    }
}

/// Raw version strings published by a feed, in feed order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedVersions {
    pub versions: Vec<String>,
}

impl FeedVersions {
    pub fn new(versions: Vec<String>) -> Self {
        Self { versions }
    }
}

/// Outcome of a single update check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionCheckResult {
    pub update_available: bool,
    pub current_version: String,
    /// Latest version found on the feed, if any
    pub latest_version: Option<String>,
    /// Ready-to-run upgrade command, present only when an update is available
    pub upgrade_command: Option<String>,
}

impl VersionCheckResult {
    /// A result that reports no update and no known latest version
    pub fn no_update(current_version: &str) -> Self {
        Self {
            update_available: false,
            current_version: current_version.to_string(),
            latest_version: None,
            upgrade_command: None,
        }
    }
}
