//! Automated environment detection.
//!
//! Update checks are skipped in CI pipelines. Detection looks at
//! well-known CI environment variables; callers inject the probe so
//! tests never touch the process environment.

#[cfg(test)]
use mockall::automock;

/// Environment variables whose non-empty presence signals a CI run
pub const CI_ENV_VARS: &[&str] = &[
    "CI",
    "TF_BUILD",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "CIRCLECI",
    "JENKINS_URL",
    "TRAVIS",
    "BUILDKITE",
    "TEAMCITY_VERSION",
    "CODEBUILD_BUILD_ID",
];

/// Answers whether the process runs unattended
#[cfg_attr(test, automock)]
pub trait AutomationProbe: Send + Sync {
    fn is_automated(&self) -> bool;
}

/// Probe backed by CI environment variables
#[derive(Debug, Clone, Copy, Default)]
pub struct CiDetector;

impl CiDetector {
    pub fn new() -> Self {
        Self
    }

    /// Returns the first CI variable found in the process environment
    pub fn detect(&self) -> Option<&'static str> {
        self.detect_with_env(|key| std::env::var(key))
    }

    /// Detect with a custom env var lookup (for testing).
    pub fn detect_with_env<F>(&self, env_fn: F) -> Option<&'static str>
    where
        F: Fn(&str) -> Result<String, std::env::VarError>,
    {
        CI_ENV_VARS
            .iter()
            .copied()
            .find(|var| env_fn(var).is_ok_and(|value| !value.is_empty()))
    }
}

impl AutomationProbe for CiDetector {
    fn is_automated(&self) -> bool {
        match self.detect() {
            Some(var) => {
                tracing::debug!("CI environment detected via {}", var);
                true
            }
            None => false,
        }
    }
}

/// Probe with a fixed answer
#[derive(Debug, Clone, Copy)]
pub struct StaticProbe(pub bool);

impl AutomationProbe for StaticProbe {
    fn is_automated(&self) -> bool {
        self.0
    }
}
