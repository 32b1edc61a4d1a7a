//! Rendering of update check results for the terminal

use crate::version::types::VersionCheckResult;

/// Human-readable summary of a check
pub fn render_human(result: &VersionCheckResult) -> String {
    match (&result.latest_version, &result.upgrade_command) {
        (Some(latest), Some(command)) if result.update_available => format!(
            "A newer version of a365 is available: {} -> {}\nTo upgrade, run: {}",
            result.current_version, latest, command
        ),
        (Some(latest), _) => format!(
            "a365 {} is up to date (latest published: {})",
            result.current_version, latest
        ),
        (None, _) => format!(
            "a365 {}: no update information available",
            result.current_version
        ),
    }
}

/// Pretty-printed JSON for `--json`
pub fn render_json(result: &VersionCheckResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}
