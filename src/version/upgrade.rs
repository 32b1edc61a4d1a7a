//! Upgrade command construction

/// Flag that lets `dotnet tool update` pick pre-release packages
pub const PRERELEASE_FLAG: &str = "--prerelease";

/// Returns true if a feed version string is a preview build.
///
/// Matches the `preview` token anywhere in the string, ignoring case.
pub fn is_preview(version: &str) -> bool {
    version.to_ascii_lowercase().contains("preview")
}

/// Build the command a user runs to move to `latest_version`
pub fn upgrade_command(package_id: &str, latest_version: &str) -> String {
    let mut command = format!("dotnet tool update --global {}", package_id);
    if is_preview(latest_version) {
        command.push(' ');
        command.push_str(PRERELEASE_FLAG);
    }
    command
}
