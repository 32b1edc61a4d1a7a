use std::sync::LazyLock;

use regex::Regex;

use crate::version::types::Version;

/// Pre-release token that embeds a build iteration: `preview.<n>`
static PREVIEW_ITERATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^preview\.(\d+)$").expect("valid preview regex"));

/// Most numeric components a version may carry (major.minor.patch.revision)
const MAX_COMPONENTS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareResult {
    Latest,
    Outdated,
    Newer,
    Invalid,
}

/// Parse a version string as published on the package feed.
///
/// Build metadata after `+` is dropped from ordering. A `preview.<n>`
/// pre-release contributes `n` as a trailing numeric component, so
/// `1.2.0-preview.50` orders as `1.2.0.50`. Any other pre-release
/// collapses to its base version. Partial versions are padded with zeros.
///
/// Examples:
/// - "1" -> 1.0.0
/// - "1.2" -> 1.2.0
/// - "1.2.0-preview.50" -> 1.2.0.50
/// - "1.1.52-preview" -> 1.1.52
///
/// Returns `None` for anything malformed; never panics.
pub fn parse_version(version: &str) -> Option<Version> {
    let (rest, build) = match version.split_once('+') {
        Some((rest, build)) => (rest, Some(build)),
        None => (version, None),
    };

    let (base, pre) = match rest.split_once('-') {
        Some((base, pre)) => (base, Some(pre)),
        None => (rest, None),
    };

    let mut components = parse_components(base)?;
    if let Some(iteration) = pre.and_then(preview_iteration) {
        components.push(iteration);
    }

    if components.len() > MAX_COMPONENTS {
        return None;
    }
    // Padding runs after the iteration is appended, so a short core such as
    // `1.2-preview.5` lands its iteration in patch (1.2.5, no revision).
    // Display of such a value does not reproduce the published string.
    while components.len() < 3 {
        components.push(0);
    }

    Some(Version {
        major: components[0],
        minor: components[1],
        patch: components[2],
        revision: components.get(3).copied(),
        pre: pre.filter(|p| !p.is_empty()).map(str::to_string),
        build: build.filter(|b| !b.is_empty()).map(str::to_string),
    })
}

/// Split a dotted numeric core. Every component must be plain ASCII digits.
fn parse_components(base: &str) -> Option<Vec<u64>> {
    base.split('.')
        .map(|part| {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            part.parse::<u64>().ok()
        })
        .collect()
}

/// Extract `n` from a `preview.<n>` pre-release. Digits that overflow are
/// treated as if no iteration were present.
fn preview_iteration(pre: &str) -> Option<u64> {
    let captures = PREVIEW_ITERATION.captures(pre)?;
    captures.get(1)?.as_str().parse().ok()
}

/// Select the newest parseable version from a feed listing.
///
/// Unparseable entries are skipped. When several entries parse to the same
/// version the first one encountered wins.
pub fn select_latest(versions: &[String]) -> Option<&str> {
    let mut best: Option<(&str, Version)> = None;

    for raw in versions {
        let Some(parsed) = parse_version(raw) else {
            continue;
        };
        match &best {
            Some((_, current_best)) if parsed <= *current_best => {}
            _ => best = Some((raw.as_str(), parsed)),
        }
    }

    best.map(|(raw, _)| raw)
}

/// Compare the running version against the latest published one
pub fn compare_versions(current_version: &str, latest_version: &str) -> CompareResult {
    let (Some(current), Some(latest)) = (
        parse_version(current_version),
        parse_version(latest_version),
    ) else {
        return CompareResult::Invalid;
    };

    match current.cmp(&latest) {
        std::cmp::Ordering::Equal => CompareResult::Latest,
        std::cmp::Ordering::Less => CompareResult::Outdated,
        std::cmp::Ordering::Greater => CompareResult::Newer,
    }
}

/// Returns true only when `latest` parses and is strictly newer than
/// `current`. Unparseable input on either side never counts as an update.
pub fn is_newer_version(latest: &str, current: &str) -> bool {
    compare_versions(current, latest) == CompareResult::Outdated
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn strings(versions: &[&str]) -> Vec<String> {
        versions.iter().map(|s| s.to_string()).collect()
    }

    #[rstest]
    #[case("0.0.0", 0, 0, 0)]
    #[case("1.2.3", 1, 2, 3)]
    #[case("10.20.30", 10, 20, 30)]
    #[case("1.2", 1, 2, 0)]
    #[case("7", 7, 0, 0)]
    #[case("1.2.3+20240101.abcdef", 1, 2, 3)]
    fn parse_version_extracts_numeric_core(
        #[case] input: &str,
        #[case] major: u64,
        #[case] minor: u64,
        #[case] patch: u64,
    ) {
        let version = parse_version(input).unwrap();
        assert_eq!(
            (version.major, version.minor, version.patch),
            (major, minor, patch)
        );
        assert_eq!(version.revision, None);
    }

    #[rstest]
    #[case("")]
    #[case("abc")]
    #[case("1.x.3")]
    #[case("1..3")]
    #[case(".1.2")]
    #[case("1.2.3.")]
    #[case("1.2.3.4.5")]
    #[case("1.2.3.4-preview.5")]
    #[case("-1.2.3")]
    #[case("+1.2.3")]
    #[case("1.+2.3")]
    #[case(" 1.2.3")]
    #[case("v1.2.3")]
    #[case("99999999999999999999999.0.0")]
    fn parse_version_rejects_malformed_input(#[case] input: &str) {
        assert_eq!(parse_version(input), None);
    }

    #[test]
    fn parse_version_appends_preview_iteration() {
        let version = parse_version("1.2.0-preview.50").unwrap();
        assert_eq!(version.revision, Some(50));
        assert_eq!(version.pre.as_deref(), Some("preview.50"));
    }

    #[test]
    fn parse_version_keeps_build_metadata_out_of_ordering() {
        let with_build = parse_version("1.2.0-preview.50+sha.deadbeef").unwrap();
        assert_eq!(with_build.build.as_deref(), Some("sha.deadbeef"));
        assert_eq!(with_build, parse_version("1.2.0-preview.50").unwrap());
        assert_eq!(
            parse_version("1.0.0+a").unwrap(),
            parse_version("1.0.0+b").unwrap()
        );
    }

    #[rstest]
    #[case("1.1.52-preview", "1.1.52")]
    #[case("1.1.52-rc.1", "1.1.52")]
    #[case("1.1.52-preview.x", "1.1.52")]
    #[case("1.1.52-Preview.3", "1.1.52")]
    #[case("1.1.52-", "1.1.52")]
    #[case("1.1.52-preview.99999999999999999999999", "1.1.52")]
    fn parse_version_collapses_undecomposable_prerelease_to_base(
        #[case] prerelease: &str,
        #[case] base: &str,
    ) {
        assert_eq!(parse_version(prerelease), parse_version(base));
    }

    #[test]
    fn parse_version_places_iteration_before_padding() {
        let version = parse_version("1.2-preview.5").unwrap();
        assert_eq!((version.major, version.minor, version.patch), (1, 2, 5));
        assert_eq!(version.revision, None);
        assert_eq!(version, parse_version("1.2.5").unwrap());
    }

    #[test]
    fn parse_version_accepts_four_part_core() {
        let version = parse_version("1.2.0.50").unwrap();
        assert_eq!(version.revision, Some(50));
        assert_eq!(version, parse_version("1.2.0-preview.50").unwrap());
    }

    #[test]
    fn parse_version_orders_releases() {
        let ordered = ["1.0.0", "1.0.1", "1.1.0", "2.0.0"];
        for pair in ordered.windows(2) {
            assert!(
                parse_version(pair[0]).unwrap() < parse_version(pair[1]).unwrap(),
                "{} should sort below {}",
                pair[0],
                pair[1]
            );
        }
    }

    #[rstest]
    #[case("1.1.0-preview.1", "1.1.0-preview.2")]
    #[case("1.1.0-preview.50", "1.1.0-preview.100")]
    #[case("1.1.0-preview.9", "1.1.0-preview.10")]
    #[case("1.1.0", "1.1.0-preview.1")]
    #[case("1.1.0-preview.999", "1.1.1")]
    #[case("1.9.9", "2.0.0-preview.3")]
    fn parse_version_orders_numerically(#[case] lower: &str, #[case] higher: &str) {
        assert!(parse_version(lower).unwrap() < parse_version(higher).unwrap());
    }

    #[rstest]
    #[case(&["1.0.0", "1.2.0", "1.1.0"], Some("1.2.0"))]
    #[case(&["1.1.0-preview.50", "1.1.0-preview.100", "1.1.0-preview.9"], Some("1.1.0-preview.100"))]
    #[case(&["garbage", "2.0.0", "not.a.version"], Some("2.0.0"))]
    #[case(&["1.0.0+first", "1.0.0+second"], Some("1.0.0+first"))]
    #[case(&["1.1.52", "1.1.52-preview"], Some("1.1.52"))]
    #[case(&["1.1.52-preview", "1.1.52"], Some("1.1.52-preview"))]
    #[case(&[], None)]
    #[case(&["", "abc", "1..2"], None)]
    fn select_latest_picks_highest_parseable(
        #[case] versions: &[&str],
        #[case] expected: Option<&str>,
    ) {
        let versions = strings(versions);
        assert_eq!(select_latest(&versions), expected);
    }

    #[rstest]
    #[case("1.0.0", "1.0.0", CompareResult::Latest)]
    #[case("1.0.0", "1.0.1", CompareResult::Outdated)]
    #[case("2.0.0", "1.9.9", CompareResult::Newer)]
    #[case("1.1.52", "1.1.52-preview", CompareResult::Latest)]
    #[case("invalid", "1.0.0", CompareResult::Invalid)]
    #[case("1.0.0", "invalid", CompareResult::Invalid)]
    fn compare_versions_returns_expected_result(
        #[case] current: &str,
        #[case] latest: &str,
        #[case] expected: CompareResult,
    ) {
        assert_eq!(compare_versions(current, latest), expected);
    }

    #[rstest]
    #[case("1.0.1", "1.0.0", true)]
    #[case("2.0.0-preview.3", "1.9.9", true)]
    #[case("1.0.0", "1.0.0", false)]
    #[case("1.0.0", "1.0.1", false)]
    #[case("garbage", "1.0.0", false)]
    #[case("1.0.1", "garbage", false)]
    #[case("", "", false)]
    fn is_newer_version_requires_strictly_greater(
        #[case] latest: &str,
        #[case] current: &str,
        #[case] expected: bool,
    ) {
        assert_eq!(is_newer_version(latest, current), expected);
    }
}
