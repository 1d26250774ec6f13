//! Release planning: next-version calculation and changelog range resolution
//!
//! Both functions are pure and tag-list-driven. The caller supplies the
//! current version (from the package manifest) and the known tags (from git);
//! nothing here touches a repository or spawns a process.

use crate::domain::{PreRelease, PreReleaseType, ReleaseType, Version};
use crate::error::Result;

/// Compute the next pre-release version for the given identifier.
///
/// Three cases, depending on the current version:
/// - stable: bump the component named by `release_type`, then start the
///   pre-release line at counter 0 (`1.0.0` + alpha/major -> `2.0.0-alpha.0`)
/// - pre-release on the same identifier: increment the counter, ignoring
///   `release_type` (`2.0.0-alpha.0` -> `2.0.0-alpha.1`)
/// - pre-release on a different identifier: adopt the new identifier at
///   counter 0, keeping the version numbers (`2.0.0-alpha.1` + beta ->
///   `2.0.0-beta.0`)
///
/// # Arguments
/// * `current` - Current version string, stable or pre-release
/// * `prerelease_id` - Identifier of the target pre-release line
/// * `release_type` - Bump to apply when starting a new line from stable
///
/// # Returns
/// * `Ok(String)` - The next version
/// * `Err` - If `current` or `prerelease_id` does not parse
pub fn next_prerelease_version(
    current: &str,
    prerelease_id: &str,
    release_type: ReleaseType,
) -> Result<String> {
    let version = Version::parse(current)?;
    let target: PreReleaseType = prerelease_id.parse()?;

    let next = match &version.prerelease {
        None => version
            .bump(release_type)
            .with_prerelease(PreRelease::start(target)),
        Some(pre) if pre.identifier == target => version.with_prerelease(pre.bump_iteration()),
        Some(_) => version.with_prerelease(PreRelease::start(target)),
    };

    Ok(next.to_string())
}

/// Resolve the commit range a changelog should cover.
///
/// Selects the tag marking the end of the previous release and returns
/// `"<tag>..HEAD"`, or `""` when no prior release exists. Tags that do not
/// parse as semantic versions are skipped, not fatal.
///
/// When preparing a pre-release (`target_prerelease_id` present), any prior
/// tag marks the boundary of what is already documented, so the most recent
/// tag overall is selected. When preparing a stable release, pre-release
/// tags of the not-yet-stabilized line are skipped and the most recent
/// stable tag wins; if no stable tag exists yet, the most recent tag overall
/// is used.
///
/// # Arguments
/// * `tags` - All existing tag names, in any order
/// * `target_prerelease_id` - Identifier of the pre-release line being
///   prepared, or `None` for a stable release
pub fn changelog_commit_range(tags: &[String], target_prerelease_id: Option<&str>) -> String {
    let mut parsed: Vec<(Version, &str)> = tags
        .iter()
        .filter_map(|tag| Version::parse(tag).ok().map(|v| (v, tag.as_str())))
        .collect();

    if parsed.is_empty() {
        return String::new();
    }

    // Most recent first
    parsed.sort_by(|a, b| b.0.cmp(&a.0));

    let (_, tag) = if target_prerelease_id.is_some() {
        &parsed[0]
    } else {
        parsed
            .iter()
            .find(|(version, _)| version.is_stable())
            .unwrap_or(&parsed[0])
    };

    format!("{}..HEAD", tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_next_version_from_stable_major() {
        let next = next_prerelease_version("1.0.0", "alpha", ReleaseType::Major).unwrap();
        assert_eq!(next, "2.0.0-alpha.0");
    }

    #[test]
    fn test_next_version_from_stable_minor() {
        let next = next_prerelease_version("1.0.0", "alpha", ReleaseType::Minor).unwrap();
        assert_eq!(next, "1.1.0-alpha.0");
    }

    #[test]
    fn test_next_version_from_stable_patch() {
        let next = next_prerelease_version("1.0.0", "alpha", ReleaseType::Patch).unwrap();
        assert_eq!(next, "1.0.1-alpha.0");
    }

    #[test]
    fn test_next_version_same_identifier_ignores_release_type() {
        for release_type in [ReleaseType::Major, ReleaseType::Minor, ReleaseType::Patch] {
            let next = next_prerelease_version("2.0.0-alpha.0", "alpha", release_type).unwrap();
            assert_eq!(next, "2.0.0-alpha.1");
        }
    }

    #[test]
    fn test_next_version_identifier_transition_resets_counter() {
        let next = next_prerelease_version("2.0.0-alpha.1", "beta", ReleaseType::Patch).unwrap();
        assert_eq!(next, "2.0.0-beta.0");
    }

    #[test]
    fn test_next_version_transition_to_rc() {
        let next = next_prerelease_version("3.1.0-beta.4", "rc", ReleaseType::Major).unwrap();
        assert_eq!(next, "3.1.0-rc.0");
    }

    #[test]
    fn test_next_version_custom_identifier() {
        let next = next_prerelease_version("1.0.0", "next", ReleaseType::Minor).unwrap();
        assert_eq!(next, "1.1.0-next.0");
    }

    #[test]
    fn test_next_version_invalid_current() {
        assert!(next_prerelease_version("not-a-version", "alpha", ReleaseType::Major).is_err());
    }

    #[test]
    fn test_range_empty_when_no_tags() {
        assert_eq!(changelog_commit_range(&[], None), "");
    }

    #[test]
    fn test_range_most_recent_stable() {
        let range = changelog_commit_range(&tags(&["1.0.0", "1.0.1"]), None);
        assert_eq!(range, "1.0.1..HEAD");
    }

    #[test]
    fn test_range_prerelease_target_takes_most_recent_overall() {
        let range = changelog_commit_range(
            &tags(&["1.0.0", "1.0.1", "2.0.0-alpha.0", "2.0.0-alpha.1"]),
            Some("beta"),
        );
        assert_eq!(range, "2.0.0-alpha.1..HEAD");
    }

    #[test]
    fn test_range_stable_release_skips_unfinished_prerelease_line() {
        let range = changelog_commit_range(
            &tags(&["1.0.0", "1.0.1", "2.0.0-alpha.0", "2.0.0-rc.0"]),
            None,
        );
        assert_eq!(range, "1.0.1..HEAD");
    }

    #[test]
    fn test_range_stable_release_with_only_prerelease_tags() {
        let range = changelog_commit_range(&tags(&["0.1.0-alpha.0", "0.1.0-alpha.1"]), None);
        assert_eq!(range, "0.1.0-alpha.1..HEAD");
    }

    #[test]
    fn test_range_unsorted_input() {
        let range = changelog_commit_range(&tags(&["1.0.1", "0.9.0", "1.0.0"]), None);
        assert_eq!(range, "1.0.1..HEAD");
    }

    #[test]
    fn test_range_preserves_tag_prefix() {
        let range = changelog_commit_range(&tags(&["v1.0.0", "v1.0.1"]), None);
        assert_eq!(range, "v1.0.1..HEAD");
    }

    #[test]
    fn test_range_skips_unparseable_tags() {
        let range = changelog_commit_range(&tags(&["garbage", "1.0.0", "also-garbage"]), None);
        assert_eq!(range, "1.0.0..HEAD");
    }

    #[test]
    fn test_range_all_tags_unparseable() {
        let range = changelog_commit_range(&tags(&["garbage", "also-garbage"]), None);
        assert_eq!(range, "");
    }
}
