//! Tag enumeration and release/pre-release tag classification.
//!
//! Stable releases are tagged `vMAJOR.PATCH`; pre-releases append a
//! `-beta.N` or `-hotfix.N` channel suffix. The classification functions are
//! pure over a list of tag names so they can be tested without a repository.

use git2::Repository;
use regex_lite::Regex;
use tracing::warn;

use crate::error::GitError;
use crate::version::semver::parse_version;

/// A pre-release tag decomposed relative to its base release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagInfo {
    /// The full tag name, e.g. `v1.2-beta.3`.
    pub full: String,
    /// The `MAJOR.PATCH` base with the leading `v` stripped, e.g. `1.2`.
    pub base: String,
    /// The pre-release number.
    pub number: u32,
}

/// List all tag names in the repository.
pub fn collect_tag_names(repo: &Repository) -> Result<Vec<String>, GitError> {
    let names = repo.tag_names(None).map_err(GitError::TagListError)?;

    let mut tags = Vec::with_capacity(names.len());
    for (i, name) in names.iter().enumerate() {
        match name {
            Some(name) => tags.push(name.to_string()),
            None => warn!("Skipping tag at index {i} - name is not valid UTF-8"),
        }
    }

    Ok(tags)
}

/// Find the latest stable `vMAJOR.PATCH` tag, falling back to `v1.0` when
/// no tag matches.
pub fn latest_stable_tag(tags: &[String]) -> String {
    let re = Regex::new(r"^v\d+\.\d+$").unwrap();

    tags.iter()
        .filter(|tag| re.is_match(tag.as_str()))
        .max_by_key(|tag| parse_version(tag.as_str()))
        .cloned()
        .unwrap_or_else(|| "v1.0".to_string())
}

/// Find the latest `vMAJOR.PATCH-beta.N` tag.
pub fn latest_beta_tag(tags: &[String]) -> Option<TagInfo> {
    latest_channel_tag(tags, "beta")
}

/// Find the latest `vMAJOR.PATCH-hotfix.N` tag.
pub fn latest_hotfix_tag(tags: &[String]) -> Option<TagInfo> {
    latest_channel_tag(tags, "hotfix")
}

/// Find the highest tag on a pre-release channel under numeric
/// `(major, patch, number)` ordering.
fn latest_channel_tag(tags: &[String], channel: &str) -> Option<TagInfo> {
    let re = Regex::new(&format!(r"^v(\d+\.\d+)-{channel}\.(\d+)$")).unwrap();

    tags.iter()
        .filter_map(|tag| {
            let caps = re.captures(tag)?;
            let base = caps.get(1)?.as_str().to_string();
            let number = caps.get(2)?.as_str().parse::<u32>().ok()?;
            Some(TagInfo {
                full: tag.clone(),
                base,
                number,
            })
        })
        .max_by_key(|info| (parse_version(&info.base), info.number))
}

/// Collect the beta numbers already used for a version base.
///
/// `base` carries whatever prefix the caller's tags use (normally `vX.Y`).
/// Suffixes that are not integers are silently dropped.
pub fn beta_numbers_for(base: &str, tags: &[String]) -> Vec<u32> {
    let prefix = format!("{base}-beta.");

    tags.iter()
        .filter_map(|tag| tag.strip_prefix(&prefix))
        .filter_map(|suffix| suffix.parse::<u32>().ok())
        .collect()
}
