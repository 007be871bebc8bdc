//! Next-version resolution over a repository's tag list.

use crate::error::VersionError;
use crate::git::tags::{
    beta_numbers_for, latest_beta_tag, latest_hotfix_tag, latest_stable_tag,
};

use super::semver::{bump_version, is_semver_greater};

/// Resolve the next hotfix version for the latest stable base.
///
/// The hotfix number continues from the latest hotfix tag when it belongs to
/// the same base, and resets to 0 on a new base. Always succeeds: with no
/// stable tag the base falls back to `1.0`.
pub fn next_hotfix_version(tags: &[String]) -> String {
    let latest_stable = latest_stable_tag(tags);
    let base = latest_stable.strip_prefix('v').unwrap_or(&latest_stable);

    let mut next = 0;
    if let Some(hotfix) = latest_hotfix_tag(tags) {
        if hotfix.base == base {
            next = hotfix.number + 1;
        }
    }

    format!("v{base}-hotfix.{next}")
}

/// Resolve the next release or beta version.
///
/// `bump` is `"major"` or `"patch"`; `target` is `"release"` or `"rc"`.
/// For `rc`, an existing beta line whose base is ahead of the bumped base is
/// continued instead of starting a new one.
pub fn next_version(tags: &[String], bump: &str, target: &str) -> Result<String, VersionError> {
    let latest_stable = latest_stable_tag(tags);
    let next_base = bump_version(&latest_stable, bump)
        .ok_or_else(|| VersionError::InvalidBumpType(bump.to_string()))?;

    match target {
        "release" => Ok(next_base),
        "rc" => {
            let ahead_beta = latest_beta_tag(tags)
                .filter(|beta| is_semver_greater(&beta.base, &next_base));

            if let Some(beta) = ahead_beta {
                // Continue the beta line that is already past the bumped
                // base. The recorded base has the leading `v` stripped.
                Ok(format!("{}-beta.{}", beta.base, beta.number + 1))
            } else {
                let numbers = beta_numbers_for(&next_base, tags);
                let next_beta = numbers.iter().max().map_or(0, |n| n + 1);
                Ok(format!("{next_base}-beta.{next_beta}"))
            }
        }
        _ => Err(VersionError::InvalidTarget(target.to_string())),
    }
}
