//! Changelog file writing and merging.

use std::path::{Path, PathBuf};

use regex_lite::Regex;

use crate::error::ChangelogError;

/// Top-level heading for every generated changelog file.
pub const CHANGELOG_HEADER: &str = "# Changelog\n\n";

/// Write a generated section to `path`.
///
/// When the file is named `changelog.md` (case-insensitive), the section is
/// merged below the existing top-level heading and a `{stem}_temp{ext}`
/// sibling is written containing just the new section without its version
/// heading, for use as standalone release notes. Any other filename is
/// simply overwritten with the heading plus the section.
pub fn write_changelog(path: &Path, section: &str) -> Result<(), ChangelogError> {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    if file_name != "changelog.md" {
        return std::fs::write(path, format!("{CHANGELOG_HEADER}{section}"))
            .map_err(ChangelogError::WriteFailed);
    }

    let content = if path.exists() {
        let existing = std::fs::read_to_string(path).map_err(ChangelogError::ReadFailed)?;
        // Everything below the first line, i.e. below "# Changelog".
        let rest = existing.split_once('\n').map_or("", |(_, rest)| rest);
        format!("{CHANGELOG_HEADER}{section}{rest}")
    } else {
        format!("{CHANGELOG_HEADER}{section}")
    };
    std::fs::write(path, content).map_err(ChangelogError::WriteFailed)?;

    // Companion file for release notes: the section minus its own version
    // heading line.
    let stripped = section.split_once('\n').map_or("", |(_, rest)| rest);
    let stripped = Regex::new(r"^\s*\n")
        .unwrap()
        .replace(stripped, "")
        .into_owned();
    std::fs::write(
        companion_path(path),
        format!("{CHANGELOG_HEADER}{stripped}"),
    )
    .map_err(ChangelogError::WriteFailed)?;

    Ok(())
}

/// `CHANGELOG.md` -> `CHANGELOG_temp.md`, preserving the directory.
fn companion_path(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = path
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();

    path.with_file_name(format!("{stem}_temp{ext}"))
}
