//! verlog - A CLI tool that derives version tags and generates changelogs from git history.
//!
//! # Overview
//!
//! verlog reads commits and tags from a git repository, classifies commit
//! subjects into changelog categories, renders a categorized markdown section,
//! and resolves the next `vMAJOR.PATCH` tag (with `-beta.N` and `-hotfix.N`
//! pre-release channels).

pub mod changelog;
pub mod error;
pub mod git;
pub mod version;

// Re-export commonly used types
pub use changelog::{ClassifiedCommit, CommitKind, Section};
pub use error::{ChangelogError, GitError, VersionError};
pub use git::{RawCommit, TagInfo};
pub use version::ParsedVersion;
