//! Error types for verlog modules using thiserror.

use thiserror::Error;

/// Errors from git operations.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Failed to open repository: {0}")]
    OpenRepository(#[source] git2::Error),

    #[error("Failed to find reference '{0}': {1}")]
    ReferenceNotFound(String, #[source] git2::Error),

    #[error("Failed to parse commit: {0}")]
    ParseCommit(#[source] git2::Error),

    #[error("Failed to walk commit history: {0}")]
    RevwalkError(#[source] git2::Error),

    #[error("Failed to list tags: {0}")]
    TagListError(#[source] git2::Error),
}

/// Errors from changelog file operations.
#[derive(Error, Debug)]
pub enum ChangelogError {
    #[error("Failed to read changelog: {0}")]
    ReadFailed(#[source] std::io::Error),

    #[error("Failed to write changelog: {0}")]
    WriteFailed(#[source] std::io::Error),
}

/// Errors from version generation.
#[derive(Error, Debug)]
pub enum VersionError {
    #[error("Invalid target '{0}'. Use 'rc' or 'release'.")]
    InvalidTarget(String),

    #[error("Invalid bump type '{0}'. Use 'major' or 'patch'.")]
    InvalidBumpType(String),
}
