//! Git operations using git2-rs.

use std::path::Path;

use git2::Repository;

use crate::error::GitError;

pub mod commits;
pub mod remote;
pub mod tags;

pub use commits::{RawCommit, collect_commits, resolve_ref};
pub use remote::github_repo_url;
pub use tags::{
    TagInfo, beta_numbers_for, collect_tag_names, latest_beta_tag, latest_hotfix_tag,
    latest_stable_tag,
};

/// Open the git repository at `path`.
pub fn open_repository<P: AsRef<Path>>(path: P) -> Result<Repository, GitError> {
    Repository::open(path).map_err(GitError::OpenRepository)
}
