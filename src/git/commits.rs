//! Commit collection between two refs.

use git2::{Oid, Repository};
use serde::{Deserialize, Serialize};

use crate::error::GitError;

/// A commit's subject and body as fed into the changelog classifier.
///
/// When the repository URL is known, the subject carries a trailing
/// markdown link to the commit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawCommit {
    pub subject: String,
    pub body: String,
}

/// Resolve a reference (tag, branch, commit hash) to an OID.
pub fn resolve_ref(repo: &Repository, reference: &str) -> Result<Oid, GitError> {
    // Try as a direct OID first
    if let Ok(oid) = Oid::from_str(reference) {
        if repo.find_commit(oid).is_ok() {
            return Ok(oid);
        }
    }

    // Try as a reference (branch or tag)
    if let Ok(obj) = repo.revparse_single(reference) {
        return Ok(obj.peel_to_commit().map_err(GitError::ParseCommit)?.id());
    }

    Err(GitError::ReferenceNotFound(
        reference.to_string(),
        git2::Error::from_str("Reference not found"),
    ))
}

/// Collect commits in `target..origin`, newest first.
///
/// Merge commits and commits with an empty subject are skipped. When
/// `repo_url` is given, each subject gets a ` [(abc1234)](url/commit/abc1234)`
/// suffix using the 7-character short hash.
pub fn collect_commits(
    repo: &Repository,
    target: Oid,
    origin: Oid,
    repo_url: Option<&str>,
) -> Result<Vec<RawCommit>, GitError> {
    let mut revwalk = repo.revwalk().map_err(GitError::RevwalkError)?;

    revwalk.push(origin).map_err(GitError::RevwalkError)?;
    revwalk.hide(target).map_err(GitError::RevwalkError)?;

    let mut commits = Vec::new();

    for oid_result in revwalk {
        let oid = oid_result.map_err(GitError::RevwalkError)?;
        let commit = repo.find_commit(oid).map_err(GitError::ParseCommit)?;

        if commit.parent_count() > 1 {
            continue; // merge commit
        }

        let subject = commit.summary().unwrap_or("").trim().to_string();
        if subject.is_empty() {
            continue;
        }

        let hash = oid.to_string();
        let short = &hash[..7];
        let subject = match repo_url {
            Some(url) => format!("{subject} [({short})]({url}/commit/{short})"),
            None => subject,
        };

        let body = commit.body().unwrap_or("").trim().to_string();

        commits.push(RawCommit { subject, body });
    }

    Ok(commits)
}
