//! GitHub remote URL detection for commit links.

use git2::Repository;
use regex_lite::Regex;
use tracing::warn;

/// Derive the `https://github.com/OWNER/REPO` URL from the `origin` remote.
///
/// Accepts both ssh (`git@github.com:owner/repo.git`) and https forms.
/// Any failure degrades to `None`; changelog entries then simply omit
/// commit links.
pub fn github_repo_url(repo: &Repository) -> Option<String> {
    let remote = match repo.find_remote("origin") {
        Ok(remote) => remote,
        Err(e) => {
            warn!("Unable to resolve GitHub repository URL: {e}");
            return None;
        }
    };

    let url = remote.url()?.trim();
    match parse_github_remote(url) {
        Some(parsed) => Some(parsed),
        None => {
            warn!(url = %url, "Unable to parse GitHub repository URL");
            None
        }
    }
}

/// Parse a remote URL into the canonical https repository URL.
pub fn parse_github_remote(url: &str) -> Option<String> {
    let ssh = Regex::new(r"^git@github\.com:(.*)\.git$").unwrap();
    let https = Regex::new(r"^https://github\.com/(.*?)(\.git)?$").unwrap();

    if let Some(caps) = ssh.captures(url) {
        return Some(format!("https://github.com/{}", &caps[1]));
    }
    if let Some(caps) = https.captures(url) {
        return Some(format!("https://github.com/{}", &caps[1]));
    }
    None
}
