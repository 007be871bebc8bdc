//! Commit subject classification.
//!
//! Subjects come in three recognized shapes, tried in order:
//! `[TYPE](scope) text`, `[TYPE] text`, and conventional `type(scope)!: text`.
//! Anything else passes through verbatim as an `Other` entry.

use regex_lite::Regex;
use serde::{Deserialize, Serialize};

/// Classification buckets for changelog entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CommitKind {
    Feature,
    Fix,
    Infra,
    Breaking,
    Other,
}

impl CommitKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Feature => "FEATURE",
            Self::Fix => "FIX",
            Self::Infra => "INFRA",
            Self::Breaking => "BREAKING",
            Self::Other => "OTHER",
        }
    }
}

/// A commit classified for changelog assembly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifiedCommit {
    pub kind: CommitKind,
    pub scope: String,
    pub message: String,
    pub body: String,
}

/// Map a raw commit type token to its classification bucket.
///
/// Case-insensitive and total: unrecognized tokens land in `Other`.
pub fn map_commit_type(raw: &str) -> CommitKind {
    match raw.to_lowercase().as_str() {
        "feat" | "feature" => CommitKind::Feature,
        "fix" => CommitKind::Fix,
        "infra" => CommitKind::Infra,
        _ => CommitKind::Other,
    }
}

/// Classify a commit subject/body pair.
///
/// A commit is breaking when the subject contains `!:` or the body contains
/// `BREAKING CHANGE:`; breaking commits are forced into the `Breaking`
/// bucket regardless of their raw type.
pub fn transform_commit(subject: &str, body: &str) -> ClassifiedCommit {
    let subject = subject.trim();
    let body = body.trim();

    let breaking = subject.contains("!:") || body.contains("BREAKING CHANGE:");

    let scoped = Regex::new(r"^\[(\w+)\]\(([^)]+)\)\s*(.+)$").unwrap();
    let bracket_only = Regex::new(r"^\[(\w+)\]\s*(.+)$").unwrap();
    let conventional = Regex::new(r"^(\w+)(?:\(([^)]+)\))?!?:\s*(.+)$").unwrap();

    let mut detected = String::new();
    let mut scope = String::new();
    let mut message = subject.to_string();

    if let Some(caps) = scoped.captures(subject) {
        detected = caps[1].to_string();
        scope = caps[2].to_string();
        message = caps[3].to_string();
    } else if let Some(caps) = bracket_only.captures(subject) {
        detected = caps[1].to_string();
        message = caps[2].to_string();
    } else if let Some(caps) = conventional.captures(subject) {
        detected = caps[1].to_string();
        scope = caps.get(2).map_or(String::new(), |m| m.as_str().to_string());
        message = caps[3].to_string();
    }

    let kind = if breaking {
        CommitKind::Breaking
    } else {
        map_commit_type(&detected)
    };

    if !breaking
        && matches!(kind, CommitKind::Feature | CommitKind::Fix | CommitKind::Infra)
    {
        // Defensive cleanup: a conventional-form subject may still carry
        // its own prefix inside the captured text.
        let redundant = Regex::new(r"(?i)^(feat|fix|infra)(\([^)]*\))?!?:\s*").unwrap();
        message = redundant.replace(&message, "").into_owned();
    } else if !detected.is_empty() {
        // Keep the original type token visible in the entry even though
        // the bucket is Breaking/Other.
        let lowered = detected.to_lowercase();
        message = if scope.is_empty() {
            format!("{lowered}: {message}")
        } else {
            format!("{lowered}({scope}): {message}")
        };
    }

    ClassifiedCommit {
        kind,
        scope,
        message,
        body: body.to_string(),
    }
}
