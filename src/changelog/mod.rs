//! Commit classification, markdown assembly, and changelog writing.

pub mod classify;
pub mod markdown;
pub mod writer;

pub use classify::{ClassifiedCommit, CommitKind, map_commit_type, transform_commit};
pub use markdown::{Section, build_markdown, build_markdown_with_date, changelog_date};
pub use writer::{CHANGELOG_HEADER, write_changelog};
