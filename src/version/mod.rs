//! Version arithmetic and next-version resolution.

pub mod generate;
pub mod semver;

pub use generate::{next_hotfix_version, next_version};
pub use semver::{ParsedVersion, bump_version, is_semver_greater, parse_version};
