//! Changelog section assembly.

use chrono::{FixedOffset, Utc};
use regex_lite::Regex;

use super::classify::{ClassifiedCommit, CommitKind};

/// Changelog sections in their fixed emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Major,
    Feat,
    Fix,
    Infra,
    Other,
}

impl Section {
    /// All sections in emission order.
    pub const ORDER: [Section; 5] = [
        Section::Major,
        Section::Feat,
        Section::Fix,
        Section::Infra,
        Section::Other,
    ];

    /// The markdown heading line for the section.
    pub fn heading(&self) -> &'static str {
        match self {
            Self::Major => "### 🚨 Breaking Changes",
            Self::Feat => "### ✨ Feature",
            Self::Fix => "### 🐛 Bug Fix",
            Self::Infra => "### 🔧 Infra Change",
            Self::Other => "### 🗃 Other",
        }
    }

    fn index(&self) -> usize {
        match self {
            Self::Major => 0,
            Self::Feat => 1,
            Self::Fix => 2,
            Self::Infra => 3,
            Self::Other => 4,
        }
    }
}

/// Map a classification bucket to its changelog section.
fn section_for(kind: CommitKind) -> Section {
    match kind {
        CommitKind::Breaking => Section::Major,
        CommitKind::Feature => Section::Feat,
        CommitKind::Fix => Section::Fix,
        CommitKind::Infra => Section::Infra,
        CommitKind::Other => Section::Other,
    }
}

/// Current date in `YYYY-MM-DD` form for the changelog's reference time
/// zone (UTC+7).
pub fn changelog_date() -> String {
    let wib = FixedOffset::east_opt(7 * 3600).unwrap();
    Utc::now().with_timezone(&wib).format("%Y-%m-%d").to_string()
}

/// Build a changelog section for `version` dated today.
pub fn build_markdown(version: &str, commits: &[ClassifiedCommit]) -> String {
    build_markdown_with_date(version, commits, &changelog_date())
}

/// Build a changelog section with an explicit date.
///
/// Sections are emitted in fixed order, empty ones skipped; commit order is
/// preserved within each section. The output ends with exactly one trailing
/// blank line.
pub fn build_markdown_with_date(
    version: &str,
    commits: &[ClassifiedCommit],
    date: &str,
) -> String {
    let mut grouped: [Vec<String>; 5] = Default::default();

    for commit in commits {
        let mut entry = format!("- {}", commit.message);
        if !commit.body.is_empty() {
            let lines: Vec<&str> = commit.body.split('\n').filter(|l| !l.is_empty()).collect();
            entry.push('\n');
            entry.push_str(&format_indented_lines(&lines));
        }
        grouped[section_for(commit.kind).index()].push(entry);
    }

    let mut out = if version.is_empty() {
        format!("## ({date})\n\n")
    } else {
        format!("## {version} ({date})\n\n")
    };

    for section in Section::ORDER {
        let entries = &grouped[section.index()];
        if !entries.is_empty() {
            out.push_str(&format!("{}\n{}\n\n", section.heading(), entries.join("\n")));
        }
    }

    let squeezed = Regex::new(r"\n{3,}")
        .unwrap()
        .replace_all(out.trim(), "\n\n")
        .into_owned();
    squeezed + "\n\n"
}

/// Re-indent commit body lines by bullet-character transitions.
///
/// A stack tracks the bullet characters (`*`, `-`, `•`) seen so far: an
/// unseen bullet descends one level, a previously seen bullet pops back to
/// its original depth. Non-bullet lines get a `- ` prefix at the current
/// depth. Depth is never less than one so body lines always nest under
/// their commit's top-level bullet.
pub fn format_indented_lines(lines: &[&str]) -> String {
    let bullet_re = Regex::new(r"^\s*([-*•])\s+").unwrap();
    let mut stack: Vec<char> = Vec::new();

    lines
        .iter()
        .map(|line| {
            let bullet = bullet_re
                .captures(line)
                .and_then(|caps| caps.get(1))
                .and_then(|m| m.as_str().chars().next());

            if let Some(bullet) = bullet {
                if !stack.contains(&bullet) {
                    stack.push(bullet);
                } else {
                    while stack.last().is_some_and(|&top| top != bullet) {
                        stack.pop();
                    }
                }
            }

            let depth = stack.len().max(1);
            let indent = "  ".repeat(depth);
            match bullet {
                Some(_) => format!("{indent}{}", line.trim()),
                None => format!("{indent}- {}", line.trim()),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::changelog::classify::transform_commit;

    fn commit(kind: CommitKind, message: &str, body: &str) -> ClassifiedCommit {
        ClassifiedCommit {
            kind,
            scope: String::new(),
            message: message.to_string(),
            body: body.to_string(),
        }
    }

    #[test]
    fn test_empty_build_is_heading_only() {
        let out = build_markdown_with_date("", &[], "2025-05-09");
        assert_eq!(out, "## (2025-05-09)\n\n");
    }

    #[test]
    fn test_heading_includes_version() {
        let out = build_markdown_with_date("v1.3", &[], "2025-05-09");
        assert!(out.starts_with("## v1.3 (2025-05-09)"));
    }

    #[test]
    fn test_sections_in_fixed_order() {
        let commits = vec![
            commit(CommitKind::Other, "docs: update readme", ""),
            commit(CommitKind::Fix, "incorrect error message", ""),
            commit(CommitKind::Breaking, "fix: deprecated login v1", ""),
            commit(CommitKind::Feature, "add search", ""),
            commit(CommitKind::Infra, "migrate to pnpm", ""),
        ];

        let out = build_markdown_with_date("v1.0", &commits, "2025-05-09");

        let breaking = out.find("### 🚨 Breaking Changes").unwrap();
        let feature = out.find("### ✨ Feature").unwrap();
        let fix = out.find("### 🐛 Bug Fix").unwrap();
        let infra = out.find("### 🔧 Infra Change").unwrap();
        let other = out.find("### 🗃 Other").unwrap();

        assert!(breaking < feature);
        assert!(feature < fix);
        assert!(fix < infra);
        assert!(infra < other);
    }

    #[test]
    fn test_empty_sections_skipped() {
        let commits = vec![commit(CommitKind::Fix, "one fix", "")];
        let out = build_markdown_with_date("", &commits, "2025-05-09");

        assert!(out.contains("### 🐛 Bug Fix\n- one fix"));
        assert!(!out.contains("Breaking Changes"));
        assert!(!out.contains("Feature"));
    }

    #[test]
    fn test_body_lines_nest_under_bullet() {
        let commits = vec![commit(
            CommitKind::Feature,
            "add search",
            "- support fuzzy match\n- fallback to keyword",
        )];
        let out = build_markdown_with_date("", &commits, "2025-05-09");

        assert!(out.contains("- add search\n  - support fuzzy match\n  - fallback to keyword"));
    }

    #[test]
    fn test_trailing_blank_line() {
        let commits = vec![commit(CommitKind::Fix, "a fix", "")];
        let out = build_markdown_with_date("v1.0", &commits, "2025-05-09");
        assert!(out.ends_with("a fix\n\n"));
        assert!(!out.ends_with("\n\n\n"));
    }

    #[test]
    fn test_classified_pipeline_end_to_end() {
        let commits = vec![
            transform_commit("fix: deprecated login v1", "BREAKING CHANGE: deprecated login v1"),
            transform_commit("feat: add search", "- support fuzzy match"),
        ];
        let out = build_markdown_with_date("v1.0.0", &commits, "2025-05-09");

        assert!(out.contains("## v1.0.0 (2025-05-09)"));
        assert!(out.contains("### 🚨 Breaking Changes\n- fix: deprecated login v1"));
        assert!(out.contains("  - BREAKING CHANGE: deprecated login v1"));
        assert!(out.contains("### ✨ Feature\n- add search\n  - support fuzzy match"));
    }

    #[test]
    fn test_indent_bullet_transitions() {
        let lines = vec![
            "* First level item",
            "* Another first level",
            "- Nested under first",
            "• More nested",
            "* Back to previous",
            "* Plain line",
        ];

        let expected = [
            "  * First level item",
            "  * Another first level",
            "    - Nested under first",
            "      • More nested",
            "  * Back to previous",
            "  * Plain line",
        ]
        .join("\n");

        assert_eq!(format_indented_lines(&lines), expected);
    }

    #[test]
    fn test_indent_non_bullet_lines_get_dash() {
        let lines = vec!["Line one", "Line two"];
        assert_eq!(format_indented_lines(&lines), "  - Line one\n  - Line two");
    }

    #[test]
    fn test_changelog_date_shape() {
        let date = changelog_date();
        let re = Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap();
        assert!(re.is_match(&date), "unexpected date format: {date}");
    }
}
