//! Arithmetic over the two-component `vMAJOR.PATCH` version scheme.

/// A parsed `vMAJOR.PATCH` version.
///
/// The derived ordering compares major first, then patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ParsedVersion {
    pub major: u64,
    pub patch: u64,
}

/// Parse a version string like `v1.2` or `1.2` into its components.
///
/// Returns `None` for anything that is not exactly two integer components.
/// Malformed input is not an error anywhere in the pipeline; callers treat
/// `None` as "no usable version".
pub fn parse_version(v: &str) -> Option<ParsedVersion> {
    let raw = v.strip_prefix('v').unwrap_or(v);
    let mut parts = raw.split('.');

    let major = parts.next()?.parse::<u64>().ok()?;
    let patch = parts.next()?.parse::<u64>().ok()?;
    if parts.next().is_some() {
        return None;
    }

    Some(ParsedVersion { major, patch })
}

/// Bump a version string by the given kind.
///
/// `"major"` yields `v{major+1}.0`, `"patch"` yields `v{major}.{patch+1}`.
/// Any other kind, or a malformed `current`, yields `None` rather than an
/// error.
pub fn bump_version(current: &str, kind: &str) -> Option<String> {
    let version = parse_version(current)?;
    match kind {
        "major" => Some(format!("v{}.0", version.major + 1)),
        "patch" => Some(format!("v{}.{}", version.major, version.patch + 1)),
        _ => None,
    }
}

/// Returns true iff `a` is strictly greater than `b` under `(major, patch)`
/// lexicographic comparison. Equal versions and unparseable input compare
/// as not-greater.
pub fn is_semver_greater(a: &str, b: &str) -> bool {
    match (parse_version(a), parse_version(b)) {
        (Some(pa), Some(pb)) => pa > pb,
        _ => false,
    }
}
