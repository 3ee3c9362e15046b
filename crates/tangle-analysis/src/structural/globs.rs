//! Module-path glob matching.

use glob::{MatchOptions, Pattern};

/// `*` and `?` stay within one path segment; only `**` crosses `/`.
const PATH_MATCH: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Match a repo-relative module path against a configured glob.
pub(crate) fn matches_module(pattern: &Pattern, module: &str) -> bool {
    pattern.matches_with(module, PATH_MATCH)
}
