//! Module resolution: file paths and relative specifiers to module ids.
//!
//! Module ids are POSIX-style, project-root-relative paths. Only `./` and
//! `../` specifiers are resolved; bare package specifiers never reach the
//! graph.

use std::path::Path;

use tangle_core::constants::SOURCE_EXTENSIONS;

/// Returns true for specifiers the engine resolves (`./x`, `../x`, `.`, `..`).
pub fn is_relative_specifier(specifier: &str) -> bool {
    specifier == "."
        || specifier == ".."
        || specifier.starts_with("./")
        || specifier.starts_with("../")
}

/// Lexically normalize a `/`-separated relative path.
///
/// Drops empty and `.` segments and applies `..`. Returns `None` when `..`
/// climbs above the root.
pub fn normalize_relative(path: &str) -> Option<String> {
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop()?;
            }
            other => segments.push(other),
        }
    }
    Some(segments.join("/"))
}

/// Convert a file path into its module id.
///
/// Absolute paths must live under `root`; relative paths are taken as
/// already root-relative (a leading `root` prefix is stripped when present).
pub fn module_id_for_path(root: &Path, path: &str) -> Option<String> {
    let unified = path.replace('\\', "/");
    let candidate = Path::new(&unified);
    let relative = match candidate.strip_prefix(root) {
        Ok(stripped) => stripped.to_string_lossy().replace('\\', "/"),
        Err(_) if candidate.is_absolute() => return None,
        Err(_) => unified.clone(),
    };
    let normalized = normalize_relative(&relative)?;
    if normalized.is_empty() {
        None
    } else {
        Some(normalized)
    }
}

/// Directory part of a module id (`""` for modules at the root).
pub fn module_dir(module: &str) -> &str {
    module.rsplit_once('/').map(|(dir, _)| dir).unwrap_or("")
}

/// Resolve `specifier` as written in `from_module` against the set of known
/// modules.
///
/// Probe order: exact path, TypeScript ESM remap (`./a.js` naming `a.ts`),
/// each source extension appended, then `index.<ext>` inside the path.
/// Returns `None` for bare specifiers, paths escaping the root, and targets
/// that are not known modules.
pub fn resolve_specifier<F>(from_module: &str, specifier: &str, is_known: F) -> Option<String>
where
    F: Fn(&str) -> bool,
{
    if !is_relative_specifier(specifier) {
        return None;
    }
    let specifier = strip_query(specifier);
    let dir = module_dir(from_module);
    let joined = if dir.is_empty() {
        specifier.to_string()
    } else {
        format!("{dir}/{specifier}")
    };
    let base = normalize_relative(&joined)?;

    candidate_paths(&base).into_iter().find(|c| is_known(c))
}

/// Drop bundler query / fragment suffixes (`./a?raw`, `./b#x`).
fn strip_query(specifier: &str) -> &str {
    specifier
        .split_once(['?', '#'])
        .map(|(path, _)| path)
        .unwrap_or(specifier)
}

fn candidate_paths(base: &str) -> Vec<String> {
    let mut candidates = Vec::with_capacity(2 + SOURCE_EXTENSIONS.len() * 2);
    if !base.is_empty() {
        candidates.push(base.to_string());
        candidates.extend(esm_remaps(base));
        for ext in SOURCE_EXTENSIONS {
            candidates.push(format!("{base}.{ext}"));
        }
    }
    for ext in SOURCE_EXTENSIONS {
        if base.is_empty() {
            candidates.push(format!("index.{ext}"));
        } else {
            candidates.push(format!("{base}/index.{ext}"));
        }
    }
    candidates
}

/// TypeScript projects written as ESM import `./a.js` while the file on disk
/// is `a.ts`.
fn esm_remaps(base: &str) -> Vec<String> {
    const REMAPS: [(&str, &[&str]); 4] = [
        (".js", &["ts", "tsx"]),
        (".jsx", &["tsx"]),
        (".mjs", &["mts"]),
        (".cjs", &["cts"]),
    ];
    for (suffix, targets) in REMAPS {
        if let Some(stem) = base.strip_suffix(suffix) {
            return targets.iter().map(|ext| format!("{stem}.{ext}")).collect();
        }
    }
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn known(set: &'static [&'static str]) -> impl Fn(&str) -> bool {
        move |c: &str| set.contains(&c)
    }

    #[test]
    fn relative_specifier_cases() {
        assert!(is_relative_specifier("./a"));
        assert!(is_relative_specifier("../a"));
        assert!(is_relative_specifier("."));
        assert!(is_relative_specifier(".."));
        assert!(!is_relative_specifier("react"));
        assert!(!is_relative_specifier("@scope/pkg"));
        assert!(!is_relative_specifier("/abs/path"));
        assert!(!is_relative_specifier(".hidden"));
    }

    #[test]
    fn normalize_applies_parent_segments() {
        assert_eq!(normalize_relative("src/a/../b/./c.ts").as_deref(), Some("src/b/c.ts"));
        assert_eq!(normalize_relative("a//b").as_deref(), Some("a/b"));
        assert_eq!(normalize_relative("../outside.ts"), None);
        assert_eq!(normalize_relative("src/../../x.ts"), None);
    }

    #[test]
    fn module_id_for_absolute_and_relative_paths() {
        let root = PathBuf::from("/repo");
        assert_eq!(module_id_for_path(&root, "/repo/src/a.ts").as_deref(), Some("src/a.ts"));
        assert_eq!(module_id_for_path(&root, "src/a.ts").as_deref(), Some("src/a.ts"));
        assert_eq!(module_id_for_path(&root, "./src/./a.ts").as_deref(), Some("src/a.ts"));
        assert_eq!(module_id_for_path(&root, "/elsewhere/a.ts"), None);
        assert_eq!(module_id_for_path(&root, "src\\win\\b.ts").as_deref(), Some("src/win/b.ts"));
    }

    #[test]
    fn resolves_extensionless_specifier() {
        let r = resolve_specifier("src/a.ts", "./b", known(&["src/b.ts"]));
        assert_eq!(r.as_deref(), Some("src/b.ts"));
    }

    #[test]
    fn resolves_parent_directory_specifier() {
        let r = resolve_specifier("src/feature/a.ts", "../shared/util", known(&["src/shared/util.tsx"]));
        assert_eq!(r.as_deref(), Some("src/shared/util.tsx"));
    }

    #[test]
    fn resolves_directory_index() {
        let r = resolve_specifier("src/a.ts", "./lib", known(&["src/lib/index.ts"]));
        assert_eq!(r.as_deref(), Some("src/lib/index.ts"));
    }

    #[test]
    fn resolves_esm_js_to_ts() {
        let r = resolve_specifier("src/a.ts", "./b.js", known(&["src/b.ts"]));
        assert_eq!(r.as_deref(), Some("src/b.ts"));
    }

    #[test]
    fn exact_match_wins_over_probing() {
        let r = resolve_specifier("a.ts", "./b.js", known(&["b.js", "b.ts"]));
        assert_eq!(r.as_deref(), Some("b.js"));
    }

    #[test]
    fn bare_and_escaping_specifiers_are_skipped() {
        assert_eq!(resolve_specifier("src/a.ts", "react", known(&["react"])), None);
        assert_eq!(resolve_specifier("a.ts", "../up", known(&["up.ts"])), None);
        assert_eq!(resolve_specifier("src/a.ts", "./missing", known(&[])), None);
    }

    #[test]
    fn query_suffix_is_ignored() {
        let r = resolve_specifier("src/a.ts", "./b?raw", known(&["src/b.ts"]));
        assert_eq!(r.as_deref(), Some("src/b.ts"));
    }

    #[test]
    fn parent_of_root_level_module_resolves_index() {
        let r = resolve_specifier("src/a.ts", "..", known(&["index.ts"]));
        assert_eq!(r.as_deref(), Some("index.ts"));
    }
}
