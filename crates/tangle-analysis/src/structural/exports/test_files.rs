//! Test file classification.

use glob::Pattern;
use tangle_core::config::ExportsConfig;
use tangle_core::constants::{SOURCE_EXTENSIONS, TEST_DIRECTORY, TEST_STEM_SUFFIXES};
use tangle_core::errors::{AnalysisError, AnalysisResult};

use crate::structural::globs::matches_module;

/// Decides whether a module path is a test file.
///
/// Built-in rules: a file stem ending in `.spec` or `.test` (before any
/// JS/TS extension), or any path segment equal to `__tests__`. Extra globs
/// from configuration are matched against the whole module path.
#[derive(Debug, Clone, Default)]
pub struct TestFileClassifier {
    extra: Vec<Pattern>,
}

impl TestFileClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &ExportsConfig) -> AnalysisResult<Self> {
        let extra = compile_globs("exports.test_globs", &config.test_globs)?;
        Ok(Self { extra })
    }

    pub fn is_test_file(&self, module: &str) -> bool {
        if module.split('/').any(|segment| segment == TEST_DIRECTORY) {
            return true;
        }
        let file_name = module.rsplit('/').next().unwrap_or(module);
        let stem = strip_source_extension(file_name);
        if TEST_STEM_SUFFIXES.iter().any(|suffix| stem.ends_with(suffix)) {
            return true;
        }
        self.extra.iter().any(|p| matches_module(p, module))
    }
}

/// Longest matching extension wins, so `a.d.ts` strips to `a`.
fn strip_source_extension(file_name: &str) -> &str {
    SOURCE_EXTENSIONS
        .iter()
        .filter_map(|ext| {
            file_name
                .strip_suffix(ext)
                .and_then(|rest| rest.strip_suffix('.'))
        })
        .min_by_key(|stem| stem.len())
        .unwrap_or(file_name)
}

/// Compile a list of configured globs, naming the offending field on error.
pub(crate) fn compile_globs(field: &str, patterns: &[String]) -> AnalysisResult<Vec<Pattern>> {
    patterns
        .iter()
        .map(|pattern| {
            Pattern::new(pattern).map_err(|e| AnalysisError::InvalidGlob {
                field: field.to_string(),
                pattern: pattern.clone(),
                message: e.to_string(),
            })
        })
        .collect()
}
