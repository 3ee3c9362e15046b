//! Dead and test-only export detection over resolved import sites.

use glob::Pattern;
use tangle_core::config::ExportsConfig;
use tangle_core::errors::AnalysisResult;
use tangle_core::types::collections::{FxHashMap, SmallVec4};
use tangle_core::types::ModuleId;

use super::test_files::{compile_globs, TestFileClassifier};
use super::types::{DeadExportFinding, DeadExportKind};
use crate::input::DEFAULT_EXPORT;
use crate::structural::globs::matches_module;
use crate::structural::graph::{ImportSite, ModuleGraph};

/// Settings for one liveness pass.
#[derive(Debug, Clone)]
pub struct ExportLiveness {
    pub classifier: TestFileClassifier,
    /// Modules whose exports are public API and never reported.
    pub entry_points: Vec<Pattern>,
    pub include_default: bool,
}

impl Default for ExportLiveness {
    fn default() -> Self {
        Self {
            classifier: TestFileClassifier::default(),
            entry_points: Vec::new(),
            include_default: true,
        }
    }
}

impl ExportLiveness {
    pub fn from_config(config: &ExportsConfig) -> AnalysisResult<Self> {
        Ok(Self {
            classifier: TestFileClassifier::from_config(config)?,
            entry_points: compile_globs("exports.entry_points", &config.entry_points)?,
            include_default: config.effective_include_default(),
        })
    }

    fn is_entry_point(&self, module: &str) -> bool {
        self.entry_points.iter().any(|p| matches_module(p, module))
    }
}

/// Report exports nobody imports, and exports only test files import.
///
/// Importers are the modules behind import sites that target the exporting
/// module and name the symbol (or use the whole module). The module itself
/// never counts as an importer.
pub fn find_dead_exports(graph: &ModuleGraph, liveness: &ExportLiveness) -> Vec<DeadExportFinding> {
    let mut sites_by_target: FxHashMap<ModuleId, SmallVec4<&ImportSite>> = FxHashMap::default();
    for site in graph.import_sites() {
        if site.from != site.to {
            sites_by_target.entry(site.to).or_default().push(site);
        }
    }

    let mut findings = Vec::new();
    for (id, module) in graph.modules() {
        let exports = graph.exports_of(id);
        if exports.is_empty()
            || liveness.is_entry_point(module)
            || liveness.classifier.is_test_file(module)
        {
            continue;
        }
        let sites = sites_by_target.get(&id).map(|s| s.as_slice()).unwrap_or(&[]);

        for export in exports {
            if !liveness.include_default && export.name == DEFAULT_EXPORT {
                continue;
            }
            let mut used = false;
            let mut used_outside_tests = false;
            for site in sites.iter().filter(|s| s.references(&export.name)) {
                used = true;
                if !liveness.classifier.is_test_file(graph.module_name(site.from)) {
                    used_outside_tests = true;
                    break;
                }
            }
            let kind = match (used, used_outside_tests) {
                (false, _) => DeadExportKind::DeadExport,
                (true, false) => DeadExportKind::TestOnlyExport,
                (true, true) => continue,
            };
            findings.push(DeadExportFinding {
                kind,
                module: module.to_string(),
                name: export.name.clone(),
            });
        }
    }

    // Modules iterate in path order and exports are sorted by name.
    tracing::debug!(findings = findings.len(), "export liveness complete");
    findings
}
