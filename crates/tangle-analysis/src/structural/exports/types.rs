//! Export liveness findings.

use serde::{Deserialize, Serialize};

/// Why an export is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeadExportKind {
    /// No other module imports the symbol.
    DeadExport,
    /// Every importer of the symbol is a test file.
    TestOnlyExport,
}

impl DeadExportKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::DeadExport => "dead-export",
            Self::TestOnlyExport => "test-only-export",
        }
    }
}

impl std::fmt::Display for DeadExportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeadExportFinding {
    pub kind: DeadExportKind,
    pub module: String,
    pub name: String,
}
