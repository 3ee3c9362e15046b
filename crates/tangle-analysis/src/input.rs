//! Per-file records handed over by the parsing layer.
//!
//! The engine never reads source text; it consumes these records as-is.

use serde::{Deserialize, Serialize};

/// How a module reaches another module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImportKind {
    /// `import { x } from './a'`, `import './a'`
    StaticImport,
    /// `export { x } from './a'`, `export * from './a'`
    ExportFrom,
    /// `import type { T } from './a'`
    TypeOnlyImport,
    /// `import('./a')`
    DynamicImport,
}

impl ImportKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::StaticImport => "static-import",
            Self::ExportFrom => "export-from",
            Self::TypeOnlyImport => "type-only-import",
            Self::DynamicImport => "dynamic-import",
        }
    }
}

impl std::fmt::Display for ImportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Binding name that stands for "every export of the target".
pub const NAMESPACE_IMPORT: &str = "*";

/// Binding name of a default export.
pub const DEFAULT_EXPORT: &str = "default";

/// One import-like statement of a file.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportRecord {
    /// Module specifier exactly as written.
    pub specifier: String,
    pub kind: ImportKind,
    /// Names imported from the target as they are exported there
    /// (`"default"`, `"*"` for namespace / star re-exports).
    #[serde(default)]
    pub names: Vec<String>,
}

impl ImportRecord {
    pub fn new(specifier: impl Into<String>, kind: ImportKind) -> Self {
        Self {
            specifier: specifier.into(),
            kind,
            names: Vec::new(),
        }
    }

    pub fn with_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names = names.into_iter().map(Into::into).collect();
        self
    }

    /// A nameless dynamic import may touch any export of its target.
    pub fn uses_whole_module(&self) -> bool {
        self.names.iter().any(|n| n == NAMESPACE_IMPORT)
            || (self.kind == ImportKind::DynamicImport && self.names.is_empty())
    }
}

/// Kind of declaration behind an exported name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeclarationKind {
    Value,
    Function,
    Class,
    AbstractClass,
    Interface,
    TypeAlias,
    Const,
    Enum,
    Namespace,
}

impl DeclarationKind {
    /// Counts toward the abstractness denominator.
    pub fn is_type_declaration(&self) -> bool {
        matches!(self, Self::Class | Self::AbstractClass | Self::Interface)
    }

    /// Counts toward the abstractness numerator.
    pub fn is_abstract(&self) -> bool {
        matches!(self, Self::AbstractClass | Self::Interface)
    }
}

/// One exported symbol of a file.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRecord {
    pub name: String,
    pub declaration_kind: DeclarationKind,
}

impl ExportRecord {
    pub fn new(name: impl Into<String>, declaration_kind: DeclarationKind) -> Self {
        Self {
            name: name.into(),
            declaration_kind,
        }
    }
}

/// A parsed source file: its path plus its import and export statements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedFile {
    /// Absolute path under the project root, or a root-relative path.
    pub path: String,
    #[serde(default)]
    pub imports: Vec<ImportRecord>,
    #[serde(default)]
    pub exports: Vec<ExportRecord>,
}

impl ParsedFile {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            imports: Vec::new(),
            exports: Vec::new(),
        }
    }

    pub fn import(mut self, specifier: &str, kind: ImportKind, names: &[&str]) -> Self {
        self.imports
            .push(ImportRecord::new(specifier, kind).with_names(names.iter().copied()));
        self
    }

    pub fn export(mut self, name: &str, kind: DeclarationKind) -> Self {
        self.exports.push(ExportRecord::new(name, kind));
        self
    }
}
