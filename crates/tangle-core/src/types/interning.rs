//! Module path interning.
//!
//! Uses `lasso::ThreadedRodeo` as the module arena: each distinct normalized
//! path is stored once and its `Spur` maps one-to-one onto a dense
//! `ModuleId`. The interner is `Send + Sync`, so a finished graph can be
//! shared across rayon workers.

use lasso::{Key, Spur, ThreadedRodeo};

use super::identifiers::ModuleId;

/// Interner for normalized, root-relative module paths.
#[derive(Debug, Default)]
pub struct ModuleInterner {
    inner: ThreadedRodeo,
}

impl ModuleInterner {
    /// Create an empty interner.
    pub fn new() -> Self {
        Self {
            inner: ThreadedRodeo::default(),
        }
    }

    /// Intern a path, normalizing separators first.
    pub fn intern(&self, path: &str) -> ModuleId {
        let normalized = Self::normalize(path);
        let spur = self.inner.get_or_intern(normalized);
        ModuleId::new(spur.into_usize())
    }

    /// Look up a previously interned path without inserting.
    pub fn get(&self, path: &str) -> Option<ModuleId> {
        let normalized = Self::normalize(path);
        self.inner
            .get(normalized.as_str())
            .map(|spur| ModuleId::new(spur.into_usize()))
    }

    /// Resolve an id back to its path. Returns `None` for ids this interner
    /// never produced.
    pub fn resolve(&self, id: ModuleId) -> Option<&str> {
        let spur = Spur::try_from_usize(id.index())?;
        self.inner.try_resolve(&spur)
    }

    /// Number of interned modules.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterate `(id, path)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (ModuleId, &str)> {
        (0..self.len()).filter_map(move |index| {
            let id = ModuleId::new(index);
            self.resolve(id).map(|path| (id, path))
        })
    }

    /// Normalize a path: backslashes to forward slashes, collapse `//`,
    /// drop a leading `./` and any trailing slash.
    pub fn normalize(path: &str) -> String {
        let mut result = path.replace('\\', "/");
        while result.contains("//") {
            result = result.replace("//", "/");
        }
        while let Some(stripped) = result.strip_prefix("./") {
            result = stripped.to_string();
        }
        if result.len() > 1 && result.ends_with('/') {
            result.pop();
        }
        result
    }
}
