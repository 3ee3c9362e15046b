//! Dense module identifiers.
//!
//! A `ModuleId` is the position of a module in the graph arena. Ids are
//! assigned in sorted module-path order, so the same input set always maps
//! to the same ids.

use serde::{Deserialize, Serialize};

/// Index of a module in the module arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ModuleId(pub u32);

impl ModuleId {
    /// Create an id from an arena index.
    pub fn new(index: usize) -> Self {
        Self(index as u32)
    }

    /// Arena index of this id.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for ModuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "m{}", self.0)
    }
}
