//! Data structures and string interning for Tangle.
//! FxHashMap, SmallVec, lasso-based module interning, dense module ids.

pub mod collections;
pub mod identifiers;
pub mod interning;

pub use collections::{FxHashMap, FxHashSet};
pub use identifiers::ModuleId;
pub use interning::ModuleInterner;
