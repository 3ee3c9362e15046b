//! Re-exports of performance-oriented collection types.

pub use rustc_hash::{FxHashMap, FxHashSet};
pub use smallvec::SmallVec;
pub use std::collections::{BTreeMap, BTreeSet};

/// SmallVec optimized for edge kinds on one module pair (usually 1).
pub type SmallVec2<T> = SmallVec<[T; 2]>;

/// SmallVec optimized for imported binding names (usually <4).
pub type SmallVec4<T> = SmallVec<[T; 4]>;
