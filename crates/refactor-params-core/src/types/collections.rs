//! Re-exports of performance-oriented collection types.

pub use rustc_hash::FxHashMap;
pub use smallvec::SmallVec;

/// SmallVec sized for a rule's bundled fields (one or two in practice).
pub type SmallVec2<T> = SmallVec<[T; 2]>;
