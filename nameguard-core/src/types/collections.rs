//! Hash collections backed by the FxHash hasher.

pub use rustc_hash::{FxHashMap, FxHashSet};
