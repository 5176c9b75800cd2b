//! Package discovery over a source tree.

pub mod walker;

pub use walker::discover_packages;
