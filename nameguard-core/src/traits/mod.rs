//! Shared traits used across NameGuard crates.

pub mod rule;

pub use rule::Rule;
