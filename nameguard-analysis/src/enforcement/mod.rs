//! Compliance matching against the compiled rule set.

pub mod matcher;

pub use matcher::{evaluate, package_name};
