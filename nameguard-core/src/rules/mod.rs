//! The compiled rule model.
//!
//! `FileRule` and `PackageRule` are immutable value types created once at
//! compile time; `DefinitionSet` is the ordered, merged collection the
//! matching engine scans in declaration order.

pub mod definition_set;
pub mod file_rule;
pub mod package_rule;

pub use definition_set::DefinitionSet;
pub use file_rule::FileRule;
pub use package_rule::PackageRule;

use crate::errors::RuleError;

/// Compile pattern source text into a whole-name matcher.
///
/// The pattern is anchored as `^(?:…)$` so rules always match the entire
/// package or file name; identity stays with the unanchored source text.
pub(crate) fn compile_anchored(pattern: &str) -> Result<regex::Regex, RuleError> {
    regex::Regex::new(&format!("^(?:{pattern})$")).map_err(|e| RuleError::InvalidPattern {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })
}
