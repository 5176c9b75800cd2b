//! The common contract for compiled naming rules.

use crate::errors::RuleError;

/// A compiled, immutable naming rule.
///
/// Rule identity (equality and hashing) is based solely on the pattern
/// source text. Merging is only defined between rules with equal patterns;
/// attempting anything else is a programming error surfaced as
/// `RuleError::MergeConflict`.
pub trait Rule: Sized {
    /// The pattern source text this rule was compiled from.
    fn pattern(&self) -> &str;

    /// Whether the input name matches this rule's pattern in full.
    fn matches(&self, name: &str) -> bool;

    /// Merge this rule with an equal-pattern rule.
    fn merge(self, other: Self) -> Result<Self, RuleError>;
}
