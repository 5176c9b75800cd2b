//! Regular-expression backed file rule.

use std::hash::{Hash, Hasher};

use regex::Regex;

use crate::errors::RuleError;
use crate::traits::Rule;

use super::compile_anchored;

/// A compiled rule matched against file names.
///
/// Equality and hashing are based solely on the pattern source text.
#[derive(Debug, Clone)]
pub struct FileRule {
    pattern: String,
    regex: Regex,
}

impl FileRule {
    /// Compile a file rule from pattern source text.
    pub fn new(pattern: impl Into<String>) -> Result<Self, RuleError> {
        let pattern = pattern.into();
        let regex = compile_anchored(&pattern)?;
        Ok(Self { pattern, regex })
    }
}

impl Rule for FileRule {
    fn pattern(&self) -> &str {
        &self.pattern
    }

    fn matches(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }

    fn merge(self, other: Self) -> Result<Self, RuleError> {
        if self != other {
            return Err(RuleError::MergeConflict {
                left: self.pattern,
                right: other.pattern,
            });
        }
        Ok(self)
    }
}

impl PartialEq for FileRule {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern
    }
}

impl Eq for FileRule {}

impl Hash for FileRule {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pattern.hash(state);
    }
}
