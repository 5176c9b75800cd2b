//! Rule-model contract violations.
//!
//! `EmptyFileRuleSet` and `MergeConflict` are unreachable through the
//! public compilation path; they guard the constructors against misuse.
//! `InvalidPattern` is reachable: character groups are copied into the
//! target pattern verbatim, so a group the regex engine rejects (e.g. a
//! reversed range) surfaces here and is reported as a diagnostic of the
//! offending definition.

use super::error_code::NameGuardErrorCode;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    #[error("a package rule requires at least one file rule (package pattern {pattern:?})")]
    EmptyFileRuleSet { pattern: String },

    #[error("cannot merge rule {left:?} with rule {right:?}: patterns differ")]
    MergeConflict { left: String, right: String },

    #[error("invalid pattern {pattern:?}: {message}")]
    InvalidPattern { pattern: String, message: String },
}

impl NameGuardErrorCode for RuleError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyFileRuleSet { .. } => "RULE_EMPTY_FILE_RULE_SET",
            Self::MergeConflict { .. } => "RULE_MERGE_CONFLICT",
            Self::InvalidPattern { .. } => "RULE_INVALID_PATTERN",
        }
    }
}
