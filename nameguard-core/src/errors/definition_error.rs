//! Definition-time errors: unreadable sources and rejected definitions.

use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::types::diagnostics::Diagnostic;

use super::error_code::NameGuardErrorCode;
use super::rule_error::RuleError;

/// Errors raised while reading, parsing, or compiling definition sources.
#[derive(Debug, thiserror::Error)]
pub enum DefinitionError {
    #[error("at least one definition source is required")]
    NoSources,

    #[error("definition file \"{}\" does not exist or is not a regular file", .path.display())]
    NotFound { path: PathBuf },

    #[error("definition file \"{}\" could not be read: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// One or more sources produced diagnostics; all of them are listed.
    #[error("{0}")]
    Rejected(RejectedDefinitions),

    #[error(transparent)]
    Rule(#[from] RuleError),
}

impl NameGuardErrorCode for DefinitionError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NoSources => "DEFINITION_NO_SOURCES",
            Self::NotFound { .. } => "DEFINITION_NOT_FOUND",
            Self::Unreadable { .. } => "DEFINITION_UNREADABLE",
            Self::Rejected(_) => "DEFINITION_REJECTED",
            Self::Rule(e) => e.error_code(),
        }
    }
}

/// Diagnostics of one definition source, in the order they were found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDiagnostics {
    pub source: PathBuf,
    pub diagnostics: Vec<Diagnostic>,
}

/// The aggregate of every rejected source's diagnostics.
///
/// Sources appear in processing order. No partial rule set accompanies
/// this; a rejected compile never yields a `DefinitionSet`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RejectedDefinitions {
    sources: Vec<SourceDiagnostics>,
}

impl RejectedDefinitions {
    /// Record a source's diagnostics. Empty collections are ignored.
    pub fn push(&mut self, source: PathBuf, diagnostics: Vec<Diagnostic>) {
        if !diagnostics.is_empty() {
            self.sources.push(SourceDiagnostics {
                source,
                diagnostics,
            });
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// The rejected sources, in processing order.
    pub fn sources(&self) -> &[SourceDiagnostics] {
        &self.sources
    }

    /// Total number of diagnostics across all sources.
    pub fn diagnostic_count(&self) -> usize {
        self.sources.iter().map(|s| s.diagnostics.len()).sum()
    }
}

impl fmt::Display for RejectedDefinitions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, source) in self.sources.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "errors occurred when parsing definition file \"{}\":",
                source.source.display()
            )?;
            for diagnostic in &source.diagnostics {
                write!(f, "\n{diagnostic}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_lists_every_source_and_message() {
        let mut rejected = RejectedDefinitions::default();
        rejected.push(
            PathBuf::from("a.def"),
            vec![Diagnostic::new(1, 0, "unexpected token '}'")],
        );
        rejected.push(
            PathBuf::from("b.def"),
            vec![
                Diagnostic::new(2, 4, "missing value for placeholder PROJECT"),
                Diagnostic::new(3, 0, "unrecognized character '@'"),
            ],
        );

        let text = rejected.to_string();
        assert!(text.contains("errors occurred when parsing definition file \"a.def\":"));
        assert!(text.contains("line 1:0 unexpected token '}'"));
        assert!(text.contains("errors occurred when parsing definition file \"b.def\":"));
        assert!(text.contains("line 2:4 missing value for placeholder PROJECT"));
        assert!(text.contains("line 3:0 unrecognized character '@'"));
        assert_eq!(rejected.diagnostic_count(), 3);
    }

    #[test]
    fn empty_diagnostics_are_not_recorded() {
        let mut rejected = RejectedDefinitions::default();
        rejected.push(PathBuf::from("a.def"), Vec::new());
        assert!(rejected.is_empty());
    }
}
