//! Reads definition sources and folds their rules into one set.
//!
//! Sources are processed in order. A source that cannot be read aborts
//! aggregation immediately; a source that produces diagnostics does not:
//! the remaining sources are still compiled so every problem across all
//! sources is reported in one aggregate error. A partial rule set is
//! never returned.

use std::fs;
use std::path::{Path, PathBuf};

use nameguard_core::errors::RejectedDefinitions;
use nameguard_core::{DefinitionError, DefinitionSet, FxHashMap};

use crate::compiler::PatternCompiler;
use crate::lexer::Lexer;
use crate::parser::Parser;

pub struct DefinitionAggregator<'a> {
    sources: &'a [PathBuf],
    placeholders: &'a FxHashMap<String, String>,
}

impl<'a> DefinitionAggregator<'a> {
    pub fn new(sources: &'a [PathBuf], placeholders: &'a FxHashMap<String, String>) -> Self {
        Self {
            sources,
            placeholders,
        }
    }

    /// Parse and compile every source, merging equal-pattern package
    /// rules into the position of their first occurrence across sources.
    pub fn aggregate(&self) -> Result<DefinitionSet, DefinitionError> {
        if self.sources.is_empty() {
            return Err(DefinitionError::NoSources);
        }

        let mut rejected = RejectedDefinitions::default();
        let mut rules = Vec::new();

        for source in self.sources {
            let text = read_source(source)?;

            let (tokens, mut diagnostics) = Lexer::new(&text).tokenize();
            let (definition, parse_diagnostics) = Parser::new(tokens).parse();
            diagnostics.extend(parse_diagnostics);

            let (source_rules, compile_diagnostics) =
                PatternCompiler::new(self.placeholders).compile(&definition);
            diagnostics.extend(compile_diagnostics);

            if diagnostics.is_empty() {
                tracing::debug!(
                    source = %source.display(),
                    rules = source_rules.len(),
                    "definition source compiled"
                );
                rules.extend(source_rules);
            } else {
                tracing::warn!(
                    source = %source.display(),
                    problems = diagnostics.len(),
                    "definition source rejected"
                );
                rejected.push(source.clone(), diagnostics);
            }
        }

        if !rejected.is_empty() {
            return Err(DefinitionError::Rejected(rejected));
        }

        Ok(DefinitionSet::from_rules(rules)?)
    }
}

fn read_source(path: &Path) -> Result<String, DefinitionError> {
    if !path.is_file() {
        return Err(DefinitionError::NotFound {
            path: path.to_path_buf(),
        });
    }
    fs::read_to_string(path).map_err(|source| DefinitionError::Unreadable {
        path: path.to_path_buf(),
        source,
    })
}
