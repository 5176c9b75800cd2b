//! The convention checker: public entry point of the engine.
//!
//! Owns the definition sources and the placeholder values, compiles them
//! into a rule set once on first use, and runs compliance checks against
//! source root directories. The rule set lives in a guarded lazy cell, so
//! concurrent first-time checks cannot race into duplicate compiles; a
//! failed compile leaves the cell empty and a later check retries.

use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;

use nameguard_core::{
    CheckConfig, CheckError, ComplianceReport, DefinitionError, DefinitionSet, FxHashMap,
};

use crate::definitions::DefinitionAggregator;
use crate::enforcement;
use crate::scanner;

pub struct ConventionChecker {
    definition_files: Vec<PathBuf>,
    placeholders: FxHashMap<String, String>,
    follow_symlinks: bool,
    rules: OnceCell<DefinitionSet>,
}

impl ConventionChecker {
    /// Checker over a single definition file with no placeholders.
    pub fn new(definition_file: impl Into<PathBuf>) -> Self {
        Self {
            definition_files: vec![definition_file.into()],
            placeholders: FxHashMap::default(),
            follow_symlinks: false,
            rules: OnceCell::new(),
        }
    }

    /// Checker over one or more definition files, applied in order, with
    /// placeholder values substituted at compile time.
    pub fn with_placeholders(
        definition_files: Vec<PathBuf>,
        placeholders: FxHashMap<String, String>,
    ) -> Result<Self, DefinitionError> {
        if definition_files.is_empty() {
            return Err(DefinitionError::NoSources);
        }
        Ok(Self {
            definition_files,
            placeholders,
            follow_symlinks: false,
            rules: OnceCell::new(),
        })
    }

    /// Build a checker from a loaded configuration.
    pub fn from_config(config: &CheckConfig) -> Result<Self, DefinitionError> {
        let placeholders = config
            .placeholders
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        let checker = Self::with_placeholders(config.definition_files.clone(), placeholders)?;
        Ok(checker.follow_symlinks(config.effective_follow_symlinks()))
    }

    /// Follow symbolic links during discovery. Default: false.
    pub fn follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    /// The compiled rule set, built on first use and reused afterwards.
    pub fn rules(&self) -> Result<&DefinitionSet, DefinitionError> {
        self.rules.get_or_try_init(|| {
            DefinitionAggregator::new(&self.definition_files, &self.placeholders).aggregate()
        })
    }

    /// Check the whole subtree under `source_root` against the rules.
    ///
    /// The returned report maps dotted package names to their
    /// non-compliant file names; an empty set means the package name
    /// itself matched no rule. Compliant packages are absent.
    pub fn check(&self, source_root: &Path) -> Result<ComplianceReport, CheckError> {
        if !source_root.is_dir() {
            return Err(CheckError::SourceRootInvalid {
                path: source_root.to_path_buf(),
            });
        }

        let rules = self.rules()?;
        let tree = scanner::discover_packages(source_root, self.follow_symlinks)?;
        let report = enforcement::evaluate(rules, &tree);

        tracing::info!(
            root = %source_root.display(),
            packages = tree.len(),
            non_compliant = report.len(),
            "compliance check finished"
        );
        Ok(report)
    }
}
