//! # nameguard-analysis
//!
//! The NameGuard pipeline: lexing and parsing of convention-definition
//! text, pattern compilation with placeholder substitution, definition
//! aggregation, package discovery, and the compliance matching engine.

#![allow(clippy::module_inception)]

pub mod checker;
pub mod compiler;
pub mod definitions;
pub mod enforcement;
pub mod lexer;
pub mod parser;
pub mod scanner;

pub use checker::ConventionChecker;
pub use nameguard_core::{
    CheckConfig, CheckError, ComplianceReport, DefinitionError, DefinitionSet, Diagnostic,
    DiscoveredTree, FileRule, PackageRule, Rule, RuleError,
};
