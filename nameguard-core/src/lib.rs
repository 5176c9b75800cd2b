//! # nameguard-core
//!
//! Foundation crate for the NameGuard convention engine.
//! Defines the error taxonomy, configuration, shared collections, the
//! compiled rule model, and the rule trait. The analysis crate builds the
//! lexing/parsing/matching pipeline on top of this.

pub mod config;
pub mod errors;
pub mod rules;
pub mod telemetry;
pub mod traits;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::CheckConfig;
pub use errors::{CheckError, ConfigError, DefinitionError, NameGuardErrorCode, RuleError};
pub use rules::{DefinitionSet, FileRule, PackageRule};
pub use traits::Rule;
pub use types::collections::{FxHashMap, FxHashSet};
pub use types::diagnostics::Diagnostic;
pub use types::report::{ComplianceReport, DiscoveredTree};
