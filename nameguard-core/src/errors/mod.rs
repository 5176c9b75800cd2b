//! Error taxonomy for the NameGuard engine.
//!
//! Definition-time problems (syntax errors, missing placeholders) are
//! accumulated per source and surfaced together as one aggregate
//! rejection; everything else is a single descriptive error naming the
//! failing path.

pub mod check_error;
pub mod config_error;
pub mod definition_error;
pub mod error_code;
pub mod rule_error;

pub use check_error::CheckError;
pub use config_error::ConfigError;
pub use definition_error::{DefinitionError, RejectedDefinitions, SourceDiagnostics};
pub use error_code::NameGuardErrorCode;
pub use rule_error::RuleError;
