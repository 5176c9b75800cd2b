//! Errors raised while running a compliance check.

use std::path::PathBuf;

use super::definition_error::DefinitionError;
use super::error_code::NameGuardErrorCode;

/// Errors surfaced by `check`: definition problems, an invalid source
/// root, or a failed tree walk. A walk failure aborts the check with no
/// partial report, since a correct report requires full-subtree coverage.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("source root directory \"{}\" does not exist or is not a directory", .path.display())]
    SourceRootInvalid { path: PathBuf },

    #[error("error while walking source tree under \"{}\": {message}", .path.display())]
    Walk { path: PathBuf, message: String },

    #[error(transparent)]
    Definition(#[from] DefinitionError),
}

impl NameGuardErrorCode for CheckError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::SourceRootInvalid { .. } => "CHECK_SOURCE_ROOT_INVALID",
            Self::Walk { .. } => "CHECK_WALK_FAILED",
            Self::Definition(e) => e.error_code(),
        }
    }
}
