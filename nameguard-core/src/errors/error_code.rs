//! Stable machine-readable error codes.

/// Maps every error variant to a stable, machine-readable code.
///
/// Codes never change once published; the human-readable `Display`
/// messages may.
pub trait NameGuardErrorCode {
    fn error_code(&self) -> &'static str;
}
