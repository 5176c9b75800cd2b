//! Pattern compilation: syntax tree to compiled rules.

pub mod pattern_compiler;

pub use pattern_compiler::PatternCompiler;
