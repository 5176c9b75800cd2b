//! Parser for the convention-definition language.

pub mod ast;
pub mod parser;

pub use ast::{
    Alternatives, Composite, Definition, Expression, FileDef, Multipliable, Multiplier,
    PackageDef, StringExpr, StringPart,
};
pub use parser::Parser;
