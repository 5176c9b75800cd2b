//! Abstract syntax tree for convention definitions.
//!
//! The tree is immutable and lives only for one compile pass: the parser
//! hands it to the pattern compiler and it is dropped afterwards.

/// One parsed definition source: a sequence of package definitions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Definition {
    pub packages: Vec<PackageDef>,
}

/// `package <alternatives> { <fileDef>+ }`
///
/// Position is that of the `package` keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageDef {
    pub pattern: Alternatives,
    pub files: Vec<FileDef>,
    pub line: u32,
    pub column: u32,
}

/// `file <alternatives>`
///
/// Position is that of the `file` keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDef {
    pub pattern: Alternatives,
    pub line: u32,
    pub column: u32,
}

/// One or more composites separated by `|`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Alternatives {
    pub options: Vec<Composite>,
}

/// A concatenation of multipliable expressions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Composite {
    pub parts: Vec<Multipliable>,
}

/// An expression with an optional repetition multiplier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Multipliable {
    pub expr: Expression,
    pub multiplier: Option<Multiplier>,
}

/// A simple or grouped expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    /// A quoted string of literal text and placeholders.
    Literal(StringExpr),
    /// The single-character wildcard `.`.
    Wildcard,
    /// A bracket expression, stored verbatim including the brackets.
    CharGroup(String),
    /// A parenthesized sub-alternation.
    Grouped(Alternatives),
}

/// The contents of one quoted string, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StringExpr {
    pub parts: Vec<StringPart>,
}

/// One segment of a string expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StringPart {
    /// A run of literal characters.
    Literal(String),
    /// A `%name%` placeholder; the name excludes the delimiters.
    Placeholder { name: String, line: u32, column: u32 },
}

/// A greedy or lazy repetition multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Multiplier {
    ZeroOrMore,
    OneOrMore,
    ZeroOrOne,
    ZeroOrMoreLazy,
    OneOrMoreLazy,
    ZeroOrOneLazy,
}

impl Multiplier {
    /// The multiplier exactly as written in the source and in the target
    /// pattern language.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ZeroOrMore => "*",
            Self::OneOrMore => "+",
            Self::ZeroOrOne => "?",
            Self::ZeroOrMoreLazy => "*?",
            Self::OneOrMoreLazy => "+?",
            Self::ZeroOrOneLazy => "??",
        }
    }

    pub fn from_token_text(text: &str) -> Option<Self> {
        match text {
            "*" => Some(Self::ZeroOrMore),
            "+" => Some(Self::OneOrMore),
            "?" => Some(Self::ZeroOrOne),
            "*?" => Some(Self::ZeroOrMoreLazy),
            "+?" => Some(Self::OneOrMoreLazy),
            "??" => Some(Self::ZeroOrOneLazy),
            _ => None,
        }
    }
}
