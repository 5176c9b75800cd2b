//! Translates the definition syntax tree into rule patterns.
//!
//! Translation rules: alternatives join with `|`, composites concatenate,
//! multipliers append verbatim, grouping always becomes a non-capturing
//! `(?:…)`, the wildcard becomes `.`, and character groups pass through
//! unchanged. A whole string expression, placeholder values included, is
//! concatenated first and then escaped as one literal span so none of its
//! characters act as pattern metacharacters.
//!
//! A missing placeholder value never aborts the pass; it is recorded as a
//! diagnostic (treating the value as empty) so every missing placeholder
//! in a source is reported together.

use nameguard_core::{Diagnostic, FileRule, FxHashMap, PackageRule, RuleError};

use crate::parser::ast::{
    Alternatives, Definition, Expression, Multipliable, StringExpr, StringPart,
};

pub struct PatternCompiler<'a> {
    placeholders: &'a FxHashMap<String, String>,
    diagnostics: Vec<Diagnostic>,
}

/// Work items for the iterative fragment emitter. Group nesting is
/// handled on this explicit stack, never via call recursion.
enum Task<'ast> {
    Alternatives(&'ast Alternatives),
    Multipliable(&'ast Multipliable),
    Raw(&'static str),
    Owned(String),
}

impl<'a> PatternCompiler<'a> {
    pub fn new(placeholders: &'a FxHashMap<String, String>) -> Self {
        Self {
            placeholders,
            diagnostics: Vec::new(),
        }
    }

    /// Compile every package definition into a package rule, in
    /// declaration order. Any diagnostics returned alongside the rules
    /// must fail the overall compile.
    pub fn compile(mut self, definition: &Definition) -> (Vec<PackageRule>, Vec<Diagnostic>) {
        let mut rules = Vec::new();

        for package in &definition.packages {
            let pattern = self.alternatives_fragment(&package.pattern);

            let mut file_rules = Vec::new();
            for file in &package.files {
                let file_pattern = self.alternatives_fragment(&file.pattern);
                match FileRule::new(file_pattern) {
                    Ok(rule) => file_rules.push(rule),
                    Err(error) => self.reject(file.line, file.column, error),
                }
            }

            // Zero file rules only happens on already-diagnosed input.
            if file_rules.is_empty() {
                continue;
            }

            match PackageRule::new(pattern, file_rules) {
                Ok(rule) => rules.push(rule),
                Err(error) => self.reject(package.line, package.column, error),
            }
        }

        if !self.diagnostics.is_empty() {
            tracing::warn!(count = self.diagnostics.len(), "pattern compilation collected diagnostics");
        }
        (rules, self.diagnostics)
    }

    fn reject(&mut self, line: u32, column: u32, error: RuleError) {
        self.diagnostics
            .push(Diagnostic::new(line, column, error.to_string()));
    }

    /// Emit the pattern fragment for one alternation tree.
    fn alternatives_fragment(&mut self, alternatives: &Alternatives) -> String {
        let mut out = String::new();
        let mut work = vec![Task::Alternatives(alternatives)];

        while let Some(task) = work.pop() {
            match task {
                Task::Raw(text) => out.push_str(text),
                Task::Owned(text) => out.push_str(&text),
                Task::Alternatives(alternatives) => {
                    // Push in reverse so fragments emit in source order.
                    for (index, composite) in alternatives.options.iter().enumerate().rev() {
                        for part in composite.parts.iter().rev() {
                            work.push(Task::Multipliable(part));
                        }
                        if index > 0 {
                            work.push(Task::Raw("|"));
                        }
                    }
                }
                Task::Multipliable(part) => {
                    if let Some(multiplier) = part.multiplier {
                        work.push(Task::Raw(multiplier.as_str()));
                    }
                    match &part.expr {
                        Expression::Literal(string_expr) => {
                            let span = self.literal_span(string_expr);
                            work.push(Task::Owned(span));
                        }
                        Expression::Wildcard => work.push(Task::Raw(".")),
                        Expression::CharGroup(text) => work.push(Task::Owned(text.clone())),
                        Expression::Grouped(inner) => {
                            work.push(Task::Raw(")"));
                            work.push(Task::Alternatives(inner));
                            work.push(Task::Raw("(?:"));
                        }
                    }
                }
            }
        }

        out
    }

    /// Concatenate a string expression's literal text and placeholder
    /// values, then quote the whole span for literal matching.
    fn literal_span(&mut self, string_expr: &StringExpr) -> String {
        let mut text = String::new();
        for part in &string_expr.parts {
            match part {
                StringPart::Literal(literal) => text.push_str(literal),
                StringPart::Placeholder { name, line, column } => {
                    match self.placeholders.get(name) {
                        Some(value) => text.push_str(value),
                        None => self.diagnostics.push(Diagnostic::new(
                            *line,
                            *column,
                            format!("missing value for placeholder {name}"),
                        )),
                    }
                }
            }
        }
        regex::escape(&text)
    }
}
