//! Recursive-descent parser over the token stream.
//!
//! Parsing fails softly: syntax errors are collected as diagnostics and a
//! best-effort tree is still returned, so the pattern compiler can keep
//! collecting placeholder diagnostics in the same pass. The aggregate
//! outcome is only a success if zero diagnostics were collected anywhere.
//!
//! Grouped expressions are parsed with an explicit frame stack instead of
//! call recursion, so nesting depth is bounded by memory rather than the
//! host call stack.

use nameguard_core::Diagnostic;

use crate::lexer::{Token, TokenKind};

use super::ast::{
    Alternatives, Composite, Definition, Expression, FileDef, Multipliable, Multiplier,
    PackageDef, StringExpr, StringPart,
};

pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    diagnostics: Vec<Diagnostic>,
}

/// One level of alternation being assembled: the finished options, the
/// composite currently growing, and the position of the `(` that opened
/// this level (absent for the root frame).
struct Frame {
    options: Vec<Composite>,
    current: Vec<Multipliable>,
    opened_at: Option<(u32, u32)>,
    pending_pipe: Option<(u32, u32)>,
}

impl Frame {
    fn new(opened_at: Option<(u32, u32)>) -> Self {
        Self {
            options: Vec::new(),
            current: Vec::new(),
            opened_at,
            pending_pipe: None,
        }
    }

    fn push_expr(&mut self, expr: Expression) {
        self.pending_pipe = None;
        self.current.push(Multipliable {
            expr,
            multiplier: None,
        });
    }

    fn end_option(&mut self) {
        self.options.push(Composite {
            parts: std::mem::take(&mut self.current),
        });
    }

    fn finish(mut self, diagnostics: &mut Vec<Diagnostic>) -> Alternatives {
        if !self.current.is_empty() {
            self.end_option();
        } else if let Some((line, column)) = self.pending_pipe {
            diagnostics.push(Diagnostic::new(line, column, "empty alternative after '|'"));
        }
        Alternatives {
            options: self.options,
        }
    }
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            pos: 0,
            diagnostics: Vec::new(),
        }
    }

    /// Parse the whole token stream into a best-effort definition tree.
    pub fn parse(mut self) -> (Definition, Vec<Diagnostic>) {
        let mut packages = Vec::new();
        while let Some(token) = self.peek_cloned() {
            if token.kind == TokenKind::Package {
                packages.push(self.package_definition(&token));
            } else {
                self.pos += 1;
                self.diagnostics.push(Diagnostic::new(
                    token.line,
                    token.column,
                    format!("unexpected token '{}', expected 'package'", token.text),
                ));
            }
        }
        (Definition { packages }, self.diagnostics)
    }

    fn peek_cloned(&self) -> Option<Token> {
        self.tokens.get(self.pos).cloned()
    }

    fn peek_kind(&self) -> Option<TokenKind> {
        self.tokens.get(self.pos).map(|t| t.kind)
    }

    /// Position for end-of-input diagnostics: the last token seen.
    fn eof_position(&self) -> (u32, u32) {
        self.tokens
            .last()
            .map(|t| (t.line, t.column))
            .unwrap_or((1, 0))
    }

    /// `package <alternatives> { <fileDef>+ }`, with recovery on a
    /// missing body or a missing closing brace.
    fn package_definition(&mut self, keyword: &Token) -> PackageDef {
        self.pos += 1;
        let pattern = self.alternatives();
        if pattern.options.is_empty() {
            self.diagnostics.push(Diagnostic::new(
                keyword.line,
                keyword.column,
                "package definition is missing its name pattern",
            ));
        }

        if self.peek_kind() == Some(TokenKind::LeftBrace) {
            self.pos += 1;
        } else {
            let (line, column) = self
                .peek_cloned()
                .map(|t| (t.line, t.column))
                .unwrap_or_else(|| self.eof_position());
            self.diagnostics.push(Diagnostic::new(
                line,
                column,
                "expected '{' after package pattern",
            ));
            while let Some(kind) = self.peek_kind() {
                if kind == TokenKind::LeftBrace || kind == TokenKind::Package {
                    break;
                }
                self.pos += 1;
            }
            if self.peek_kind() == Some(TokenKind::LeftBrace) {
                self.pos += 1;
            } else {
                return PackageDef {
                    pattern,
                    files: Vec::new(),
                    line: keyword.line,
                    column: keyword.column,
                };
            }
        }

        let mut files = Vec::new();
        loop {
            match self.peek_cloned() {
                Some(token) if token.kind == TokenKind::File => {
                    self.pos += 1;
                    let file_pattern = self.alternatives();
                    if file_pattern.options.is_empty() {
                        self.diagnostics.push(Diagnostic::new(
                            token.line,
                            token.column,
                            "file definition is missing its name pattern",
                        ));
                    } else {
                        files.push(FileDef {
                            pattern: file_pattern,
                            line: token.line,
                            column: token.column,
                        });
                    }
                }
                Some(token) if token.kind == TokenKind::RightBrace => {
                    self.pos += 1;
                    break;
                }
                Some(token) if token.kind == TokenKind::Package => {
                    // Leave the keyword for the caller; this body is done.
                    self.diagnostics.push(Diagnostic::new(
                        token.line,
                        token.column,
                        "missing '}' before 'package'",
                    ));
                    break;
                }
                Some(token) => {
                    self.pos += 1;
                    self.diagnostics.push(Diagnostic::new(
                        token.line,
                        token.column,
                        format!("unexpected token '{}', expected 'file' or '}}'", token.text),
                    ));
                }
                None => {
                    let (line, column) = self.eof_position();
                    self.diagnostics.push(Diagnostic::new(
                        line,
                        column,
                        "unexpected end of input, expected '}'",
                    ));
                    break;
                }
            }
        }

        if files.is_empty() {
            self.diagnostics.push(Diagnostic::new(
                keyword.line,
                keyword.column,
                "package definition requires at least one file rule",
            ));
        }

        PackageDef {
            pattern,
            files,
            line: keyword.line,
            column: keyword.column,
        }
    }

    /// Parse an alternation, ending at a definition-level token. Grouping
    /// is handled by pushing and popping frames.
    fn alternatives(&mut self) -> Alternatives {
        let mut stack = vec![Frame::new(None)];

        loop {
            let Some(token) = self.peek_cloned() else { break };
            match token.kind {
                TokenKind::Quote => {
                    let expr = self.string_expression();
                    if let Some(frame) = stack.last_mut() {
                        frame.push_expr(Expression::Literal(expr));
                    }
                }
                TokenKind::GroupStart => {
                    let text = self.char_group();
                    if let Some(frame) = stack.last_mut() {
                        frame.push_expr(Expression::CharGroup(text));
                    }
                }
                TokenKind::Wildcard => {
                    self.pos += 1;
                    if let Some(frame) = stack.last_mut() {
                        frame.push_expr(Expression::Wildcard);
                    }
                }
                TokenKind::LeftParen => {
                    self.pos += 1;
                    stack.push(Frame::new(Some((token.line, token.column))));
                }
                TokenKind::RightParen => {
                    self.pos += 1;
                    if stack.len() == 1 {
                        self.diagnostics.push(Diagnostic::new(
                            token.line,
                            token.column,
                            "unmatched ')'",
                        ));
                    } else if let Some(frame) = stack.pop() {
                        let alternatives = frame.finish(&mut self.diagnostics);
                        if alternatives.options.is_empty() {
                            self.diagnostics.push(Diagnostic::new(
                                token.line,
                                token.column,
                                "empty group expression",
                            ));
                        }
                        if let Some(parent) = stack.last_mut() {
                            parent.push_expr(Expression::Grouped(alternatives));
                        }
                    }
                }
                TokenKind::Pipe => {
                    self.pos += 1;
                    if let Some(frame) = stack.last_mut() {
                        if frame.current.is_empty() {
                            self.diagnostics.push(Diagnostic::new(
                                token.line,
                                token.column,
                                "empty alternative before '|'",
                            ));
                        } else {
                            frame.end_option();
                        }
                        frame.pending_pipe = Some((token.line, token.column));
                    }
                }
                TokenKind::Multiplier => {
                    self.pos += 1;
                    let attached = stack
                        .last_mut()
                        .and_then(|frame| frame.current.last_mut())
                        .filter(|last| last.multiplier.is_none())
                        .map(|last| {
                            last.multiplier = Multiplier::from_token_text(&token.text);
                        })
                        .is_some();
                    if !attached {
                        self.diagnostics.push(Diagnostic::new(
                            token.line,
                            token.column,
                            format!("dangling multiplier '{}'", token.text),
                        ));
                    }
                }
                TokenKind::LeftBrace
                | TokenKind::RightBrace
                | TokenKind::Package
                | TokenKind::File => break,
                _ => {
                    self.pos += 1;
                    self.diagnostics.push(Diagnostic::new(
                        token.line,
                        token.column,
                        format!("unexpected token '{}'", token.text),
                    ));
                }
            }
        }

        while stack.len() > 1 {
            if let Some(frame) = stack.pop() {
                if let Some((line, column)) = frame.opened_at {
                    self.diagnostics.push(Diagnostic::new(
                        line,
                        column,
                        "unclosed group, expected ')'",
                    ));
                }
                let alternatives = frame.finish(&mut self.diagnostics);
                if let Some(parent) = stack.last_mut() {
                    parent.push_expr(Expression::Grouped(alternatives));
                }
            }
        }

        match stack.pop() {
            Some(root) => root.finish(&mut self.diagnostics),
            None => Alternatives::default(),
        }
    }

    /// Consume `"` … `"`; the lexer has already diagnosed unterminated
    /// strings, so a missing closing quote just ends the expression.
    fn string_expression(&mut self) -> StringExpr {
        self.pos += 1;
        let mut parts = Vec::new();
        loop {
            let Some(token) = self.peek_cloned() else { break };
            match token.kind {
                TokenKind::LiteralText => {
                    self.pos += 1;
                    parts.push(StringPart::Literal(token.text));
                }
                TokenKind::Placeholder => {
                    self.pos += 1;
                    let name = token.text[1..token.text.len() - 1].to_string();
                    parts.push(StringPart::Placeholder {
                        name,
                        line: token.line,
                        column: token.column,
                    });
                }
                TokenKind::Quote => {
                    self.pos += 1;
                    break;
                }
                _ => break,
            }
        }
        StringExpr { parts }
    }

    /// Reassemble a bracket expression verbatim from its group tokens.
    fn char_group(&mut self) -> String {
        self.pos += 1;
        let mut text = String::from("[");
        loop {
            let Some(token) = self.peek_cloned() else { break };
            match token.kind {
                TokenKind::GroupChar | TokenKind::GroupRange => {
                    self.pos += 1;
                    text.push_str(&token.text);
                }
                TokenKind::GroupEnd => {
                    self.pos += 1;
                    text.push(']');
                    break;
                }
                _ => break,
            }
        }
        text
    }
}
