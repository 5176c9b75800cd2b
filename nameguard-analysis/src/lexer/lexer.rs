//! Hand-written scanner over definition text.
//!
//! Besides the default mode there are two lexical sub-modes: string mode
//! between quotes (emitting literal-text and placeholder tokens) and
//! character-group mode between brackets (emitting range and character
//! tokens verbatim, with a backslash escaping the next character).
//! Unrecognized input becomes a diagnostic and scanning continues, so all
//! lexical problems in one source are reported together.

use nameguard_core::Diagnostic;

use super::token::{Token, TokenKind};

pub struct Lexer<'src> {
    src: &'src str,
    pos: usize,
    line: u32,
    column: u32,
    tokens: Vec<Token>,
    diagnostics: Vec<Diagnostic>,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            src: source,
            pos: 0,
            line: 1,
            column: 0,
            tokens: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Tokenize the whole input, collecting diagnostics instead of
    /// aborting on bad input.
    pub fn tokenize(mut self) -> (Vec<Token>, Vec<Diagnostic>) {
        while let Some(c) = self.peek() {
            match c {
                '#' => self.skip_comment(),
                c if c.is_whitespace() => {
                    self.bump();
                }
                '{' => self.punct(TokenKind::LeftBrace),
                '}' => self.punct(TokenKind::RightBrace),
                '(' => self.punct(TokenKind::LeftParen),
                ')' => self.punct(TokenKind::RightParen),
                '|' => self.punct(TokenKind::Pipe),
                '*' | '+' | '?' => self.multiplier(),
                '.' => self.punct(TokenKind::Wildcard),
                '"' => self.string_mode(),
                '[' => self.group_mode(),
                c if c.is_alphabetic() || c == '_' => self.word(),
                other => {
                    self.diagnostics.push(Diagnostic::new(
                        self.line,
                        self.column,
                        format!("unrecognized character '{other}'"),
                    ));
                    self.bump();
                }
            }
        }
        (self.tokens, self.diagnostics)
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn peek_second(&self) -> Option<char> {
        self.src[self.pos..].chars().nth(1)
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn skip_comment(&mut self) {
        while let Some(c) = self.peek() {
            if c == '\n' {
                break;
            }
            self.bump();
        }
    }

    fn punct(&mut self, kind: TokenKind) {
        let (line, column) = (self.line, self.column);
        if let Some(c) = self.bump() {
            self.tokens.push(Token::new(kind, c.to_string(), line, column));
        }
    }

    fn multiplier(&mut self) {
        let (line, column) = (self.line, self.column);
        let Some(first) = self.bump() else { return };
        let mut text = String::from(first);
        if self.peek() == Some('?') {
            self.bump();
            text.push('?');
        }
        self.tokens
            .push(Token::new(TokenKind::Multiplier, text, line, column));
    }

    fn word(&mut self) {
        let (line, column) = (self.line, self.column);
        let mut text = String::new();
        while let Some(c) = self.peek() {
            if c.is_alphanumeric() || c == '_' {
                text.push(c);
                self.bump();
            } else {
                break;
            }
        }
        match text.as_str() {
            "package" => self
                .tokens
                .push(Token::new(TokenKind::Package, text, line, column)),
            "file" => self
                .tokens
                .push(Token::new(TokenKind::File, text, line, column)),
            _ => self.diagnostics.push(Diagnostic::new(
                line,
                column,
                format!("unexpected input '{text}'"),
            )),
        }
    }

    /// String mode: from the opening quote to the matching quote.
    /// A newline or end-of-input before the closing quote is an error.
    fn string_mode(&mut self) {
        let (line, column) = (self.line, self.column);
        self.bump();
        self.tokens
            .push(Token::new(TokenKind::Quote, "\"", line, column));

        loop {
            match self.peek() {
                None | Some('\n') => {
                    self.diagnostics.push(Diagnostic::new(
                        line,
                        column,
                        "unterminated string literal".to_string(),
                    ));
                    return;
                }
                Some('"') => {
                    let (l, c) = (self.line, self.column);
                    self.bump();
                    self.tokens.push(Token::new(TokenKind::Quote, "\"", l, c));
                    return;
                }
                Some('%') => self.placeholder(),
                Some(_) => self.literal_text(),
            }
        }
    }

    fn literal_text(&mut self) {
        let (line, column) = (self.line, self.column);
        let mut text = String::new();
        while let Some(c) = self.peek() {
            if c == '"' || c == '%' || c == '\n' {
                break;
            }
            text.push(c);
            self.bump();
        }
        self.tokens
            .push(Token::new(TokenKind::LiteralText, text, line, column));
    }

    fn placeholder(&mut self) {
        let (line, column) = (self.line, self.column);
        self.bump();
        let mut name = String::new();
        loop {
            match self.peek() {
                Some('%') => {
                    self.bump();
                    self.tokens.push(Token::new(
                        TokenKind::Placeholder,
                        format!("%{name}%"),
                        line,
                        column,
                    ));
                    return;
                }
                None | Some('\n') | Some('"') => {
                    self.diagnostics.push(Diagnostic::new(
                        line,
                        column,
                        "unterminated placeholder".to_string(),
                    ));
                    return;
                }
                Some(c) => {
                    name.push(c);
                    self.bump();
                }
            }
        }
    }

    /// Character-group mode: from `[` to `]`, tokens copied verbatim.
    fn group_mode(&mut self) {
        let (line, column) = (self.line, self.column);
        self.bump();
        self.tokens
            .push(Token::new(TokenKind::GroupStart, "[", line, column));

        loop {
            match self.peek() {
                None | Some('\n') => {
                    self.diagnostics.push(Diagnostic::new(
                        line,
                        column,
                        "unterminated character group".to_string(),
                    ));
                    return;
                }
                Some(']') => {
                    let (l, c) = (self.line, self.column);
                    self.bump();
                    self.tokens.push(Token::new(TokenKind::GroupEnd, "]", l, c));
                    return;
                }
                Some('\\') => {
                    let (l, c) = (self.line, self.column);
                    self.bump();
                    match self.bump() {
                        Some(escaped) => self.tokens.push(Token::new(
                            TokenKind::GroupChar,
                            format!("\\{escaped}"),
                            l,
                            c,
                        )),
                        None => {
                            self.diagnostics.push(Diagnostic::new(
                                line,
                                column,
                                "unterminated character group".to_string(),
                            ));
                            return;
                        }
                    }
                }
                Some(first) => {
                    let (l, c) = (self.line, self.column);
                    self.bump();
                    let is_range = self.peek() == Some('-')
                        && self
                            .peek_second()
                            .map_or(false, |next| next != ']' && next != '\n');
                    if is_range {
                        self.bump();
                        let mut text = format!("{first}-");
                        if self.peek() == Some('\\') {
                            self.bump();
                            if let Some(end) = self.bump() {
                                text.push('\\');
                                text.push(end);
                            }
                        } else if let Some(end) = self.bump() {
                            text.push(end);
                        }
                        self.tokens
                            .push(Token::new(TokenKind::GroupRange, text, l, c));
                    } else {
                        self.tokens
                            .push(Token::new(TokenKind::GroupChar, first.to_string(), l, c));
                    }
                }
            }
        }
    }
}
