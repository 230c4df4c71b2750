//! Lexer (tokenizer) for qtidl source text
//!
//! Converts raw IDL text into a flat [`Token`] stream consumed by the parser.
//! Whitespace, newlines and Go-style comments (`//` and `/* */`) separate
//! tokens and are otherwise ignored.
//!
//! String literals come in two forms:
//! - `"..."` on a single line. Backslash escapes are kept verbatim, so `\"`
//!   does not end the literal and is captured as the two characters `\"`.
//! - `` `...` `` raw strings, which may span lines and have no escapes.
//!
//! In both cases the token holds the text between the delimiters.

use crate::error::{ParseResult, SyntaxError};
use std::fmt;

/// A location in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Byte offset from the start of the input
    pub offset: usize,
    /// 1-based line number
    pub line: usize,
    /// 1-based column, counted in characters
    pub column: usize,
}

impl Position {
    pub fn new(offset: usize, line: usize, column: usize) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(0, 1, 1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Token variants produced by the lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// Identifier or keyword (`include`, `function`, `signal` and the
    /// property type names are recognized by the parser, not here)
    Ident(String),
    /// String literal contents without delimiters
    Str(String),
    Colon,
    LBrace,
    RBrace,
    Eof,
}

impl TokenKind {
    /// Human-readable description used in error messages.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Ident(name) => format!("identifier `{name}`"),
            TokenKind::Str(value) => format!("string \"{value}\""),
            TokenKind::Colon => "':'".to_string(),
            TokenKind::LBrace => "'{'".to_string(),
            TokenKind::RBrace => "'}'".to_string(),
            TokenKind::Eof => "end of input".to_string(),
        }
    }
}

/// A token together with the position of its first character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub position: Position,
}

impl Token {
    pub fn new(kind: TokenKind, position: Position) -> Self {
        Self { kind, position }
    }
}

/// Streaming tokenizer over a borrowed source string.
pub struct Lexer<'a> {
    source: &'a str,
    offset: usize,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// Tokenize the whole input. The last token is always [`TokenKind::Eof`].
    pub fn tokenize(&mut self) -> ParseResult<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let at_end = token.kind == TokenKind::Eof;
            tokens.push(token);
            if at_end {
                return Ok(tokens);
            }
        }
    }

    /// Produce the next token, skipping whitespace and comments.
    pub fn next_token(&mut self) -> ParseResult<Token> {
        self.skip_trivia()?;

        let start = self.position();
        let Some(c) = self.peek() else {
            return Ok(Token::new(TokenKind::Eof, start));
        };

        let kind = match c {
            ':' => {
                self.bump();
                TokenKind::Colon
            }
            '{' => {
                self.bump();
                TokenKind::LBrace
            }
            '}' => {
                self.bump();
                TokenKind::RBrace
            }
            '"' => self.quoted_string(start)?,
            '`' => self.raw_string(start)?,
            c if is_ident_start(c) => self.identifier(),
            other => {
                return Err(SyntaxError::new(
                    start,
                    "identifier, string literal, ':', '{' or '}'",
                    format!("character {other:?}"),
                ));
            }
        };

        Ok(Token::new(kind, start))
    }

    fn position(&self) -> Position {
        Position::new(self.offset, self.line, self.column)
    }

    fn peek(&self) -> Option<char> {
        self.source[self.offset..].chars().next()
    }

    fn peek_second(&self) -> Option<char> {
        let mut rest = self.source[self.offset..].chars();
        rest.next();
        rest.next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.offset += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn skip_trivia(&mut self) -> ParseResult<()> {
        loop {
            match (self.peek(), self.peek_second()) {
                (Some(c), _) if c.is_whitespace() => {
                    self.bump();
                }
                (Some('/'), Some('/')) => {
                    while let Some(c) = self.peek() {
                        if c == '\n' {
                            break;
                        }
                        self.bump();
                    }
                }
                (Some('/'), Some('*')) => {
                    let start = self.position();
                    self.bump();
                    self.bump();
                    loop {
                        match self.bump() {
                            Some('*') if self.peek() == Some('/') => {
                                self.bump();
                                break;
                            }
                            Some(_) => {}
                            None => {
                                return Err(SyntaxError::new(
                                    start,
                                    "'*/' closing the comment",
                                    "end of input",
                                ));
                            }
                        }
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    fn identifier(&mut self) -> TokenKind {
        let begin = self.offset;
        while let Some(c) = self.peek() {
            if !is_ident_continue(c) {
                break;
            }
            self.bump();
        }
        TokenKind::Ident(self.source[begin..self.offset].to_string())
    }

    fn quoted_string(&mut self, start: Position) -> ParseResult<TokenKind> {
        self.bump();
        let begin = self.offset;
        loop {
            match self.peek() {
                Some('"') => {
                    let value = self.source[begin..self.offset].to_string();
                    self.bump();
                    return Ok(TokenKind::Str(value));
                }
                Some('\\') => {
                    self.bump();
                    // The escaped character is kept as written; a newline still ends the line.
                    if matches!(self.peek(), Some(c) if c != '\n') {
                        self.bump();
                    }
                }
                Some('\n') => {
                    return Err(SyntaxError::new(
                        start,
                        "'\"' closing the string literal",
                        "end of line",
                    ));
                }
                None => {
                    return Err(SyntaxError::new(
                        start,
                        "'\"' closing the string literal",
                        "end of input",
                    ));
                }
                Some(_) => {
                    self.bump();
                }
            }
        }
    }

    fn raw_string(&mut self, start: Position) -> ParseResult<TokenKind> {
        self.bump();
        let begin = self.offset;
        loop {
            match self.peek() {
                Some('`') => {
                    let value = self.source[begin..self.offset].to_string();
                    self.bump();
                    return Ok(TokenKind::Str(value));
                }
                Some(_) => {
                    self.bump();
                }
                None => {
                    return Err(SyntaxError::new(
                        start,
                        "'`' closing the raw string literal",
                        "end of input",
                    ));
                }
            }
        }
    }
}

fn is_ident_start(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

fn is_ident_continue(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}
