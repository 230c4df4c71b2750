//! Recursive descent parser for qtidl
//!
//! Grammar:
//!
//! ```text
//! Document     := Include* TypeDecl*
//! Include      := "include" String
//! TypeDecl     := Ident "{" "function" FunctionDecl* ["signal"] SignalDecl* PropertyDecl* "}"
//! FunctionDecl := String ":" String
//! SignalDecl   := String
//! PropertyDecl := PropertyType Ident
//! ```
//!
//! Inside a class body each entry is tried as a function, then a signal, then
//! a property, and the first alternative that matches wins. A function is
//! recognized by a string literal directly followed by `:`, so two tokens of
//! lookahead are enough and nothing already consumed is ever given back.
//!
//! The class body owns its closing brace: properties are `Type name` pairs and
//! exactly one `}` ends the declaration.

use crate::ast::{Document, FunctionDecl, Include, PropertyDecl, SignalDecl, TypeDecl};
use crate::error::{ParseResult, SyntaxError};
use crate::lexer::{Lexer, Token, TokenKind};
use crate::property_type::PropertyType;
use tracing::{debug, trace};

const INCLUDE: &str = "include";
const FUNCTION: &str = "function";
const SIGNAL: &str = "signal";

/// Parse IDL text into a [`Document`].
///
/// Fails on the first token that does not fit the grammar.
pub fn parse(source: &str) -> ParseResult<Document> {
    Parser::new(source)?.parse_document()
}

/// Parser over a pre-tokenized input.
pub struct Parser {
    tokens: Vec<Token>,
    position: usize,
}

impl Parser {
    /// Tokenize `source`. Lexical errors are reported here.
    pub fn new(source: &str) -> ParseResult<Self> {
        let tokens = Lexer::new(source).tokenize()?;
        Ok(Self {
            tokens,
            position: 0,
        })
    }

    /// Parse the whole input: all includes, then all type declarations.
    pub fn parse_document(&mut self) -> ParseResult<Document> {
        let mut document = Document::default();

        while self.at_keyword(INCLUDE) {
            document.includes.push(self.parse_include()?);
        }

        while !self.at_end() {
            document.types.push(self.parse_type_decl()?);
        }

        debug!(
            includes = document.includes.len(),
            types = document.types.len(),
            "parsed document"
        );

        Ok(document)
    }

    fn parse_include(&mut self) -> ParseResult<Include> {
        self.advance();
        let path = self.expect_string("header path string after `include`")?;
        Ok(Include { path })
    }

    fn parse_type_decl(&mut self) -> ParseResult<TypeDecl> {
        if self.at_keyword(INCLUDE) {
            return Err(self.unexpected("type declaration (includes must come before all types)"));
        }

        let name = self.expect_ident("type name")?;
        self.expect(&TokenKind::LBrace, "'{'")?;
        self.expect_keyword(FUNCTION)?;

        let mut decl = TypeDecl::new(name);

        while self.at_function() {
            decl.functions.push(self.parse_function()?);
        }

        if self.at_keyword(SIGNAL) {
            self.advance();
        }

        while let TokenKind::Str(_) = self.peek().kind {
            let signature = self.expect_string("signal signature")?;
            decl.signals.push(SignalDecl { signature });
        }

        while let TokenKind::Ident(_) = self.peek().kind {
            decl.properties.push(self.parse_property()?);
        }

        self.expect(&TokenKind::RBrace, "property type or '}'")?;

        trace!(
            name = %decl.name,
            functions = decl.functions.len(),
            signals = decl.signals.len(),
            properties = decl.properties.len(),
            "parsed type"
        );

        Ok(decl)
    }

    fn parse_function(&mut self) -> ParseResult<FunctionDecl> {
        let signature = self.expect_string("function signature")?;
        self.expect(&TokenKind::Colon, "':'")?;
        let return_type = self.expect_string("return type string")?;
        Ok(FunctionDecl {
            signature,
            return_type,
        })
    }

    fn parse_property(&mut self) -> ParseResult<PropertyDecl> {
        let ty = match &self.peek().kind {
            TokenKind::Ident(keyword) => PropertyType::from_keyword(keyword),
            _ => None,
        };
        let Some(ty) = ty else {
            return Err(self.unexpected("property type"));
        };
        self.advance();

        let name = self.expect_ident("property name")?;
        Ok(PropertyDecl { ty, name })
    }

    /// A function entry starts with a string immediately followed by `:`.
    fn at_function(&self) -> bool {
        matches!(self.peek().kind, TokenKind::Str(_))
            && matches!(self.peek_nth(1).kind, TokenKind::Colon)
    }

    fn at_keyword(&self, keyword: &str) -> bool {
        matches!(&self.peek().kind, TokenKind::Ident(name) if name == keyword)
    }

    fn at_end(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    fn peek(&self) -> &Token {
        self.peek_nth(0)
    }

    fn peek_nth(&self, n: usize) -> &Token {
        // The token list always ends with Eof, which absorbs any overshoot.
        let last = self.tokens.len() - 1;
        &self.tokens[(self.position + n).min(last)]
    }

    fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if token.kind != TokenKind::Eof {
            self.position += 1;
        }
        token
    }

    fn expect(&mut self, kind: &TokenKind, expected: &str) -> ParseResult<Token> {
        if &self.peek().kind == kind {
            Ok(self.advance())
        } else {
            Err(self.unexpected(expected))
        }
    }

    fn expect_keyword(&mut self, keyword: &str) -> ParseResult<()> {
        if self.at_keyword(keyword) {
            self.advance();
            Ok(())
        } else {
            Err(self.unexpected(&format!("keyword `{keyword}`")))
        }
    }

    fn expect_ident(&mut self, expected: &str) -> ParseResult<String> {
        match &self.peek().kind {
            TokenKind::Ident(name) => {
                let name = name.clone();
                self.advance();
                Ok(name)
            }
            _ => Err(self.unexpected(expected)),
        }
    }

    fn expect_string(&mut self, expected: &str) -> ParseResult<String> {
        match &self.peek().kind {
            TokenKind::Str(value) => {
                let value = value.clone();
                self.advance();
                Ok(value)
            }
            _ => Err(self.unexpected(expected)),
        }
    }

    fn unexpected(&self, expected: &str) -> SyntaxError {
        let token = self.peek();
        SyntaxError::new(token.position, expected, token.kind.describe())
    }
}
