//! qtidl-core - Parser and header generator for the qtidl IDL
//!
//! This crate turns a compact interface description into the C++ declaration
//! of a Qt meta-object class:
//! - [`parse`] reads IDL text into a [`Document`]
//! - [`generate`] renders a [`Document`] as header text
//! - [`compile`] runs both steps
//!
//! ```text
//! IDL text
//!     ↓
//!  [Lexer] → [Parser]
//!     ↓
//!  Document (AST)
//!     ↓
//!  [Generator] → header text
//! ```
//!
//! # Example
//!
//! ```
//! let header = qtidl_core::compile(r#"
//!     include "QObject"
//!     Counter {
//!         function "reset()" : "void"
//!         signal "overflowed()"
//!         qint32 count
//!     }
//! "#).unwrap();
//!
//! assert!(header.contains("Q_PROPERTY(qint32 count MEMBER m_count NOTIFY countChanged)"));
//! assert!(header.contains("\tQ_INVOKABLE void reset();"));
//! ```

pub mod ast;
mod error;
pub mod generator;
pub mod lexer;
pub mod naming;
pub mod parser;
mod property_type;

pub use ast::{Document, FunctionDecl, Include, PropertyDecl, SignalDecl, TypeDecl};
pub use error::{ParseResult, SyntaxError, UnknownPropertyType};
pub use generator::{generate, generate_lines};
pub use lexer::Position;
pub use parser::parse;
pub use property_type::PropertyType;

/// Parse IDL text and render it as a C++ header in one step.
///
/// No output is produced when the text fails to parse.
pub fn compile(source: &str) -> ParseResult<String> {
    let document = parse(source)?;
    Ok(generate(&document))
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Document, PropertyType, SyntaxError, TypeDecl, compile, generate, parse,
    };
}
