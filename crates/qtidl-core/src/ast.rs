//! Syntax tree produced by the parser.
//!
//! All nodes are plain owned data. Sequence order is the order of
//! declaration in the source and is kept as-is by the generator.

use crate::property_type::PropertyType;
use serde::Serialize;

/// Top-level parse result: includes first, then type declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    pub includes: Vec<Include>,
    pub types: Vec<TypeDecl>,
}

/// An `include "path"` directive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Include {
    /// Header path as written between the quotes
    pub path: String,
}

/// One generated class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeDecl {
    pub name: String,
    pub functions: Vec<FunctionDecl>,
    pub signals: Vec<SignalDecl>,
    pub properties: Vec<PropertyDecl>,
}

impl TypeDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            functions: Vec::new(),
            signals: Vec::new(),
            properties: Vec::new(),
        }
    }
}

/// An invokable method: `"signature" : "return type"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionDecl {
    /// Declarator including the parameter list, e.g. `doThing(int x)`
    pub signature: String,
    pub return_type: String,
}

/// A user-declared signal. Signals always return `void`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignalDecl {
    pub signature: String,
}

/// A property with a backing field and a change-notification signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyDecl {
    #[serde(rename = "type")]
    pub ty: PropertyType,
    pub name: String,
}
