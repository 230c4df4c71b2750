//! C++ header generation from a parsed [`Document`].
//!
//! Output for one property `qint32 count`, one function and one signal:
//!
//! ```text
//! #pragma once
//! #include "QObject"
//!
//! class Foo : public QObject {
//!     Q_OBJECT
//! public:
//!     explicit Foo(QObject *parent = nullptr);
//!     Q_PROPERTY(qint32 count MEMBER m_count NOTIFY countChanged)
//!
//!     Q_INVOKABLE void doThing(int);
//!
//! signals:
//!     void countChanged(qint32 val);
//!
//!     void somethingHappened();
//!
//! private:
//!     qint32 m_count;
//! };
//! ```
//!
//! Members are indented with a tab. Every sequence is emitted in declaration
//! order and nothing is inferred from signature or type contents.

use crate::ast::{Document, TypeDecl};
use crate::naming::{backing_field_name, notify_signal_name};
use tracing::debug;

const PRAGMA: &str = "#pragma once";
const BASE_CLASS: &str = "QObject";
const META_OBJECT_MARKER: &str = "Q_OBJECT";
const NOTIFY_PARAMETER: &str = "val";

/// Render a document as header text. Lines end with `\n`.
pub fn generate(document: &Document) -> String {
    let mut output = String::new();
    for line in generate_lines(document) {
        output.push_str(&line);
        output.push('\n');
    }
    output
}

/// Render a document as a sequence of header lines without terminators.
pub fn generate_lines(document: &Document) -> Vec<String> {
    let mut writer = HeaderWriter::default();

    writer.line(PRAGMA);
    for include in &document.includes {
        writer.line(format!("#include \"{}\"", include.path));
    }
    writer.blank();

    for decl in &document.types {
        write_class(&mut writer, decl);
    }

    debug!(
        types = document.types.len(),
        lines = writer.lines.len(),
        "generated header"
    );

    writer.lines
}

fn write_class(writer: &mut HeaderWriter, decl: &TypeDecl) {
    let name = &decl.name;

    writer.line(format!("class {name} : public {BASE_CLASS} {{"));
    writer.member(META_OBJECT_MARKER);

    // Public section: constructor, properties, invokables
    writer.line("public:");
    writer.member(format!("explicit {name}({BASE_CLASS} *parent = nullptr);"));
    for property in &decl.properties {
        writer.member(format!(
            "Q_PROPERTY({} {} MEMBER {} NOTIFY {})",
            property.ty,
            property.name,
            backing_field_name(&property.name),
            notify_signal_name(&property.name)
        ));
    }
    writer.blank();
    for function in &decl.functions {
        writer.member(format!(
            "Q_INVOKABLE {} {};",
            function.return_type, function.signature
        ));
    }

    // Signals: property notifications first, then declared signals
    writer.blank();
    writer.line("signals:");
    for property in &decl.properties {
        writer.member(format!(
            "void {}({} {NOTIFY_PARAMETER});",
            notify_signal_name(&property.name),
            property.ty
        ));
    }
    writer.blank();
    for signal in &decl.signals {
        writer.member(format!("void {};", signal.signature));
    }

    writer.blank();
    writer.line("private:");
    for property in &decl.properties {
        writer.member(format!(
            "{} {};",
            property.ty,
            backing_field_name(&property.name)
        ));
    }
    writer.line("};");
}

#[derive(Default)]
struct HeaderWriter {
    lines: Vec<String>,
}

impl HeaderWriter {
    fn line(&mut self, text: impl Into<String>) {
        self.lines.push(text.into());
    }

    fn member(&mut self, text: impl AsRef<str>) {
        self.lines.push(format!("\t{}", text.as_ref()));
    }

    fn blank(&mut self) {
        self.lines.push(String::new());
    }
}
