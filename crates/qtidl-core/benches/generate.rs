//! Benchmarks for parsing and header generation.

use criterion::{Criterion, criterion_group, criterion_main};
use qtidl_core::{generate, parse};
use std::hint::black_box;

fn sample_source(classes: usize) -> String {
    let mut source = String::from("include \"QObject\"\ninclude \"QColor\"\n");
    for i in 0..classes {
        source.push_str(&format!(
            r#"
Item{i} {{
    function
        "refresh()" : "void"
        "lookup(const QString &key) const" : "QVariant"
    signal
        "activated(int index)"
    QString display_name
    QColor background
    qint64 item_id
    bool is_enabled
}}
"#
        ));
    }
    source
}

fn bench_parse(c: &mut Criterion) {
    let source = sample_source(100);
    c.bench_function("parse_100_classes", |b| {
        b.iter(|| parse(black_box(&source)))
    });
}

fn bench_generate(c: &mut Criterion) {
    let source = sample_source(100);
    let Ok(document) = parse(&source) else {
        panic!("benchmark source must parse");
    };
    c.bench_function("generate_100_classes", |b| {
        b.iter(|| generate(black_box(&document)))
    });
}

criterion_group!(benches, bench_parse, bench_generate);
criterion_main!(benches);
