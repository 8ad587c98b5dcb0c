// benches/error_performance.rs
//! Benchmarks for attr_errors performance characteristics
//!
//! Covers classification, template derivation, rendering of cause chains and
//! the structured log view.

use attr_errors::{
    Classifier, Code, DebugFormatter, Detail, Error, Function, Kind, Module, NOT_FOUND, Object,
    Operation, Template, TruncatingFormatter, attrs, e, t,
};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use std::io;

fn chain_of(depth: usize) -> Error {
    let mut err = e!(Kind::new("leaf kind"), "leaf");
    for level in 1..depth {
        err = e!(
            Module::new("bench"),
            Function::new("nested"),
            Kind::new("wrapped"),
            Detail::value(level),
            err,
        );
    }
    err
}

// ============================================================================
// CLASSIFICATION BENCHMARKS
// ============================================================================

fn bench_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("classification");

    group.bench_function("empty", |b| {
        b.iter(|| black_box(e!()));
    });

    group.bench_function("static_attributes", |b| {
        b.iter(|| {
            black_box(e!(
                Module::from_static("storage"),
                Function::from_static("load"),
                Operation::from_static("open"),
                NOT_FOUND,
            ))
        });
    });

    group.bench_function("text_details", |b| {
        b.iter(|| black_box(e!("first", "second", "third", "fourth")));
    });

    group.bench_function("value_details", |b| {
        b.iter(|| black_box(e!(1u32, 2.5f64, true, 'x')));
    });

    group.bench_function("foreign_cause", |b| {
        b.iter(|| black_box(e!(Kind::new("wrapper"), io::Error::other("disk full"))));
    });

    for count in [1usize, 4, 16, 64] {
        group.bench_with_input(BenchmarkId::new("details", count), &count, |b, &count| {
            b.iter(|| black_box(e((0..count).map(Detail::value))));
        });
    }

    group.finish();
}

fn bench_formatters(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatters");
    let long = "x".repeat(4096);

    group.bench_function("display", |b| {
        let classifier = Classifier::new();
        b.iter(|| black_box(classifier.error(attrs![Detail::value(long.clone())])));
    });

    group.bench_function("debug", |b| {
        let classifier = Classifier::with_formatter(DebugFormatter);
        b.iter(|| black_box(classifier.error(attrs![Detail::value(long.clone())])));
    });

    group.bench_function("truncating", |b| {
        let classifier = Classifier::with_formatter(TruncatingFormatter::new(256));
        b.iter(|| black_box(classifier.error(attrs![Detail::value(long.clone())])));
    });

    group.finish();
}

// ============================================================================
// TEMPLATE BENCHMARKS
// ============================================================================

fn bench_templates(c: &mut Criterion) {
    let mut group = c.benchmark_group("templates");
    let etpl = t!(
        Module::from_static("example"),
        Function::from_static("handler"),
        Object::from_static("test"),
        "shared context",
    );

    group.bench_function("derive_error", |b| {
        b.iter(|| {
            black_box(etpl.e(attrs![
                Operation::from_static("compare"),
                Kind::from_static("not equal"),
                Code::from_static("E456"),
            ]))
        });
    });

    group.bench_function("derive_template", |b| {
        b.iter(|| black_box(etpl.t(attrs![Object::from_static("other")])));
    });

    group.bench_function("const_template", |b| {
        static EMPTY: Template = Template::new();
        b.iter(|| black_box(EMPTY.e(["detail"])));
    });

    group.finish();
}

// ============================================================================
// RENDERING BENCHMARKS
// ============================================================================

fn bench_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("rendering");

    for depth in [1usize, 2, 8, 32] {
        let err = chain_of(depth);
        group.bench_with_input(BenchmarkId::new("chain_depth", depth), &err, |b, err| {
            b.iter(|| black_box(err.to_string()));
        });
    }

    let foreign = e!(Kind::new("wrapper"), io::Error::other("other error"));
    group.bench_function("foreign_leaf", |b| {
        b.iter(|| black_box(foreign.to_string()));
    });

    group.finish();
}

fn bench_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("logging");
    let err = chain_of(4);

    group.bench_function("write_to", |b| {
        let mut buffer = String::with_capacity(256);
        b.iter(|| {
            buffer.clear();
            err.log_entry().write_to(&mut buffer).unwrap();
            black_box(buffer.len())
        });
    });

    group.bench_function("chain_walk", |b| {
        b.iter(|| black_box(err.chain().count()));
    });

    group.finish();
}

criterion_group!(classification_benches, bench_classification, bench_formatters);
criterion_group!(template_benches, bench_templates);
criterion_group!(render_benches, bench_rendering, bench_logging);

criterion_main!(classification_benches, template_benches, render_benches);
