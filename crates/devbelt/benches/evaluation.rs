//! Evaluation pipeline benchmarks.
#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use devbelt::playground::presets::{DEFAULT_FLAGS, DEFAULT_PATTERN};
use devbelt::{CompiledMatcher, Flags, Limits, build_segments, evaluate, render_plain};

fn bench_compile(c: &mut Criterion) {
    c.bench_function("compile_email_pattern", |b| {
        b.iter(|| CompiledMatcher::compile(black_box(DEFAULT_PATTERN), DEFAULT_FLAGS));
    });
}

fn bench_evaluate_small(c: &mut Criterion) {
    let text = "Contact us at support@example.com or sales@example.co.uk";

    c.bench_function("evaluate_email_sample", |b| {
        b.iter(|| evaluate(DEFAULT_PATTERN, DEFAULT_FLAGS, black_box(text), &Limits::default()));
    });
}

fn bench_evaluate_text_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate_digits");

    for size in &[64, 512, 4096] {
        let text = "lorem 42 ipsum 12345 dolor ".repeat(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| evaluate(r"\d+", Flags::GLOBAL, black_box(&text), &Limits::default()));
        });
    }

    group.finish();
}

fn bench_segments_and_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("rendering");

    let text = "lorem 42 ipsum 12345 dolor ".repeat(512);
    let result = evaluate(r"\d+", Flags::GLOBAL, &text, &Limits::default());

    group.bench_function("build_segments", |b| {
        b.iter(|| build_segments(black_box(&text), black_box(&result.matches)));
    });

    let segments = result.segments();
    group.bench_function("render_plain", |b| {
        b.iter(|| render_plain(black_box(&segments)));
    });

    group.finish();
}

fn bench_zero_width_enumeration(c: &mut Criterion) {
    let text = "abcdefgh".repeat(64);

    c.bench_function("zero_width_global", |b| {
        b.iter(|| evaluate("x*", Flags::GLOBAL, black_box(&text), &Limits::default()));
    });
}

criterion_group!(
    benches,
    bench_compile,
    bench_evaluate_small,
    bench_evaluate_text_sizes,
    bench_segments_and_render,
    bench_zero_width_enumeration,
);
criterion_main!(benches);
