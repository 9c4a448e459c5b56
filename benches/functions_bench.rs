// Criterion benchmark suite for the bolt-on functions.
//
// Run: cargo bench
// Specific group: cargo bench -- regexp
// HTML report: target/criterion/report/index.html

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use bolton::flags::strip_extended;
use bolton::prelude::*;

// ---------------------------------------------------------------------------
// 1. rewrite -- free-spacing preprocessing only
// ---------------------------------------------------------------------------

fn bench_rewrite(c: &mut Criterion) {
    let patterns: &[(&str, &str)] = &[
        ("plain", r"\d{4}-\d{2}-\d{2}"),
        ("spaced", r"\d{4} - \d{2} - \d{2}"),
        ("class", "[a-z ]+ [#0-9 ]*"),
        (
            "commented",
            "# year\n\\d{4}\n# separator\n-\n# month\n\\d{2}\n# day\n-\\d{2}",
        ),
    ];

    let mut group = c.benchmark_group("rewrite");
    for (name, pat) in patterns {
        group.bench_with_input(BenchmarkId::from_parameter(name), pat, |b, pat| {
            b.iter(|| black_box(strip_extended(black_box(pat))));
        });
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// 2. regexp -- per-call compile + search
// ---------------------------------------------------------------------------

fn bench_regexp(c: &mut Criterion) {
    let config = EngineConfig::default();
    let haystack = "The quick brown fox jumps over the lazy dog on 2026-10-17.";
    let cases: &[(&str, &str, Option<&str>)] = &[
        ("literal", "lazy", None),
        ("date", r"\d{4}-\d{2}-\d{2}", None),
        ("icase", "QUICK", Some("i")),
        ("extended", r"\d{4} - \d{2} # trailing", Some("x")),
    ];

    let mut group = c.benchmark_group("regexp");
    for (name, pat, flags) in cases {
        group.bench_function(BenchmarkId::from_parameter(name), |b| {
            b.iter(|| {
                is_match(
                    black_box(Some(*pat)),
                    black_box(Some(haystack)),
                    *flags,
                    &config,
                )
                .unwrap()
            });
        });
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// 3. regex_replace and levenshtein through the registry
// ---------------------------------------------------------------------------

fn bench_registry(c: &mut Criterion) {
    let registry = FunctionRegistry::with_bolt_on_functions(EngineConfig::default());
    let replace_args = [
        Value::from("Cherry Pepper and Apple pie"),
        Value::from("p+"),
        Value::from("P"),
        Value::from("i"),
    ];
    let distance_args = [Value::from("kitten sitting"), Value::from("sitting kitten")];

    let mut group = c.benchmark_group("registry");
    group.bench_function("regex_replace", |b| {
        b.iter(|| registry.call("regex_replace", black_box(&replace_args)).unwrap());
    });
    group.bench_function("levenshtein", |b| {
        b.iter(|| registry.call("levenshtein", black_box(&distance_args)).unwrap());
    });
    group.finish();
}

criterion_group!(benches, bench_rewrite, bench_regexp, bench_registry);
criterion_main!(benches);
