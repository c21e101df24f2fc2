use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use sparql_linter::{apply_fixes, lint, lint_with_config, LintConfig, RuleSeverity};
use sparql_test_utils::fixtures::{large_select, BROKEN_QUERY, CONSTRUCT_QUERY, SELECT_QUERY};
use std::hint::black_box;

fn bench_lint_clean(c: &mut Criterion) {
    c.bench_function("lint_clean_select", |b| {
        b.iter(|| lint(black_box(SELECT_QUERY)));
    });
    c.bench_function("lint_clean_construct", |b| {
        b.iter(|| lint(black_box(CONSTRUCT_QUERY)));
    });
}

fn bench_lint_broken(c: &mut Criterion) {
    c.bench_function("lint_broken", |b| {
        b.iter(|| lint(black_box(BROKEN_QUERY)));
    });
}

fn bench_lint_large(c: &mut Criterion) {
    let mut group = c.benchmark_group("lint_large_select");
    for patterns in [100, 1_000, 10_000] {
        let source = large_select(patterns);
        group.bench_with_input(BenchmarkId::from_parameter(patterns), &source, |b, source| {
            b.iter(|| lint(black_box(source)));
        });
    }
    group.finish();
}

fn bench_lint_single_rule(c: &mut Criterion) {
    // Only the brace check stays on
    let config = [
        "prefix_name_colon",
        "prefix_iri_brackets",
        "missing_query_form",
        "select_without_where",
        "unclosed_iri",
        "triple_separator",
    ]
    .into_iter()
    .fold(LintConfig::recommended(), |config, rule| {
        config.with_rule(rule, RuleSeverity::Off)
    });
    let source = large_select(1_000);

    c.bench_function("lint_unbalanced_braces_only", |b| {
        b.iter(|| lint_with_config(black_box(&source), &config));
    });
}

fn bench_apply_fixes(c: &mut Criterion) {
    let diagnostics = lint(BROKEN_QUERY);
    c.bench_function("apply_fixes_broken", |b| {
        b.iter(|| apply_fixes(black_box(BROKEN_QUERY), black_box(&diagnostics)));
    });
}

criterion_group!(
    benches,
    bench_lint_clean,
    bench_lint_broken,
    bench_lint_large,
    bench_lint_single_rule,
    bench_apply_fixes,
);
criterion_main!(benches);
