use criterion::{black_box, criterion_group, criterion_main, Criterion};
use recon_report::output::{render_csv, render_html, render_json, render_terminal, TerminalOptions};
use recon_report::{GroupResult, NamedResult, TestResult, TestResults, Verbosity};

/// Builds a run with `checks` single results and `groups` groups of
/// `members` sub-checks, cycling through every outcome.
fn create_results(checks: usize, groups: usize, members: usize) -> TestResults {
    let leaf = |i: usize| match i % 3 {
        0 => TestResult::pass(),
        1 => TestResult::fail().with_notes(format!("check {} failed on a long line of notes", i)),
        _ => TestResult::skip().with_notes("not applicable"),
    };

    let mut results = TestResults::default();
    results.add_results((0..checks).map(|i| NamedResult::new(format!("check_{}", i), leaf(i))));
    results.add_results((0..groups).map(|g| {
        let mut group = GroupResult::new();
        for m in 0..members {
            group.add_result(format!("member_{}", m), leaf(g + m));
        }
        NamedResult::new(format!("group_{}", g), group)
    }));
    results
}

fn bench_renderers(c: &mut Criterion) {
    let results = create_results(500, 100, 20);
    let options = TerminalOptions {
        use_color: true,
        verbosity: Verbosity::All,
        width: 160,
        ..TerminalOptions::default()
    };
    let template = "<table>$$$RESULTS$$$</table>";

    c.bench_function("render_terminal_all", |b| {
        b.iter(|| render_terminal(black_box(&results), black_box(&options)))
    });

    c.bench_function("render_csv", |b| {
        b.iter(|| render_csv(black_box(&results)).unwrap())
    });

    c.bench_function("render_json", |b| {
        b.iter(|| render_json(black_box(&results)).unwrap())
    });

    c.bench_function("render_html_not_pass", |b| {
        b.iter(|| render_html(black_box(&results), template, Verbosity::NotPass))
    });
}

fn bench_visibility(c: &mut Criterion) {
    let results = create_results(2000, 200, 50);

    c.bench_function("visible_rows_fail_only", |b| {
        b.iter(|| black_box(&results).visible_rows(Verbosity::FailOnly).len())
    });

    c.bench_function("had_failures", |b| {
        b.iter(|| black_box(&results).had_failures())
    });
}

criterion_group!(benches, bench_renderers, bench_visibility);
criterion_main!(benches);
