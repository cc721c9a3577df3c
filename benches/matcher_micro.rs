//! Microbenchmark that isolates the ranking algorithm from all other overhead
//! (I/O, sorting), plus one run of the full engine for comparison.

use criterion::{Criterion, criterion_group, criterion_main};

use commander::prelude::*;

/// Synthetic quick-open list: source paths with camel-case file names and a
/// few menu paths.
fn load_lines() -> Vec<String> {
    const DIRS: [&str; 6] = ["src", "src/widgets", "tests", "docs/api", "plugins/commander", "build/gen"];
    const STEMS: [&str; 8] = [
        "GtkWidget",
        "document",
        "TreeViewColumn",
        "key_dispatch",
        "readme",
        "ListStore",
        "menu-bar",
        "PrettyPrinter",
    ];
    (0..20_000)
        .map(|i| {
            format!(
                "{}/{}{}.{}",
                DIRS[i % DIRS.len()],
                STEMS[(i / 7) % STEMS.len()],
                i,
                if i % 3 == 0 { "c" } else { "xml" }
            )
        })
        .collect()
}

fn bench_matcher(c: &mut Criterion) {
    let lines = load_lines();

    c.bench_function("micro_rank", |b| {
        let m = CommanderMatcher::default();
        b.iter(|| {
            let mut count = 0u64;
            for line in &lines {
                if m.fuzzy_match("tvc", line).is_some() {
                    count += 1;
                }
            }
            count
        });
    });
    c.bench_function("micro_rank_folded", |b| {
        let m = CommanderMatcher::new(CapitalSource::Folded);
        b.iter(|| {
            let mut count = 0u64;
            for line in &lines {
                if m.fuzzy_match("tvc", line).is_some() {
                    count += 1;
                }
            }
            count
        });
    });
    c.bench_function("micro_rank_long_query", |b| {
        let m = CommanderMatcher::default();
        b.iter(|| {
            let mut count = 0u64;
            for line in &lines {
                if m.fuzzy_match("widgetsgtk", line).is_some() {
                    count += 1;
                }
            }
            count
        });
    });
    c.bench_function("micro_reject", |b| {
        let m = CommanderMatcher::default();
        b.iter(|| {
            let mut count = 0u64;
            for line in &lines {
                if m.fuzzy_match("zzq", line).is_some() {
                    count += 1;
                }
            }
            count
        });
    });

    let candidates: Vec<Candidate> = lines.iter().map(Candidate::file).collect();
    c.bench_function("engine_sequential", |b| {
        let engine = RankEngine::builder().query("f:doc").build();
        b.iter(|| engine.rank_candidates(&candidates).len());
    });
    c.bench_function("engine_parallel", |b| {
        let engine = RankEngine::builder().query("f:doc").parallel(true).build();
        b.iter(|| engine.rank_candidates(&candidates).len());
    });
}

criterion_group!(benches, bench_matcher);
criterion_main!(benches);
