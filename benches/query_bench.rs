//! Benchmarks for the query layer.
//!
//! Run with: cargo bench
//!
//! Measures the linear scans behind `list`, `tags` and `remind` over
//! logbooks of increasing size.

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use swansong::entry::{Entry, EntryDraft};
use swansong::query::{filter_entries, partition_reminders, summarize_tags, EntryFilter};

const MOODS: [&str; 4] = ["curious", "tired", "bright", "neutral"];
const TAGS: [&str; 5] = ["cache,api", "charts,ai", "proof,math", "api", "research,api"];

fn synthetic_logbook(size: usize) -> Vec<Entry> {
    (0..size)
        .map(|i| {
            let day = 1 + (i % 28) as u32;
            let month = 1 + ((i / 28) % 12) as u32;
            Entry::build(
                EntryDraft {
                    title: format!("Entry {}", i),
                    body: "notes after hours.".to_string(),
                    mood: MOODS[i % MOODS.len()].to_string(),
                    tags: TAGS[i % TAGS.len()].to_string(),
                    remind: (i % 3 == 0).then(|| format!("2023-{:02}-{:02}", month, day)),
                },
                format!("2023-{:02}-{:02}T12:00:00.{:06}", month, day, i % 1_000_000),
            )
            .expect("synthetic entry should be valid")
        })
        .collect()
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_entries");
    let filter = EntryFilter {
        mood: Some("curious".to_string()),
        tag: Some("api".to_string()),
        since: NaiveDate::from_ymd_opt(2023, 3, 1),
        until: NaiveDate::from_ymd_opt(2023, 9, 30),
        limit: Some(10),
    };

    for size in [100, 1_000, 10_000] {
        let entries = synthetic_logbook(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &entries, |b, entries| {
            b.iter(|| {
                let matched = filter_entries(black_box(entries), black_box(&filter))
                    .expect("filter failed");
                black_box(matched.len());
            });
        });
    }

    group.finish();
}

fn bench_summaries(c: &mut Criterion) {
    let mut group = c.benchmark_group("summaries");
    let today = NaiveDate::from_ymd_opt(2023, 6, 15).expect("valid date");

    for size in [100, 1_000, 10_000] {
        let entries = synthetic_logbook(size);
        group.bench_with_input(BenchmarkId::new("tags", size), &entries, |b, entries| {
            b.iter(|| black_box(summarize_tags(black_box(entries), None)));
        });
        group.bench_with_input(BenchmarkId::new("reminders", size), &entries, |b, entries| {
            b.iter(|| {
                let report = partition_reminders(black_box(entries), today, Some(30));
                black_box(report.upcoming.len() + report.overdue.len());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_filter, bench_summaries);
criterion_main!(benches);
