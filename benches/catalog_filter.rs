// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for catalog queries.
//!
//! Measures the performance of:
//! - Filtering with a free-text query and tag refinements
//! - Building the home feeds (recent and trending)
//! - Looking up related videos for the watch page

use chrono::{Duration, TimeZone, Utc};
use codecast::application::query::Catalog;
use codecast::domain::catalog::{Creator, Difficulty, Video, VideoFilter};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

const TAGS: [&str; 8] = [
    "Rust", "Async", "React", "CSS", "Docker", "SQL", "Git", "WebAssembly",
];
const CATEGORIES: [&str; 4] = [
    "Systems Programming",
    "Frontend Development",
    "Backend Development",
    "DevOps",
];

/// Builds a synthetic catalog of `size` videos.
fn synthetic_catalog(size: usize) -> Catalog {
    let epoch = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).single().unwrap_or_default();
    let videos = (0..size)
        .map(|i| Video {
            id: format!("video-{i}"),
            title: format!("Lesson {i}: {}", TAGS[i % TAGS.len()]),
            description: format!("Part {i} of the {} series", CATEGORIES[i % CATEGORIES.len()]),
            thumbnail_url: String::new(),
            video_url: format!("https://cdn.example/{i}.mp4"),
            created_at: epoch + Duration::hours(i as i64),
            updated_at: None,
            duration_secs: 300.0 + (i % 40) as f64 * 30.0,
            view_count: (i as u64 * 7_919) % 100_000,
            like_count: 0,
            dislike_count: 0,
            creator: Creator {
                id: format!("creator-{}", i % 25),
                name: format!("Creator {}", i % 25),
                avatar: String::new(),
            },
            tags: vec![
                TAGS[i % TAGS.len()].to_string(),
                TAGS[(i / 3) % TAGS.len()].to_string(),
            ],
            category: CATEGORIES[i % CATEGORIES.len()].to_string(),
            difficulty: Difficulty::ALL[i % Difficulty::ALL.len()],
        })
        .collect();
    Catalog::new(videos)
}

/// Benchmark filtering across catalog sizes.
fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog_filter");
    let filter = VideoFilter::new()
        .with_query("lesson 1")
        .with_tag("Rust")
        .with_tag("Docker")
        .with_difficulty(Difficulty::Intermediate);

    for size in [100, 1_000, 10_000] {
        let catalog = synthetic_catalog(size);
        group.bench_with_input(BenchmarkId::new("query_and_tags", size), &catalog, |b, catalog| {
            b.iter(|| black_box(catalog.filter(black_box(&filter)).len()));
        });
    }

    group.finish();
}

/// Benchmark the feeds shown on the home and watch pages.
fn bench_feeds(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog_feeds");
    let catalog = synthetic_catalog(1_000);

    group.bench_function("recent", |b| {
        b.iter(|| black_box(catalog.recent(8).len()));
    });
    group.bench_function("trending", |b| {
        b.iter(|| black_box(catalog.trending(8).len()));
    });
    group.bench_function("related", |b| {
        b.iter(|| black_box(catalog.related(black_box("video-500"), 4).len()));
    });
    group.bench_function("all_tags", |b| {
        b.iter(|| black_box(catalog.all_tags().len()));
    });

    group.finish();
}

criterion_group!(benches, bench_filter, bench_feeds);
criterion_main!(benches);
