// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the gallery's hot paths.
//!
//! Measures the performance of:
//! - Swipe classification at touch release
//! - Image navigation with thumbnail window reconciliation
//! - Building the media catalog of a large interior

use criterion::{criterion_group, criterion_main, Criterion};
use iced::Point;
use interior_gallery::domain::gallery::{CrossFadeDelay, Direction, VisibleThumbnails};
use interior_gallery::domain::interior::Interior;
use interior_gallery::media::MediaCatalog;
use interior_gallery::ui::gallery::subcomponents::gesture::{classify_release, GestureConfig};
use interior_gallery::ui::gallery::subcomponents::navigation;
use std::hint::black_box;
use std::time::Duration;

fn large_interior() -> Interior {
    let mut interior = Interior::new(1, "Penthouse");
    interior.cover_image = Some("https://cdn.test/cover.jpg".into());
    interior.gallery_images = (0..500)
        .map(|i| format!("https://cdn.test/{i}.jpg"))
        .collect();
    interior.gallery_previews = (0..250)
        .map(|i| (i % 3 != 0).then(|| format!("https://cdn.test/{i}_s.jpg")))
        .collect();
    interior.video_urls = (0..20)
        .map(|i| format!("https://cdn.test/{i}.mp4"))
        .collect();
    interior
}

/// Benchmark swipe classification.
///
/// Covers a flick, a deliberate drag and a vertical scroll.
fn bench_classify_release(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_gesture");
    let config = GestureConfig::default();
    let cases = [
        (Point::new(200.0, 100.0), Point::new(175.0, 100.0), 100),
        (Point::new(300.0, 100.0), Point::new(200.0, 110.0), 450),
        (Point::new(100.0, 100.0), Point::new(140.0, 160.0), 200),
    ];

    group.bench_function("classify_release", |b| {
        b.iter(|| {
            for (start, end, millis) in cases {
                black_box(classify_release(
                    black_box(start),
                    black_box(end),
                    Duration::from_millis(millis),
                    false,
                    &config,
                ));
            }
        });
    });

    group.finish();
}

/// Benchmark image navigation across a long list.
fn bench_navigate(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");

    let mut state = navigation::State::new(VisibleThumbnails::default(), CrossFadeDelay::default());
    state.sync_counts(500, 20);

    group.bench_function("advance_image_full_cycle", |b| {
        b.iter(|| {
            for _ in 0..500 {
                black_box(state.handle(navigation::Message::AdvanceImage(Direction::Next)));
            }
        });
    });

    group.bench_function("select_image_far_jumps", |b| {
        b.iter(|| {
            for index in [499, 0, 250, 3, 497] {
                black_box(state.handle(navigation::Message::SelectImage(black_box(index))));
            }
        });
    });

    group.finish();
}

/// Benchmark catalog construction from an interior record.
fn bench_catalog(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_catalog");
    let interior = large_interior();

    group.bench_function("from_interior", |b| {
        b.iter(|| black_box(MediaCatalog::from_interior(black_box(&interior))));
    });

    group.finish();
}

criterion_group!(benches, bench_classify_release, bench_navigate, bench_catalog);
criterion_main!(benches);
