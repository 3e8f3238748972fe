// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for slide navigation operations.
//!
//! Measures the performance of:
//! - Navigation operations (next/previous/direct jump)
//! - The eased offset computation done once per animation frame

use criterion::{criterion_group, criterion_main, Criterion};
use folio_deck::navigator::SlideNavigator;
use std::hint::black_box;
use std::time::{Duration, Instant};

/// Benchmark navigation operations (next/previous/go_to).
fn bench_navigate(c: &mut Criterion) {
    let mut group = c.benchmark_group("slide_navigation");

    let navigator = SlideNavigator::new(2);
    let now = Instant::now();

    group.bench_function("next", |b| {
        b.iter(|| {
            let mut nav = navigator.clone();
            black_box(nav.next(now));
        });
    });

    group.bench_function("previous", |b| {
        b.iter(|| {
            let mut nav = navigator.clone();
            black_box(nav.previous(now));
        });
    });

    group.bench_function("go_to", |b| {
        b.iter(|| {
            let mut nav = navigator.clone();
            black_box(nav.go_to(1, now));
        });
    });

    group.finish();
}

/// Benchmark the per-frame offset computation during a transition.
fn bench_offset(c: &mut Criterion) {
    let mut group = c.benchmark_group("slide_navigation");

    let mut navigator = SlideNavigator::new(2);
    let start = Instant::now();
    navigator.next(start);
    let mid_transition = start + Duration::from_millis(400);

    group.bench_function("offset_fraction", |b| {
        b.iter(|| {
            black_box(navigator.offset_fraction(mid_transition));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_navigate, bench_offset);
criterion_main!(benches);
