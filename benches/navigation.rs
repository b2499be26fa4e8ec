// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for slider navigation and layout.
//!
//! Measures the performance of:
//! - Page parsing and discovery
//! - Navigation operations (advance/retreat with thumbnail tracking)
//! - Render plan generation
//! - Responsive recomputation on resize

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use danny_slider::markup::{parse_page, ImageRef, SliderMarkup};
use danny_slider::slider::{SliderController, SliderId};
use danny_slider::SliderRegistry;
use std::hint::black_box;
use std::time::Instant;

fn markup(items: usize) -> SliderMarkup {
    SliderMarkup::new((0..items).map(|i| Some(ImageRef::new(format!("{i}.jpg")))))
        .with_data("loop", "true")
        .with_data("items-desktop", "3")
        .with_data("items-tablet", "2")
        .with_data("gap", "12")
        .with_data("thumbnails", "true")
}

fn page_html(sliders: usize, items: usize) -> String {
    let item_html: String = (0..items)
        .map(|i| format!(r#"<div class="danny-slider-item"><img src="{i}.jpg" alt="Item {i}"></div>"#))
        .collect();
    (0..sliders)
        .map(|_| {
            format!(
                r#"<div class="danny-slider" data-items-desktop="3" data-thumbnails="true">
                  <div class="danny-slider-track">{item_html}</div>
                  <button class="danny-slider-prev"></button>
                  <button class="danny-slider-next"></button>
                  <div class="danny-slider-dots"></div>
                  <div class="danny-slider-thumbs"></div>
                </div>"#
            )
        })
        .collect()
}

/// Benchmark parsing a page and discovering its sliders.
fn bench_discovery(c: &mut Criterion) {
    let mut group = c.benchmark_group("discovery");
    let html = page_html(10, 20);

    group.bench_function("parse_and_discover", |b| {
        b.iter(|| {
            let page = parse_page(black_box(&html)).expect("valid page");
            let mut registry = SliderRegistry::new();
            black_box(registry.discover(&page, 1280.0, Instant::now()));
        });
    });

    group.finish();
}

/// Benchmark navigation with thumbnail tracking.
fn bench_navigate(c: &mut Criterion) {
    let mut group = c.benchmark_group("navigation");

    for items in [10usize, 100, 1000] {
        let slider = SliderController::new(
            SliderId::from("bench"),
            &markup(items),
            1280.0,
            Instant::now(),
        )
        .expect("valid markup");

        group.bench_with_input(BenchmarkId::new("advance_full_cycle", items), &items, |b, &items| {
            b.iter(|| {
                let mut slider = slider.clone();
                for _ in 0..items {
                    slider.advance();
                }
                black_box(slider.current_index());
            });
        });
    }

    group.finish();
}

/// Benchmark render plan generation and resize recomputation.
fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    let mut slider = SliderController::new(
        SliderId::from("bench"),
        &markup(100),
        1280.0,
        Instant::now(),
    )
    .expect("valid markup");

    group.bench_function("render", |b| {
        b.iter(|| black_box(slider.render()));
    });

    group.bench_function("resize_across_breakpoints", |b| {
        b.iter(|| {
            for width in [1280.0, 900.0, 375.0] {
                slider.resize(black_box(width));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_discovery, bench_navigate, bench_layout);
criterion_main!(benches);
