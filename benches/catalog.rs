// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for catalog grouping and card building.
//!
//! Measures:
//! - Category extraction over a large catalog
//! - A full category switch (dispose old cards, build new ones)

use criterion::{criterion_group, criterion_main, Criterion};
use iced_folio::catalog::{AssetRoot, Catalog, Item};
use iced_folio::ui::gallery::{self, build_cards};
use iced_folio::ui::slider::{SliderIds, SliderSettings};
use std::hint::black_box;
use std::path::PathBuf;
use std::time::Instant;

const CATEGORIES: [&str; 6] = ["web", "art", "games", "mobile", "tools", "research"];

fn large_catalog(items: usize) -> Catalog {
    Catalog::new(
        (0..items)
            .map(|i| Item {
                name: format!("project-{i}"),
                description: "A project used for benchmarking.".to_string(),
                category: CATEGORIES[i % CATEGORIES.len()].to_string(),
                skills: vec!["rust".to_string(), "iced".to_string()],
                images: (0..(i % 4)).map(|n| format!("p{i}-{n}.png")).collect(),
                url: format!("https://example.com/{i}"),
            })
            .collect(),
    )
}

fn bench_categories(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog");
    let catalog = large_catalog(2_000);

    group.bench_function("categories", |b| {
        b.iter(|| black_box(catalog.categories()));
    });

    group.finish();
}

fn bench_build_cards(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog");
    let catalog = large_catalog(2_000);
    let assets = AssetRoot::Dir(PathBuf::from("assets"));

    group.bench_function("build_cards", |b| {
        b.iter(|| {
            let mut ids = SliderIds::default();
            let cards = build_cards(
                catalog.items_in("web"),
                &assets,
                SliderSettings::default(),
                &mut ids,
                Instant::now(),
            );
            black_box(cards);
        });
    });

    group.bench_function("select_category", |b| {
        let mut state = gallery::State::new(assets.clone(), SliderSettings::default());
        state.catalog_loaded(catalog.clone(), Instant::now());
        let mut flip = false;
        b.iter(|| {
            flip = !flip;
            let category = if flip { "art" } else { "web" };
            black_box(state.select_category(category, Instant::now()));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_categories, bench_build_cards);
criterion_main!(benches);
