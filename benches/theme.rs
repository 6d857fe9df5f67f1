#![allow(clippy::unwrap_used)]
//! Benchmarks for theme history churn and theme serialization

#![allow(missing_docs)]

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use storeforge::theme::{ThemeConfig, ThemeHistory, ThemePatch};

fn edited_theme(base: &ThemeConfig, step: u8) -> ThemeConfig {
    base.merged(&ThemePatch {
        border_radius: Some(step % 30),
        primary_color: Some(format!("#{:06x}", u32::from(step) * 0x010203)),
        ..ThemePatch::default()
    })
}

fn bench_history_apply(c: &mut Criterion) {
    c.bench_function("history_apply_100_edits", |b| {
        b.iter(|| {
            let mut history = ThemeHistory::default();
            for step in 0..100u8 {
                let next = edited_theme(history.current(), step);
                history.apply(black_box(next));
            }
            black_box(history);
        });
    });
}

fn bench_history_undo_redo_cycle(c: &mut Criterion) {
    // Build once, then measure walking the whole history back and forth
    let mut seeded = ThemeHistory::default();
    for step in 0..100u8 {
        let next = edited_theme(seeded.current(), step);
        seeded.apply(next);
    }

    c.bench_function("history_undo_redo_full_walk", |b| {
        b.iter(|| {
            let mut history = seeded.clone();
            while history.can_undo() {
                history.undo();
            }
            while history.can_redo() {
                history.redo();
            }
            black_box(history);
        });
    });
}

fn bench_theme_serialization(c: &mut Criterion) {
    let theme = ThemeConfig::default();

    c.bench_function("theme_serialize", |b| {
        b.iter(|| {
            let json = serde_json::to_string(black_box(&theme)).unwrap();
            black_box(json);
        });
    });

    let json = serde_json::to_string(&theme).unwrap();
    c.bench_function("theme_deserialize", |b| {
        b.iter(|| {
            let deserialized: ThemeConfig = serde_json::from_str(black_box(&json)).unwrap();
            black_box(deserialized);
        });
    });
}

criterion_group!(
    benches,
    bench_history_apply,
    bench_history_undo_redo_cycle,
    bench_theme_serialization
);
criterion_main!(benches);
