//! Criterion benchmarks for the layout resolver.
//!
//! Measures [`kle_core::resolve`] over documents of increasing size.  Layouts
//! are small in practice (a full-size keyboard is ~110 keys), so this mainly
//! guards against accidental quadratic behavior in the token walk.
//!
//! Run with:
//! ```bash
//! cargo bench --package kle-core --bench resolve_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use kle_core::document::model::{Document, Row, StateUpdate, Token};
use kle_core::resolve;

// ── Document fixture builders ─────────────────────────────────────────────────

/// Creates a document with `rows` rows of `keys_per_row` keys, every third key
/// preceded by an offset/size adjustment to exercise the state-update path.
fn build_document(rows: usize, keys_per_row: usize) -> Document {
    let mut document = Document::default();
    for row_index in 0..rows {
        let mut tokens = Vec::with_capacity(keys_per_row * 2);
        for key_index in 0..keys_per_row {
            if key_index % 3 == 0 {
                tokens.push(Token::StateUpdate(StateUpdate {
                    x: Some(0.25),
                    y: None,
                    w: Some(1.5),
                    h: None,
                }));
            }
            tokens.push(Token::Key(format!("SW{}", row_index * keys_per_row + key_index)));
        }
        document.rows.push(Row { tokens });
    }
    document
}

// ── Benchmarks ────────────────────────────────────────────────────────────────

fn bench_resolve_by_row_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");

    for rows in [1usize, 6, 24, 96] {
        let document = build_document(rows, 15);
        group.bench_with_input(BenchmarkId::new("rows", rows), &document, |b, doc| {
            b.iter(|| resolve(black_box(doc)));
        });
    }

    group.finish();
}

fn bench_resolve_full_size_keyboard(c: &mut Criterion) {
    // 6 rows × 20 keys ≈ a full-size board with some macro columns.
    let document = build_document(6, 20);
    c.bench_function("resolve_full_size", |b| {
        b.iter(|| resolve(black_box(&document)));
    });
}

criterion_group!(benches, bench_resolve_by_row_count, bench_resolve_full_size_keyboard);
criterion_main!(benches);
