//! Benchmarks for pseudo vertical transposition
//!
//! Run with: cargo bench transpose

use pseudo_vertical::{to_horizontal, to_vertical};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

fn poem(lines: usize) -> String {
    vec!["吾輩は猫である。名前はまだ無い。"; lines].join("\n")
}

fn ragged(lines: usize) -> String {
    (0..lines)
        .map(|i| "縦".repeat(i % 40 + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

// ============================================================================
// Forward
// ============================================================================

#[divan::bench(args = [10, 100, 1000])]
fn to_vertical_uniform(bencher: divan::Bencher, lines: usize) {
    let text = poem(lines);
    bencher.bench(|| to_vertical(divan::black_box(&text), true));
}

#[divan::bench(args = [10, 100, 1000])]
fn to_vertical_ragged(bencher: divan::Bencher, lines: usize) {
    let text = ragged(lines);
    bencher.bench(|| to_vertical(divan::black_box(&text), true));
}

// ============================================================================
// Inverse
// ============================================================================

#[divan::bench(args = [10, 100, 1000])]
fn to_horizontal_uniform(bencher: divan::Bencher, lines: usize) {
    let text = to_vertical(&poem(lines), true);
    bencher.bench(|| to_horizontal(divan::black_box(&text), true));
}

#[divan::bench(args = [10, 100, 1000])]
fn to_horizontal_ragged(bencher: divan::Bencher, lines: usize) {
    let text = to_vertical(&ragged(lines), true);
    bencher.bench(|| to_horizontal(divan::black_box(&text), true));
}

#[divan::bench]
fn already_vertical_noop(bencher: divan::Bencher) {
    let text = to_vertical(&poem(1000), true);
    bencher.bench(|| to_vertical(divan::black_box(&text), true));
}
