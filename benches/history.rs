//! Benchmarks for undo snapshots and document edits
//!
//! Run with: cargo bench history

use epad::model::{Document, SnapshotHistory};
use ropey::Rope;

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

// ============================================================================
// Snapshots
// ============================================================================

#[divan::bench(args = [1_000, 10_000, 100_000])]
fn snapshot_unchanged_content(bencher: divan::Bencher, line_count: usize) {
    let rope = Rope::from_str(&"foo bar baz\n".repeat(line_count));
    let mut history = SnapshotHistory::new();
    history.take_snapshot(0, &rope);
    bencher.bench_local(|| divan::black_box(history.take_snapshot(0, &rope)));
}

#[divan::bench(args = [1_000, 10_000])]
fn fill_history_past_limit(bencher: divan::Bencher, line_count: usize) {
    let base = Rope::from_str(&"foo bar baz\n".repeat(line_count));
    bencher.bench_local(|| {
        let mut history = SnapshotHistory::new();
        let mut rope = base.clone();
        for i in 0..50 {
            rope.insert(0, "x");
            history.take_snapshot(i, &rope);
        }
        divan::black_box(history.len())
    });
}

// ============================================================================
// Editing through a document
// ============================================================================

#[divan::bench]
fn type_100_chars_10k_lines(bencher: divan::Bencher) {
    let text = "foo bar baz\n".repeat(10_000);
    bencher
        .with_inputs(|| {
            let mut doc = Document::with_text(&text);
            doc.set_cursor(doc.len_chars() / 2);
            doc
        })
        .bench_local_values(|mut doc| {
            for _ in 0..100 {
                doc.insert_text("a");
            }
            divan::black_box(doc.is_modified)
        });
}

#[divan::bench]
fn undo_redo_full_history(bencher: divan::Bencher) {
    let text = "foo bar baz\n".repeat(10_000);
    bencher
        .with_inputs(|| {
            let mut doc = Document::with_text(&text);
            for _ in 0..30 {
                doc.insert_text("a");
            }
            doc
        })
        .bench_local_values(|mut doc| {
            while doc.undo() {}
            while doc.redo() {}
            divan::black_box(doc.len_chars())
        });
}
