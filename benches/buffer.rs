//! Line buffer and editor performance benchmarks.

#![allow(clippy::semicolon_if_nothing_returned)]

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use site_rust::editor::Editor;
use site_rust::highlight::{Highlighter, Language};
use site_rust::input::{KeyCode, KeyEvent};
use site_rust::text::{LineBuffer, ReaderSource, StreamingLoader, visible_segments};
use std::hint::black_box;
use std::io::Cursor;

fn build_source(lines: usize) -> String {
    let line = "\tif err := run(ctx, \"job\"); err != nil { return err } // retry\n";
    line.repeat(lines)
}

fn buffer_load(c: &mut Criterion) {
    let source = build_source(1_000);
    c.bench_function("buffer_from_text_1000_lines", |b| {
        b.iter(|| LineBuffer::from_text(black_box(&source), Highlighter::new(Language::Go)))
    });
}

fn buffer_edits(c: &mut Criterion) {
    let buffer = LineBuffer::from_text(&build_source(200), Highlighter::new(Language::Go));
    c.bench_function("buffer_insert_split_join", |b| {
        b.iter_batched(
            || buffer.clone(),
            |mut buffer| {
                buffer.insert_str(100, 1, "x := 1; ");
                let next = buffer.split_line(100, 10, "\t");
                buffer.join_with_next(next - 1);
                buffer
            },
            BatchSize::SmallInput,
        )
    });
}

fn streaming_load(c: &mut Criterion) {
    let source = build_source(5_000);
    c.bench_function("streaming_load_5000_lines", |b| {
        b.iter(|| {
            let mut buffer = LineBuffer::with_highlighter(Highlighter::new(Language::Go));
            let mut loader = StreamingLoader::new(ReaderSource::new(Cursor::new(source.clone())));
            let _ = loader.load_initial(&mut buffer, 1_000);
            while !loader.is_finished() {
                if loader.append_more(&mut buffer, 1_000).is_err() {
                    break;
                }
            }
            buffer.len()
        })
    });
}

fn editor_typing(c: &mut Criterion) {
    c.bench_function("editor_type_block", |b| {
        b.iter(|| {
            let mut editor = Editor::new();
            editor.select_grammar(Language::Go);
            for ch in "func main() {".chars() {
                editor.handle_key(KeyEvent::char(ch));
            }
            editor.handle_key(KeyEvent::key(KeyCode::Enter));
            for ch in "fmt.Println(\"hi\")".chars() {
                editor.handle_key(KeyEvent::char(ch));
            }
            black_box(editor.buffer().len())
        })
    });
}

fn render_window(c: &mut Criterion) {
    let buffer = LineBuffer::from_text(&build_source(1), Highlighter::new(Language::Go));
    let line = buffer.line(0).unwrap_or_default();
    let tokens = buffer.tokens(0);
    c.bench_function("visible_segments_80_cols", |b| {
        b.iter(|| visible_segments(black_box(line), tokens, 8, 80, 4))
    });
}

criterion_group!(
    benches,
    buffer_load,
    buffer_edits,
    streaming_load,
    editor_typing,
    render_window
);
criterion_main!(benches);
