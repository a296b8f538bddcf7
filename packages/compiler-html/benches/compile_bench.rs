use criterion::{black_box, criterion_group, criterion_main, Criterion};
use letterpress_compiler_html::{compile_to_html, render_canvas, CompileOptions};
use letterpress_editor::{BlockKind, Document};

fn document_with(repeats: usize) -> Document {
    let mut doc = Document::new();
    for _ in 0..repeats {
        for kind in BlockKind::ALL {
            doc.append(kind);
        }
    }
    doc
}

fn compile_single_block(c: &mut Criterion) {
    let mut doc = Document::new();
    doc.append(BlockKind::Heading);
    let options = CompileOptions::default();

    c.bench_function("compile_single_block", |b| {
        b.iter(|| compile_to_html(black_box(&doc), &options))
    });
}

fn compile_every_kind(c: &mut Criterion) {
    let doc = document_with(1);
    let options = CompileOptions::default();

    c.bench_function("compile_every_kind", |b| {
        b.iter(|| compile_to_html(black_box(&doc), &options))
    });
}

fn compile_large_newsletter(c: &mut Criterion) {
    let doc = document_with(25);
    let options = CompileOptions {
        pretty: false,
        ..CompileOptions::default()
    };

    c.bench_function("compile_large_newsletter", |b| {
        b.iter(|| compile_to_html(black_box(&doc), &options))
    });
}

fn render_canvas_large(c: &mut Criterion) {
    let doc = document_with(25);
    let options = CompileOptions::default();

    c.bench_function("render_canvas_large", |b| {
        b.iter(|| render_canvas(black_box(&doc), &options))
    });
}

criterion_group!(
    benches,
    compile_single_block,
    compile_every_kind,
    compile_large_newsletter,
    render_canvas_large
);
criterion_main!(benches);
