use criterion::{Criterion, criterion_group, criterion_main};
use markdown_tiptap_engine::parse_markdown;
use pulldown_cmark::Parser;
mod common;

fn bench_parse_markdown(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    let content = common::generate_markdown_content(100);
    group.bench_function("parse_markdown", |b| {
        b.iter(|| {
            let doc = parse_markdown(std::hint::black_box(&content));
            std::hint::black_box(doc);
        });
    });
    group.bench_function("parse_markdown_to_json", |b| {
        b.iter(|| {
            let json = parse_markdown(std::hint::black_box(&content)).to_json();
            std::hint::black_box(json)
        });
    });

    let nested = common::generate_nested_markdown(20, 12);
    group.bench_function("parse_markdown_nested", |b| {
        b.iter(|| std::hint::black_box(parse_markdown(std::hint::black_box(&nested))));
    });

    group.finish();
}

fn bench_pulldown_cmark_baseline(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    let content = common::generate_markdown_content(100);
    group.bench_function("pulldown_cmark", |b| {
        b.iter(|| {
            let parser = Parser::new(std::hint::black_box(&content));
            let events: Vec<_> = parser.collect();
            std::hint::black_box(events);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_parse_markdown, bench_pulldown_cmark_baseline);
criterion_main!(benches);
