use criterion::{Criterion, black_box, criterion_group, criterion_main};
use serplens_core::analyzers::{content_quality, keyword, serp, technical};
use serplens_core::{ContentQualityConfig, Document, KeywordConfig, SerpConfig, TechnicalConfig};

fn fixture_html() -> String {
    let paragraph = "Composting turns kitchen scraps and yard waste into rich soil, and a \
                     steady turning schedule keeps the pile warm through the season. "
        .repeat(40);
    format!(
        r#"<!DOCTYPE html>
        <html lang="en">
        <head>
            <title>Backyard Composting Guide for Beginners</title>
            <meta name="description" content="Everything you need to start composting at home, from bins to troubleshooting, explained in plain language for first-time gardeners.">
            <meta name="viewport" content="width=device-width, initial-scale=1">
            <link rel="canonical" href="https://example.com/composting">
        </head>
        <body>
            <h1>Backyard Composting</h1>
            <h2>Why compost?</h2>
            <p>{}</p>
            <a href="/bins">Bins</a>
            <a href="https://extension.example.org/science">Science</a>
            <img src="/pile.jpg" alt="compost pile">
        </body>
        </html>"#,
        paragraph
    )
}

fn bench_parse(c: &mut Criterion) {
    let html = fixture_html();

    c.bench_function("document_parse", |b| {
        b.iter(|| Document::parse(black_box(&html), "https://example.com/composting", 200))
    });
}

fn bench_analyzers(c: &mut Criterion) {
    let html = fixture_html();
    let doc = Document::parse(&html, "https://example.com/composting", 200).unwrap();

    c.bench_function("keyword_analyze", |b| {
        b.iter(|| keyword::analyze(black_box(&doc), &KeywordConfig::default()))
    });

    c.bench_function("content_quality_analyze", |b| {
        b.iter(|| content_quality::analyze(black_box(&doc), &ContentQualityConfig::default()))
    });

    c.bench_function("technical_analyze", |b| {
        b.iter(|| technical::analyze(black_box(&doc), &TechnicalConfig::default()))
    });

    c.bench_function("serp_analyze", |b| {
        b.iter(|| serp::analyze(black_box(&doc), &SerpConfig::default()))
    });
}

criterion_group!(benches, bench_parse, bench_analyzers);
criterion_main!(benches);
