//! Benchmarks for pdfstrings extraction performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks test extraction performance with synthetic PDF data.

use std::io::Write;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use flate2::write::ZlibEncoder;
use flate2::Compression;

/// Creates a minimal synthetic PDF with the given number of content streams.
fn create_test_pdf(stream_count: usize, compressed: bool) -> Vec<u8> {
    let mut content = b"%PDF-1.4\n".to_vec();
    content.extend_from_slice(b"1 0 obj\n<< /Type /Catalog /Pages 2 0 R >>\nendobj\n");

    for i in 0..stream_count {
        let text = format!(
            "BT /F1 12 Tf 100 700 Td (Page {} - Benchmark test content for pdfstrings.) Tj <48656C6C6F> Tj ET",
            i + 1
        );
        let payload = if compressed {
            let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
            encoder.write_all(text.as_bytes()).unwrap();
            encoder.finish().unwrap()
        } else {
            text.into_bytes()
        };

        content.extend_from_slice(
            format!("{} 0 obj\n<< /Length {} >>\nstream\n", i + 3, payload.len()).as_bytes(),
        );
        content.extend_from_slice(&payload);
        content.extend_from_slice(b"\nendstream\nendobj\n");
    }

    content.extend_from_slice(b"trailer\n<< /Root 1 0 R >>\n%%EOF\n");
    content
}

/// Benchmark the signature check.
fn bench_format_guard(c: &mut Criterion) {
    let pdf_data = create_test_pdf(1, false);
    let non_pdf_data = b"Not a PDF file at all, just random text content";

    c.bench_function("guard_valid_pdf", |b| {
        b.iter(|| pdfstrings::check_signature(black_box(&pdf_data)).is_ok());
    });

    c.bench_function("guard_non_pdf", |b| {
        b.iter(|| pdfstrings::check_signature(black_box(non_pdf_data)).is_err());
    });
}

/// Benchmark end-to-end extraction at various sizes.
fn bench_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("extraction");

    for stream_count in [1, 10, 100].iter() {
        for compressed in [false, true] {
            let data = create_test_pdf(*stream_count, compressed);
            let label = if compressed { "deflate" } else { "raw" };

            group.bench_function(format!("{}_streams_{}", stream_count, label), |b| {
                b.iter(|| pdfstrings::extract(black_box(&data)));
            });
        }
    }

    group.finish();
}

/// Benchmark the normalization pass on its own.
fn bench_normalization(c: &mut Criterion) {
    let text = "Lorem  ipsum\n\n\n dolor \t sit\r\namet ".repeat(500);
    c.bench_function("normalize_whitespace", |b| {
        b.iter(|| pdfstrings::normalize_whitespace(black_box(&text)));
    });
}

criterion_group!(
    benches,
    bench_format_guard,
    bench_extraction,
    bench_normalization,
);
criterion_main!(benches);
