//! Criterion benchmarks for cardart critical paths
//!
//! Benchmarks the core performance-critical operations:
//! - Catalog: registry record scanning
//! - Gradient: card art backgrounds at each resolution
//! - Label: bitmap text rendering and placement
//! - Patterns: the four overlay generators
//! - Output: asset encoding per format

use cardart::catalog::parse_catalog;
use cardart::gradient::vertical_gradient;
use cardart::label::{apply_label, LabelFont};
use cardart::layout::Resolution;
use cardart::output::{encode_asset, AssetFormat};
use cardart::patterns::{foil_texture, holographic_stripes, premium_shine, promo_stamp};
use cardart::raster::Raster;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use image::Rgb;

// =============================================================================
// Test Data Generators
// =============================================================================

/// Generate Go registry source with `n` card records
fn make_registry(n: usize) -> String {
    const COLORS: [&str; 6] = ["Red", "Orange", "Yellow", "Green", "Blue", "Purple"];
    let records: Vec<String> = (0..n)
        .map(|i| {
            format!(
                "\t{{\n\t\tID:    \"card_{:04}\",\n\t\tName:  \"Card {}\",\n\t\tColor: domain.CardColor{},\n\t}},",
                i,
                i,
                COLORS[i % COLORS.len()]
            )
        })
        .collect();
    format!("package repository\n\nvar cards = []domain.Card{{\n{}\n}}\n", records.join("\n"))
}

// =============================================================================
// Catalog Benchmarks
// =============================================================================

fn bench_catalog(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog");

    for count in [10usize, 100, 1000] {
        let source = make_registry(count);
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::new("parse_catalog", count), &source, |b, source| {
            b.iter(|| parse_catalog(black_box(source)))
        });
    }

    group.finish();
}

// =============================================================================
// Gradient Benchmarks
// =============================================================================

fn bench_gradient(c: &mut Criterion) {
    let mut group = c.benchmark_group("gradient");

    for res in Resolution::ALL {
        let (w, h) = res.size();
        group.throughput(Throughput::Elements((w * h) as u64));
        group.bench_with_input(BenchmarkId::new("vertical", res.name()), &(w, h), |b, &(w, h)| {
            b.iter(|| vertical_gradient(w, h, Rgb([211, 47, 47]), Rgb([183, 28, 28])))
        });
    }

    group.finish();
}

// =============================================================================
// Label Benchmarks
// =============================================================================

fn bench_label(c: &mut Criterion) {
    let mut group = c.benchmark_group("label");
    let font = LabelFont::Bitmap;

    for res in Resolution::ALL {
        let (w, h) = res.size();
        let base = vertical_gradient(w, h, Rgb([30, 136, 229]), Rgb([21, 101, 192]));
        group.bench_with_input(BenchmarkId::new("bitmap", res.name()), &base, |b, base| {
            b.iter(|| {
                let mut img = base.clone();
                apply_label(&mut img, black_box("red pawn goblin"), &font);
                img
            })
        });
    }

    group.finish();
}

// =============================================================================
// Pattern Benchmarks
// =============================================================================

fn bench_patterns(c: &mut Criterion) {
    let mut group = c.benchmark_group("patterns");

    group.bench_function("holographic_stripes", |b| b.iter(holographic_stripes));
    group.bench_function("foil_texture", |b| b.iter(foil_texture));
    group.bench_function("premium_shine", |b| b.iter(premium_shine));
    group.bench_function("promo_stamp", |b| b.iter(promo_stamp));

    group.finish();
}

// =============================================================================
// Output Benchmarks
// =============================================================================

fn bench_output(c: &mut Criterion) {
    let mut group = c.benchmark_group("output");
    let (w, h) = Resolution::High.size();
    let art = vertical_gradient(w, h, Rgb([67, 160, 71]), Rgb([46, 125, 50]));

    for format in [AssetFormat::WebP, AssetFormat::Jpeg, AssetFormat::Png] {
        group.bench_with_input(
            BenchmarkId::new("encode_high", format.extension()),
            &format,
            |b, &format| b.iter(|| encode_asset(Raster::Rgb(art.clone()), format)),
        );
    }

    group.bench_function("encode_stamp_png", |b| {
        let stamp = promo_stamp();
        b.iter(|| encode_asset(Raster::Rgba(stamp.clone()), AssetFormat::Png))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_catalog,
    bench_gradient,
    bench_label,
    bench_patterns,
    bench_output
);
criterion_main!(benches);
