//! Benchmark rendering time for different ways of building a document.

use criterion::{criterion_group, criterion_main, Criterion};

use benches::context;
use benches::{Document, Elements, Lazy, Prebuilt};
use toxml::Options;

criterion_main! { benches }
criterion_group! { benches, bench_prepare, bench_render, bench_render_indent }

/// Benchmarks the time taken to build the value to render.
fn bench_prepare(c: &mut Criterion) {
    let mut g = c.benchmark_group("prepare");

    let feed = context::random(150);

    macro_rules! bench {
        ($D:ty) => {{
            g.bench_function(<$D as Document>::name(), |b| {
                b.iter(|| <$D as Document>::prepare(&feed));
            });
        }};
    }

    bench!(Prebuilt);
    bench!(Elements);
}

/// Benchmarks the time taken to render a document as a compact string.
fn bench_render(c: &mut Criterion) {
    let mut g = c.benchmark_group("render");

    let feed = context::random(150);
    let options = Options::default();

    g.bench_function("serde", |b| {
        b.iter(|| toxml::to_xml(&feed, &options).unwrap());
    });

    macro_rules! bench {
        ($D:ty) => {{
            g.bench_function(<$D as Document>::name(), |b| {
                let doc = <$D as Document>::prepare(&feed);
                b.iter(|| doc.render(&options));
            });
        }};
    }

    bench!(Prebuilt);
    bench!(Elements);
    bench!(Lazy);
}

/// Benchmarks the time taken to render an indented document with a header.
fn bench_render_indent(c: &mut Criterion) {
    let mut g = c.benchmark_group("render_indent");

    let feed = context::random(150);
    let options = Options::builder().header(true).indent("  ").build();

    macro_rules! bench {
        ($D:ty) => {{
            g.bench_function(<$D as Document>::name(), |b| {
                let doc = <$D as Document>::prepare(&feed);
                b.iter(|| doc.render(&options));
            });
        }};
    }

    bench!(Prebuilt);
    bench!(Elements);
}
