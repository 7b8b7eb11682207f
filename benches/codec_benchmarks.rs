use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use morton_geohash::Hash;
use morton_geohash::bits::{deinterleave, interleave};

fn benchmark_interleaving(c: &mut Criterion) {
    let mut group = c.benchmark_group("interleaving");

    group.bench_function("interleave", |b| {
        b.iter(|| interleave(black_box(28116097), black_box(17974564)))
    });

    group.bench_function("deinterleave", |b| {
        b.iter(|| deinterleave(black_box(921773536331809)))
    });

    group.finish();
}

fn benchmark_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");

    for precision in [1u8, 13, 26] {
        group.bench_with_input(
            BenchmarkId::new("encode", precision),
            &precision,
            |b, &precision| {
                b.iter(|| {
                    Hash::encode_with_precision(black_box(51.52463), black_box(-0.08411), precision)
                        .unwrap()
                })
            },
        );
    }

    let hash = Hash::encode(51.52463, -0.08411);
    group.bench_function("decode", |b| b.iter(|| black_box(hash).decode()));

    group.bench_function("to_bytes", |b| b.iter(|| black_box(hash).to_bytes()));

    let bytes = hash.to_bytes();
    group.bench_function("from_bytes", |b| {
        b.iter(|| Hash::from_bytes(black_box(&bytes)))
    });

    group.finish();
}

fn benchmark_navigation(c: &mut Criterion) {
    let mut group = c.benchmark_group("navigation");
    let hash = Hash::with_precision(135222385806149, 24).unwrap();

    for steps in [1i64, 100, 1_000_000] {
        group.bench_with_input(BenchmarkId::new("move_x", steps), &steps, |b, &steps| {
            b.iter(|| black_box(hash).move_x(steps))
        });
    }

    group.bench_function("neighbors", |b| b.iter(|| black_box(hash).neighbors()));
    group.bench_function("children", |b| b.iter(|| black_box(hash).children()));

    group.finish();
}

criterion_group!(
    benches,
    benchmark_interleaving,
    benchmark_codec,
    benchmark_navigation
);
criterion_main!(benches);
