use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use genalg_tsp::{
    codec::{decode_reference, encode, Decoder},
    rng::RandomNumberGenerator,
};

fn random_encoding(n: usize, rng: &mut RandomNumberGenerator) -> Vec<usize> {
    (0..n).map(|i| rng.below(i + 1)).collect()
}

fn bench_decode(c: &mut Criterion) {
    let mut rng = RandomNumberGenerator::from_seed(42);
    let mut decoder = Decoder::new();

    let mut group = c.benchmark_group("decode");
    for size in [16, 128, 1024, 4096].iter() {
        let encoded = random_encoding(*size, &mut rng);

        group.bench_with_input(BenchmarkId::new("order_statistics", size), &encoded, |b, e| {
            b.iter(|| decoder.decode(black_box(e)))
        });

        group.bench_with_input(BenchmarkId::new("reference", size), &encoded, |b, e| {
            b.iter(|| decode_reference(black_box(e)))
        });
    }
    group.finish();
}

fn bench_encode(c: &mut Criterion) {
    let mut rng = RandomNumberGenerator::from_seed(7);
    let mut decoder = Decoder::new();

    let mut group = c.benchmark_group("encode");
    for size in [16, 128, 1024].iter() {
        let chromosome = decoder.decode(&random_encoding(*size, &mut rng));
        group.bench_with_input(BenchmarkId::from_parameter(size), &chromosome, |b, ch| {
            b.iter(|| encode(black_box(ch)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_decode, bench_encode);
criterion_main!(benches);
