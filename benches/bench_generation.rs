use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use genalg_tsp::{
    codec::Decoder,
    evolution::{EvolutionOptions, LogLevel},
    graph::Graph,
    population::{population_size, Population},
    rng::RandomNumberGenerator,
};

fn bench_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("generation");
    group.sample_size(20);

    for vertices in [10, 40, 100].iter() {
        let mut rng = RandomNumberGenerator::from_seed(1);
        let graph = Graph::random(&mut rng, *vertices, *vertices, 800.0);
        let options = EvolutionOptions::builder().log_level(LogLevel::None).build();
        let size = population_size(*vertices, options.get_population_cap());

        let mut decoder = Decoder::new();
        let mut population = Population::random(size, *vertices, &mut decoder, &mut rng);
        population.score(&graph, options.get_parallel_threshold());
        population.sort();

        group.bench_with_input(BenchmarkId::new("reproduce", vertices), &population, |b, p| {
            b.iter(|| {
                black_box(p.clone().reproduce(&options, &mut decoder, &mut rng));
            })
        });

        group.bench_with_input(BenchmarkId::new("score_sequential", vertices), &population, |b, p| {
            b.iter(|| {
                let mut p = p.clone();
                p.score(black_box(&graph), usize::MAX);
            })
        });

        group.bench_with_input(BenchmarkId::new("score_parallel", vertices), &population, |b, p| {
            b.iter(|| {
                let mut p = p.clone();
                p.score(black_box(&graph), 1);
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_generation);
criterion_main!(benches);
