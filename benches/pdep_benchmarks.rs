use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pdep::counts::CountsIndex;
use pdep::{calc_all_gpdeps, gpdep, BatchConfig};

mod utils;

pub fn pdep_benchmarks(c: &mut Criterion) {
    let table = utils::create_table(20_000, &[50, 10, 200, 3, 1000, 25]);

    c.bench_function("Count order 1", |b| {
        b.iter(|| CountsIndex::new(black_box(&table), &[1], false).unwrap())
    });
    c.bench_function("Count order 2", |b| {
        b.iter(|| CountsIndex::new(black_box(&table), &[2], false).unwrap())
    });
    c.bench_function("Count order 2 - parallel", |b| {
        b.iter(|| CountsIndex::new(black_box(&table), &[2], true).unwrap())
    });

    let index = CountsIndex::new(&table, &[2], false).unwrap();
    c.bench_function("gpdep single pair", |b| {
        b.iter(|| gpdep(black_box(&index), black_box(&[0usize, 4][..]), black_box(6)).unwrap())
    });

    let mut batch = c.benchmark_group("calc_all_gpdeps");
    batch.sample_size(20);
    let cfg = BatchConfig::new(2);
    batch.bench_function("sequential", |b| {
        b.iter(|| calc_all_gpdeps(black_box(&index), black_box(&cfg)).unwrap())
    });
    let cfg = BatchConfig::new(2).set_parallel(true);
    batch.bench_function("parallel", |b| {
        b.iter(|| calc_all_gpdeps(black_box(&index), black_box(&cfg)).unwrap())
    });
    batch.finish();
}

criterion_group!(benches, pdep_benchmarks);
criterion_main!(benches);
