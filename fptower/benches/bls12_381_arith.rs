use criterion::{criterion_group, criterion_main, Criterion};

use fptower::bls12_381::{Fq12, Fq2, Fq6};
use fptower_core::{test_rng, UniformRand};

fn bench_fq2(c: &mut Criterion) {
    let mut rng = test_rng();
    let a: Fq2 = UniformRand::rand(&mut rng);
    let b: Fq2 = UniformRand::rand(&mut rng);

    c.bench_function("fq2_mul_basic", move |bench| bench.iter(|| a.mul_basic(&b)));
    c.bench_function("fq2_mul_lazy", move |bench| bench.iter(|| a.mul_lazy(&b)));
    c.bench_function("fq2_square_basic", move |bench| {
        bench.iter(|| a.square_basic())
    });
    c.bench_function("fq2_square_lazy", move |bench| {
        bench.iter(|| a.square_lazy())
    });
}

fn bench_fq6(c: &mut Criterion) {
    let mut rng = test_rng();
    let a: Fq6 = UniformRand::rand(&mut rng);
    let b: Fq6 = UniformRand::rand(&mut rng);

    c.bench_function("fq6_mul_basic", move |bench| bench.iter(|| a.mul_basic(&b)));
    c.bench_function("fq6_mul_lazy", move |bench| bench.iter(|| a.mul_lazy(&b)));
    c.bench_function("fq6_square_basic", move |bench| {
        bench.iter(|| a.square_basic())
    });
    c.bench_function("fq6_square_lazy", move |bench| {
        bench.iter(|| a.square_lazy())
    });
}

fn bench_fq12(c: &mut Criterion) {
    let mut rng = test_rng();
    let a: Fq12 = UniformRand::rand(&mut rng);
    let b: Fq12 = UniformRand::rand(&mut rng);

    c.bench_function("fq12_mul_basic", move |bench| {
        bench.iter(|| a.mul_basic(&b))
    });
    c.bench_function("fq12_mul_lazy", move |bench| bench.iter(|| a.mul_lazy(&b)));
    c.bench_function("fq12_square_basic", move |bench| {
        bench.iter(|| a.square_basic())
    });
    c.bench_function("fq12_square_lazy", move |bench| {
        bench.iter(|| a.square_lazy())
    });
}

fn bench_cyclotomic(c: &mut Criterion) {
    let mut rng = test_rng();
    let a: Fq12 = UniformRand::rand(&mut rng);
    let g = a.to_cyclotomic().unwrap();

    c.bench_function("fq12_cyclotomic_square_basic", move |bench| {
        bench.iter(|| g.cyclotomic_square_basic())
    });
    c.bench_function("fq12_cyclotomic_square_lazy", move |bench| {
        bench.iter(|| g.cyclotomic_square_lazy())
    });
    c.bench_function("fq12_compressed_square_basic", move |bench| {
        bench.iter(|| g.compressed_square_basic())
    });
    c.bench_function("fq12_compressed_square_lazy", move |bench| {
        bench.iter(|| g.compressed_square_lazy())
    });
}

criterion_group!(benches, bench_fq2, bench_fq6, bench_fq12, bench_cyclotomic);
criterion_main!(benches);
