use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;

use kestrel_simd::Float4;

fn gen_inputs(n: usize) -> Vec<[f32; 4]> {
    let mut rng = rand::thread_rng();
    (0..n).map(|_| rng.gen::<[f32; 4]>()).collect()
}

fn bench_mul_add(c: &mut Criterion) {
    let inputs = gen_inputs(1024);

    c.bench_function("float4 mul-add chain", |b| {
        b.iter(|| {
            let mut acc = Float4::zero();
            for arr in &inputs {
                let r = Float4::from_array(*arr);
                acc += r * r;
            }
            black_box(acc)
        })
    });
}

fn bench_rsqrt(c: &mut Criterion) {
    let inputs: Vec<[f32; 4]> = gen_inputs(1024)
        .into_iter()
        .map(|a| a.map(|v| v + 0.001))
        .collect();

    c.bench_function("float4 rsqrt", |b| {
        b.iter(|| {
            let mut acc = Float4::zero();
            for arr in &inputs {
                acc += Float4::from_array(*arr).rsqrt();
            }
            black_box(acc)
        })
    });
}

fn bench_cross3(c: &mut Criterion) {
    let inputs = gen_inputs(1024);

    c.bench_function("float4 cross3", |b| {
        b.iter(|| {
            let mut acc = Float4::zero();
            let mut prev = Float4::splat(1.0);
            for arr in &inputs {
                let r = Float4::from_array(*arr);
                acc += prev.cross3(r);
                prev = r;
            }
            black_box(acc)
        })
    });
}

criterion_group!(benches, bench_mul_add, bench_rsqrt, bench_cross3);
criterion_main!(benches);
