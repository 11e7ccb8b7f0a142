use bitseq::stats::frequency_test;
use bitseq::{BinarySequenceGenerator, generate};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_generate(c: &mut Criterion) {
    c.bench_function("generate 128 bits", |b| b.iter(|| black_box(generate())));

    let digits = BinarySequenceGenerator::new().generate().unwrap();
    c.bench_function("monobit 128 bits", |b| {
        b.iter(|| frequency_test(black_box(&digits)))
    });
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
