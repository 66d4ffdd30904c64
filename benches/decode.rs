use criterion::{criterion_group, criterion_main, Criterion};
use rayon::prelude::*;
use std::hint::black_box;

use addrverify::{us_street, Batch, Endpoint, UsStreet};

mod common;
use common::generate_street_response;

const INPUTS: usize = 100;

fn request_batch(count: usize) -> Batch<us_street::QueryParamsItem> {
    Batch::new(
        (0..count)
            .map(|i| us_street::QueryParamsItem::new().with_input_id(format!("id-{i}")))
            .collect::<Vec<_>>(),
    )
}

pub fn decode_benchmark(c: &mut Criterion) {
    let body = generate_street_response(INPUTS);
    let batch = request_batch(INPUTS);

    c.bench_function("decode_street_response", |b| {
        b.iter(|| {
            let results = UsStreet::decode(black_box(body.as_bytes())).unwrap();
            black_box(results);
        })
    });

    let results = UsStreet::decode(body.as_bytes()).unwrap();
    c.bench_function("correlate_street_response", |b| {
        b.iter(|| {
            let groups = batch.correlate(black_box(&results)).unwrap();
            black_box(groups.len());
        })
    });

    // Using rayon for parallel execution
    let bodies: Vec<String> = (0..8).map(|_| generate_street_response(INPUTS)).collect();
    c.bench_function("par_decode_street_response", |b| {
        b.iter(|| {
            let decoded: usize = bodies
                .par_iter()
                .map(|body| UsStreet::decode(body.as_bytes()).unwrap().len())
                .sum();
            black_box(decoded);
        })
    });
}

criterion_group!(benches, decode_benchmark);
criterion_main!(benches);
