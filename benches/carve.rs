#[macro_use]
extern crate criterion;

use criterion::Criterion;
use laplaceseam::{carve, RgbaBuffer};

fn noise(width: u32, height: u32) -> RgbaBuffer {
    let mut state = 0x2545_f491u32;
    let data = (0..width * height * 4)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            state as u8
        })
        .collect();
    RgbaBuffer::from_raw(width, height, data).unwrap()
}

fn carve_benchmark(c: &mut Criterion) {
    let image = noise(160, 120);
    c.bench_function("carve 40 seams from 160x120", move |b| {
        b.iter(|| carve(image.clone(), 40).unwrap())
    });
}

criterion_group!(benches, carve_benchmark);
criterion_main!(benches);
