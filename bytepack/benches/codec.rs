//! Encode/decode throughput for each wire category.

use std::collections::HashMap;

use bytepack::{ByteBuffer, deserialize, serialize};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

/// Bulk fast path against the per-element path, same element count.
fn sequences(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequence");

    for len in [16usize, 256, 4096] {
        let ints: Vec<u64> = (0..len as u64).collect();
        let flags: Vec<bool> = (0..len).map(|i| i % 3 == 0).collect();
        let words: Vec<String> = (0..len).map(|i| format!("w{i}")).collect();

        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("u64", len), &ints, |b, v| {
            b.iter(|| {
                let mut buf = ByteBuffer::with_capacity(8 + len * 8);
                serialize(black_box(v), &mut buf);
                deserialize::<Vec<u64>>(&mut buf).unwrap()
            })
        });
        group.bench_with_input(BenchmarkId::new("bool", len), &flags, |b, v| {
            b.iter(|| {
                let mut buf = ByteBuffer::with_capacity(8 + len);
                serialize(black_box(v), &mut buf);
                deserialize::<Vec<bool>>(&mut buf).unwrap()
            })
        });
        group.bench_with_input(BenchmarkId::new("string", len), &words, |b, v| {
            b.iter(|| {
                let mut buf = ByteBuffer::new();
                serialize(black_box(v), &mut buf);
                deserialize::<Vec<String>>(&mut buf).unwrap()
            })
        });
    }
    group.finish();
}

fn maps(c: &mut Criterion) {
    let mut group = c.benchmark_group("map");

    for len in [16usize, 256] {
        let map: HashMap<String, u32> = (0..len).map(|i| (format!("k{i}"), i as u32)).collect();

        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &map, |b, m| {
            b.iter(|| {
                let mut buf = ByteBuffer::new();
                serialize(black_box(m), &mut buf);
                deserialize::<HashMap<String, u32>>(&mut buf).unwrap()
            })
        });
    }
    group.finish();
}

/// Many small values back to back in one buffer.
fn sequencing(c: &mut Criterion) {
    c.bench_function("mixed_stream_100", |b| {
        b.iter(|| {
            let mut buf = ByteBuffer::new();
            for i in 0..100i32 {
                serialize(&i, &mut buf);
                serialize(&5.0f64, &mut buf);
                serialize("test", &mut buf);
            }
            for _ in 0..100 {
                black_box(deserialize::<i32>(&mut buf).unwrap());
                black_box(deserialize::<f64>(&mut buf).unwrap());
                black_box(deserialize::<String>(&mut buf).unwrap());
            }
        })
    });
}

criterion_group!(benches, sequences, maps, sequencing);
criterion_main!(benches);
