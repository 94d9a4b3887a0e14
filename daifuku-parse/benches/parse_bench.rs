use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use daifuku_parse::prelude::*;

fn generate_u32_array(count: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(count * 4);
    for i in 0..count as u32 {
        data.extend_from_slice(&i.wrapping_mul(0x9E37_79B9).to_be_bytes());
    }
    data
}

fn generate_padded_i16s(count: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(count * 8);
    for i in 0..count {
        let value = (i as i16).wrapping_sub(1000);
        let fill = if value < 0 { 0xFFu8 } else { 0x00 };
        data.extend_from_slice(&[fill; 6]);
        data.extend_from_slice(&value.to_be_bytes());
    }
    data
}

fn generate_nul_strings(count: usize) -> Vec<u8> {
    let mut data = Vec::new();
    for i in 0..count {
        data.extend_from_slice(format!("field-{i}").as_bytes());
        data.push(0);
    }
    data
}

fn bench_integer_decoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("integers");
    let data = generate_u32_array(16_384);
    group.throughput(Throughput::Bytes(data.len() as u64));

    group.bench_function("u32_be_exhaustive", |b| {
        b.iter(|| {
            let values = data
                .with_cursor(|cursor| cursor.read_seq_exhaustive(|c| c.read_be::<u32>()))
                .unwrap();
            black_box(values)
        })
    });

    group.bench_function("u64_converted_from_u32", |b| {
        b.iter(|| {
            let values = data
                .with_cursor(|cursor| {
                    cursor.read_seq_exhaustive(|c| c.read_converted::<u32, u64>(Endian::Big))
                })
                .unwrap();
            black_box(values)
        })
    });

    group.finish();
}

fn bench_padded_decoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("padded");
    let data = generate_padded_i16s(4096);
    group.throughput(Throughput::Bytes(data.len() as u64));

    group.bench_function("i16_from_8_bytes", |b| {
        b.iter(|| {
            let values = data
                .with_cursor(|cursor| {
                    cursor.read_seq_exhaustive(|c| c.read_sized::<i16>(Endian::Big, 8))
                })
                .unwrap();
            black_box(values)
        })
    });

    group.finish();
}

fn bench_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("strings");
    let data = generate_nul_strings(2048);
    group.throughput(Throughput::Bytes(data.len() as u64));

    group.bench_function("utf8_nul_exhaustive", |b| {
        b.iter(|| {
            let strings = data
                .with_cursor(|cursor| cursor.read_seq_exhaustive(|c| c.read_utf8_nul()))
                .unwrap();
            black_box(strings)
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_integer_decoding,
    bench_padded_decoding,
    bench_strings
);
criterion_main!(benches);
