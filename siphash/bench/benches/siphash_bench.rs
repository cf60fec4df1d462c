//! This is a wallclock time microbenchmark for SipHash using the Criterion
//! framework, comparing against the `siphasher` crate.

use criterion::{
    black_box, criterion_group, criterion_main, measurement::WallTime, BenchmarkGroup, Criterion,
    Throughput,
};
use rand::{rngs::StdRng, RngCore, SeedableRng};
use siphash::SipHashBuilder;
use std::hash::Hasher;

/// Per-parameterization settings
struct Variant {
    compression: u32,
    finalization: u32,
    name: &'static str,
}

/// Message lengths, covering short keys and bulk data
const SIZES: [usize; 6] = [0, 7, 8, 64, 1024, 16 * 1024];

fn siphash_bench(c: &mut Criterion) {
    let variants = [
        Variant {
            compression: 2,
            finalization: 4,
            name: "2-4",
        },
        Variant {
            compression: 1,
            finalization: 3,
            name: "1-3",
        },
    ];

    let mut rng = StdRng::seed_from_u64(0);
    let mut key = [0_u8; 16];
    rng.fill_bytes(&mut key);
    let mut data = vec![0_u8; SIZES[SIZES.len() - 1]];
    rng.fill_bytes(&mut data);

    for v in &variants {
        bench_variant(
            &mut c.benchmark_group(format!("siphash-{}", v.name)),
            v,
            &key,
            &data,
        );
    }
    bench_reference(&mut c.benchmark_group("siphasher-2-4"), &key, &data);
}

fn bench_variant(group: &mut BenchmarkGroup<'_, WallTime>, v: &Variant, key: &[u8], data: &[u8]) {
    let func = SipHashBuilder::new()
        .compression_rounds(v.compression)
        .finalization_rounds(v.finalization)
        .build(key)
        .unwrap();
    for size in SIZES {
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_function(size.to_string(), |b| {
            b.iter(|| func.hash(black_box(&data[..size])).unwrap());
        });
    }
}

// Compare with an established implementation at the same parameters.
fn bench_reference(group: &mut BenchmarkGroup<'_, WallTime>, key: &[u8; 16], data: &[u8]) {
    for size in SIZES {
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_function(size.to_string(), |b| {
            b.iter(|| {
                let mut h = siphasher::sip::SipHasher24::new_with_key(key);
                h.write(black_box(&data[..size]));
                h.finish()
            });
        });
    }
}

criterion_group!(benches, siphash_bench);
criterion_main!(benches);
