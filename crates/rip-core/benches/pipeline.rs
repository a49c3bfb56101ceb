//! Halftoning Pipeline Benchmarks
//!
//! Benchmarks the per-channel classify/promote/pack stages, which run
//! independently per plane and dominate wall-clock time on large images.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rip_core::channel::ChannelPlane;
use rip_core::dotmap::{self, DotMap};
use rip_core::mask::ThresholdMask;
use rip_core::pack;
use rip_core::promote;
use rip_core::types::Plane;

fn generate_channel(width: u32, height: u32) -> ChannelPlane {
    let data = (0..(width * height))
        .map(|i| ((i * 37) % 256) as u8)
        .collect();
    ChannelPlane {
        plane: Plane::Cyan,
        width,
        height,
        data,
    }
}

fn generate_mask(width: u32, height: u32) -> ThresholdMask {
    let data = (0..(width * height))
        .map(|i| ((i * 61 + 17) % 256) as u8)
        .collect();
    ThresholdMask {
        plane: Plane::Cyan,
        width,
        height,
        data,
    }
}

fn generate_dotmap(width: u32, height: u32) -> DotMap {
    let data = (0..(width * height)).map(|i| (i % 4) as u8).collect();
    DotMap {
        plane: Plane::Cyan,
        width,
        height,
        data,
    }
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");

    for &side in [256u32, 1024, 4096].iter() {
        let channel = generate_channel(side, side);
        let mask = generate_mask(side, side);

        group.throughput(Throughput::Elements((side * side) as u64));
        group.bench_with_input(BenchmarkId::new("classify", side), &side, |b, _| {
            b.iter(|| dotmap::classify(black_box(&channel), black_box(&mask)).unwrap())
        });
    }

    group.finish();
}

fn bench_promote(c: &mut Criterion) {
    let mut group = c.benchmark_group("promote");

    for &side in [256u32, 1024, 4096].iter() {
        group.throughput(Throughput::Elements((side * side) as u64));
        group.bench_with_input(BenchmarkId::new("promote", side), &side, |b, _| {
            b.iter_batched(
                || generate_dotmap(side, side),
                |mut dm| promote::promote(black_box(&mut dm)),
                criterion::BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_pack(c: &mut Criterion) {
    let mut group = c.benchmark_group("pack");

    for &side in [256u32, 1024, 4096].iter() {
        let dm = generate_dotmap(side, side);

        group.throughput(Throughput::Elements((side * side) as u64));
        group.bench_with_input(BenchmarkId::new("pack", side), &side, |b, _| {
            b.iter(|| pack::pack(black_box(&dm)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_classify, bench_promote, bench_pack);
criterion_main!(benches);
