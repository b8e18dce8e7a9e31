use criterion::{black_box, criterion_group, criterion_main, Criterion};
use magic_bits::{Attacks, BuildConfig, Slider, SliderTable};

const OCCUPANCY: u64 = 0xF7F6F3748CA5B610;

pub fn bench_rook_lookup(c: &mut Criterion) {
    let attacks = Attacks::new();
    c.bench_function("rook lookup all squares", |b| {
        b.iter(|| {
            (0..64u8).fold(0u64, |acc, sq| acc ^ attacks.rook(black_box(OCCUPANCY), sq))
        })
    });
}

pub fn bench_bishop_lookup(c: &mut Criterion) {
    let attacks = Attacks::new();
    c.bench_function("bishop lookup all squares", |b| {
        b.iter(|| {
            (0..64u8).fold(0u64, |acc, sq| acc ^ attacks.bishop(black_box(OCCUPANCY), sq))
        })
    });
}

pub fn bench_queen_lookup(c: &mut Criterion) {
    let attacks = Attacks::new();
    c.bench_function("queen lookup all squares", |b| {
        b.iter(|| {
            (0..64u8).fold(0u64, |acc, sq| acc ^ attacks.queen(black_box(OCCUPANCY), sq))
        })
    });
}

pub fn bench_queen_ray_casting(c: &mut Criterion) {
    c.bench_function("queen ray casting all squares", |b| {
        b.iter(|| {
            (0..64u8).fold(0u64, |acc, sq| {
                acc ^ Slider::ROOK.attack(sq, black_box(OCCUPANCY))
                    ^ Slider::BISHOP.attack(sq, black_box(OCCUPANCY))
            })
        })
    });
}

pub fn bench_build_precomputed(c: &mut Criterion) {
    let mut group = c.benchmark_group("flat-sampling");
    group.sample_size(10);
    group.bench_function("build tables from built-in magics", |b| {
        b.iter(|| Attacks::with_config(black_box(&BuildConfig::default())))
    });
    group.finish();
}

pub fn bench_regenerate_bishop(c: &mut Criterion) {
    let mut group = c.benchmark_group("flat-sampling");
    group.sample_size(10);
    group.bench_function("regenerate bishop magics", |b| {
        b.iter(|| SliderTable::build(&Slider::BISHOP, black_box(&BuildConfig::regenerate(Some(1)))))
    });
    group.bench_function("regenerate bishop magics parallel", |b| {
        b.iter(|| {
            SliderTable::build(
                &Slider::BISHOP,
                black_box(&BuildConfig::regenerate(Some(1)).parallel(true)),
            )
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_rook_lookup,
    bench_bishop_lookup,
    bench_queen_lookup,
    bench_queen_ray_casting,
    bench_build_precomputed,
    bench_regenerate_bishop,
    // rook regeneration takes seconds per run
);
criterion_main!(benches);
