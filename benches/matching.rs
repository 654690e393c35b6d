//! Performance comparison of the three block-matching strategies across
//! pool sizes

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use image::RgbImage;
use mosatile::algorithm::executor::{Algorithm, Matcher, MosaicConfig};
use mosatile::color::Rgb;
use mosatile::spatial::sampler::Candidate;
use std::hint::black_box;

fn scrambled_color(seed: u32) -> Rgb {
    let mixed = seed.wrapping_mul(2_654_435_761).rotate_left(11);
    Rgb::new((mixed >> 16) as u8, (mixed >> 8) as u8, mixed as u8)
}

fn synthetic_pool(size: usize) -> Vec<Candidate> {
    (0..size)
        .map(|i| {
            let color = scrambled_color(i as u32);
            Candidate {
                image: RgbImage::from_pixel(8, 8, image::Rgb([color.r, color.g, color.b])),
                color,
            }
        })
        .collect()
}

fn config_for(algorithm: Algorithm) -> MosaicConfig {
    MosaicConfig {
        width: 320,
        height: 320,
        block_size: 16,
        algorithm,
        climb_distance: 12,
        number_of_climbers: 6,
    }
}

/// Measures per-block search cost for each strategy as the pool grows
fn bench_block_matching(c: &mut Criterion) {
    let mut group = c.benchmark_group("block_matching");

    let targets: Vec<Rgb> = (0..64).map(|i| scrambled_color(i * 977 + 13)).collect();

    for pool_size in &[64usize, 512] {
        let pool = synthetic_pool(*pool_size);

        let strategies = [
            ("brute", Algorithm::Brute),
            ("rgb-hill", Algorithm::RgbHill),
            ("hsv-hill", Algorithm::HsvHill),
        ];

        for (name, algorithm) in strategies {
            let Ok(matcher) = Matcher::new(&pool, &config_for(algorithm)) else {
                group.finish();
                return;
            };

            group.bench_with_input(
                BenchmarkId::new(name, pool_size),
                pool_size,
                |b, _| {
                    b.iter(|| {
                        for &target in &targets {
                            let matched = matcher.best_match(black_box(target));
                            let _ = black_box(matched);
                        }
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_block_matching);
criterion_main!(benches);
