//! End-to-end engine coverage: grid geometry, assembly, determinism,
//! and failure atomicity

use image::{ImageFormat, RgbImage};
use mosatile::MosaicError;
use mosatile::algorithm::executor::{Algorithm, MosaicConfig, MosaicEngine};
use mosatile::spatial::assembly::{assemble_rows, stack_rows};
use mosatile::spatial::sampler;
use std::io::Cursor;

fn png_bytes(image: &RgbImage) -> Vec<u8> {
    let mut bytes = Vec::new();
    if image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .is_err()
    {
        unreachable!("in-memory PNG encoding cannot fail");
    }
    bytes
}

fn solid(width: u32, height: u32, rgb: [u8; 3]) -> Vec<u8> {
    png_bytes(&RgbImage::from_pixel(width, height, image::Rgb(rgb)))
}

fn textured(width: u32, height: u32) -> Vec<u8> {
    let image = RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([
            ((x * 7 + y * 13) % 256) as u8,
            ((x * 3 + y * 29) % 256) as u8,
            ((x * 17 + y * 5) % 256) as u8,
        ])
    });
    png_bytes(&image)
}

fn brute_config(width: u32, height: u32, block_size: u32) -> MosaicConfig {
    MosaicConfig {
        width,
        height,
        block_size,
        algorithm: Algorithm::Brute,
        climb_distance: 10,
        number_of_climbers: 4,
    }
}

fn varied_pool() -> Vec<Vec<u8>> {
    [
        [255, 0, 0],
        [0, 255, 0],
        [0, 0, 255],
        [255, 255, 255],
        [0, 0, 0],
        [128, 128, 0],
        [0, 128, 128],
        [200, 100, 50],
    ]
    .iter()
    .map(|&rgb| solid(16, 16, rgb))
    .collect()
}

#[test]
fn test_grid_truncates_remainder_margin() {
    let config = brute_config(100, 80, 30);
    let Ok(engine) = MosaicEngine::new(config, &textured(100, 80), &varied_pool()) else {
        unreachable!("valid inputs must build an engine");
    };

    assert_eq!(engine.grid().rows(), 2);
    assert_eq!(engine.grid().cols(), 3);

    let Ok(mosaic) = engine.generate() else {
        unreachable!("valid inputs must generate");
    };
    let Ok(composite) = image::load_from_memory(&mosaic.png) else {
        unreachable!("generated mosaic must decode");
    };

    // 3x2 blocks of 30px; the 10px and 20px margins are dropped
    assert_eq!(composite.width(), 90);
    assert_eq!(composite.height(), 60);
}

#[test]
fn test_block_count_matches_grid() {
    let config = brute_config(60, 60, 20);
    let Ok(engine) = MosaicEngine::new(config, &textured(60, 60), &varied_pool()) else {
        unreachable!("valid inputs must build an engine");
    };

    let Ok(colors) = engine.block_colors() else {
        unreachable!("in-bounds grid must sample");
    };
    assert_eq!(colors.len(), engine.grid().block_count());
    assert_eq!(colors.dim(), (3, 3));
}

#[test]
fn test_two_by_two_round_trip() {
    let tile = RgbImage::from_pixel(10, 10, image::Rgb([50, 60, 70]));
    let tiles = vec![&tile, &tile, &tile, &tile];

    let Ok(strips) = assemble_rows(&tiles, 2, 2, 10) else {
        unreachable!("matching tile count must assemble");
    };
    assert_eq!(strips.len(), 2);

    let Ok(composite) = stack_rows(&strips) else {
        unreachable!("non-empty strips must stack");
    };
    assert_eq!(composite.dimensions(), (20, 20));
}

#[test]
fn test_assemble_rejects_wrong_tile_count() {
    let tile = RgbImage::from_pixel(10, 10, image::Rgb([0, 0, 0]));
    let tiles = vec![&tile, &tile, &tile];

    assert!(matches!(
        assemble_rows(&tiles, 2, 2, 10),
        Err(MosaicError::InvalidParameter { .. })
    ));
}

#[test]
fn test_near_red_block_selects_red_candidate() {
    let config = brute_config(20, 20, 20);
    let pool = vec![
        solid(16, 16, [255, 0, 0]),
        solid(16, 16, [0, 255, 0]),
        solid(16, 16, [0, 0, 255]),
        solid(16, 16, [255, 255, 255]),
    ];

    let Ok(engine) = MosaicEngine::new(config, &solid(20, 20, [250, 5, 5]), &pool) else {
        unreachable!("valid inputs must build an engine");
    };
    let Ok(mosaic) = engine.generate() else {
        unreachable!("valid inputs must generate");
    };

    assert!(mosaic.match_info.average_distance < 2.5);
    assert!(mosaic.match_info.worst_distance < 2.5);

    let Ok(composite) = image::load_from_memory(&mosaic.png) else {
        unreachable!("generated mosaic must decode");
    };
    let center = composite.to_rgb8().get_pixel(10, 10).0;
    assert_eq!(center, [255, 0, 0], "the red candidate should tile the block");
}

#[test]
fn test_identical_inputs_produce_identical_output() {
    let target = textured(64, 64);
    let pool = varied_pool();

    for algorithm in [Algorithm::Brute, Algorithm::RgbHill, Algorithm::HsvHill] {
        let config = MosaicConfig {
            algorithm,
            ..brute_config(64, 64, 16)
        };

        let Ok(first) = MosaicEngine::new(config, &target, &pool) else {
            unreachable!("valid inputs must build an engine");
        };
        let Ok(second) = MosaicEngine::new(config, &target, &pool) else {
            unreachable!("valid inputs must build an engine");
        };

        let (Ok(a), Ok(b)) = (first.generate(), second.generate()) else {
            unreachable!("valid inputs must generate");
        };

        assert_eq!(a.png, b.png, "composite bytes must be identical");
        assert!(
            (a.match_info.average_distance - b.match_info.average_distance).abs() < f64::EPSILON
        );
        assert!((a.match_info.worst_distance - b.match_info.worst_distance).abs() < f64::EPSILON);
    }
}

#[test]
fn test_hill_strategies_never_beat_brute_average() {
    let target = textured(80, 80);
    let pool = varied_pool();

    let run = |algorithm: Algorithm| {
        let config = MosaicConfig {
            algorithm,
            ..brute_config(80, 80, 16)
        };
        let Ok(engine) = MosaicEngine::new(config, &target, &pool) else {
            unreachable!("valid inputs must build an engine");
        };
        let Ok(mosaic) = engine.generate() else {
            unreachable!("valid inputs must generate");
        };
        mosaic.match_info
    };

    let baseline = run(Algorithm::Brute);
    let rgb = run(Algorithm::RgbHill);
    let hsv = run(Algorithm::HsvHill);

    assert!(rgb.average_distance >= baseline.average_distance - 1e-12);
    assert!(hsv.average_distance >= baseline.average_distance - 1e-12);
}

#[test]
fn test_empty_pool_is_rejected_before_processing() {
    let buffers: Vec<Vec<u8>> = Vec::new();
    let result = MosaicEngine::new(brute_config(40, 40, 20), &textured(40, 40), &buffers);

    assert!(matches!(result, Err(MosaicError::EmptyPool)));
}

#[test]
fn test_undecodable_target_is_rejected() {
    let result = MosaicEngine::new(
        brute_config(40, 40, 20),
        b"not an image at all",
        &varied_pool(),
    );

    assert!(matches!(result, Err(MosaicError::Decode { .. })));
}

#[test]
fn test_region_average_bounds_are_enforced() {
    let image = RgbImage::from_pixel(10, 10, image::Rgb([5, 5, 5]));

    assert!(matches!(
        sampler::region_average(&image, 5, 5, 10),
        Err(MosaicError::Bounds { .. })
    ));

    let Ok(average) = sampler::region_average(&image, 0, 0, 10) else {
        unreachable!("in-bounds region must average");
    };
    assert_eq!((average.r, average.g, average.b), (5, 5, 5));
}

#[test]
fn test_configuration_validation() {
    let valid = brute_config(40, 40, 20);
    assert!(valid.validate().is_ok());

    let zero_block = MosaicConfig {
        block_size: 0,
        ..valid
    };
    assert!(matches!(
        zero_block.validate(),
        Err(MosaicError::InvalidParameter { .. })
    ));

    let oversized_block = MosaicConfig {
        block_size: 50,
        ..valid
    };
    assert!(matches!(
        oversized_block.validate(),
        Err(MosaicError::InvalidParameter { .. })
    ));

    let no_climb = MosaicConfig {
        algorithm: Algorithm::RgbHill,
        climb_distance: 0,
        ..valid
    };
    assert!(matches!(
        no_climb.validate(),
        Err(MosaicError::InvalidParameter { .. })
    ));

    let lone_climber = MosaicConfig {
        algorithm: Algorithm::HsvHill,
        number_of_climbers: 1,
        ..valid
    };
    assert!(matches!(
        lone_climber.validate(),
        Err(MosaicError::InvalidParameter { .. })
    ));
}
