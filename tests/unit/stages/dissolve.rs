use super::*;
use crate::{
    noise::{Seed, SeededNoise},
    stages::test_support::{ScriptedNoise, gradient},
};

#[test]
fn zero_noise_copies_source() {
    let src = gradient(5, 4);
    let mut noise = ScriptedNoise::zeros();
    let out = dissolve(&src, &DistortionParameters::default(), &mut noise).unwrap();
    assert_eq!(out, src);
}

#[test]
fn draws_one_int_and_two_normals_per_pixel_between_blocks() {
    let src = gradient(6, 3);
    let mut noise = ScriptedNoise::quiet();
    dissolve(&src, &DistortionParameters::default(), &mut noise).unwrap();
    assert_eq!(noise.int_calls, 18);
    assert_eq!(noise.normal_calls, 36);
}

#[test]
fn block_offset_shifts_every_following_pixel() {
    let src = gradient(4, 2);
    let params = DistortionParameters {
        block_offset_strength: 2.0,
        ..DistortionParameters::default()
    };
    // First pixel starts a block: line offset 1.0 * 2 = 2, no skew.
    let mut noise = ScriptedNoise::quiet()
        .with_ints(&[0])
        .with_normals(&[1.0, 0.0]);
    let out = dissolve(&src, &params, &mut noise).unwrap();
    for y in 0..2 {
        for x in 0..4 {
            assert_eq!(out.pixel(x, y), src.pixel((x + 2) % 4, y));
        }
    }
}

#[test]
fn block_stride_skews_rows_linearly() {
    let src = gradient(3, 3);
    let params = DistortionParameters {
        stride_magnitude: 1.0,
        ..DistortionParameters::default()
    };
    let mut noise = ScriptedNoise::quiet()
        .with_ints(&[0])
        .with_normals(&[0.0, 1.0]);
    let out = dissolve(&src, &params, &mut noise).unwrap();
    for y in 0..3 {
        for x in 0..3 {
            assert_eq!(out.pixel(x, y), src.pixel((x + y) % 3, y));
        }
    }
}

#[test]
fn stride_offset_is_zero_on_block_row() {
    let block = BlockState {
        line_offset: 5,
        stride_rate: 0.75,
        block_start_y: 4,
    };
    assert_eq!(block.stride_offset(4), 0);
    assert_eq!(block.stride_offset(5), 0);
    assert_eq!(block.stride_offset(6), 1);
    assert_eq!(block.stride_offset(8), 3);
}

#[test]
fn source_is_untouched_and_dimensions_preserved() {
    let src = PixelBuffer::from_raw(3, 2, 16, (0u8..32).collect()).unwrap();
    let before = src.clone();
    let mut noise = SeededNoise::new(Seed::Fixed(11));
    let out = dissolve(&src, &DistortionParameters::default(), &mut noise).unwrap();
    assert_eq!(src, before);
    assert_eq!((out.width(), out.height()), (3, 2));
    assert_eq!(out.as_bytes().len(), out.stride() * out.height());
}

#[test]
fn huge_offsets_on_single_pixel_do_not_panic() {
    let src = PixelBuffer::filled(1, 1, [1, 2, 3, 4]).unwrap();
    let params = DistortionParameters {
        blur_magnitude: 1e6,
        block_offset_strength: 1e9,
        ..DistortionParameters::default()
    };
    let mut noise = SeededNoise::new(Seed::Fixed(1));
    let out = dissolve(&src, &params, &mut noise).unwrap();
    assert_eq!(out.pixel(0, 0), [1, 2, 3, 4]);
}

#[test]
fn zero_block_height_is_rejected() {
    let src = gradient(2, 2);
    let params = DistortionParameters {
        block_height: 0,
        ..DistortionParameters::default()
    };
    let err = dissolve(&src, &params, &mut ScriptedNoise::zeros()).unwrap_err();
    assert!(matches!(err, crate::GlitchError::InvalidParameter(_)));
}
