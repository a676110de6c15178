use super::*;
use crate::stages::test_support::ScriptedNoise;

fn row(width: usize) -> PixelBuffer {
    let mut buf = PixelBuffer::new(width, 1).unwrap();
    for x in 0..width {
        let x8 = x as u8;
        buf.set_pixel(x, 0, [x8, 50 + x8, 100 + x8, 200 + x8]);
    }
    buf
}

fn unlagged(add: u8) -> DistortionParameters {
    DistortionParameters {
        initial_lag_r: 0.0,
        initial_lag_g: 0.0,
        initial_lag_b: 0.0,
        brighten_amount: add,
        ..DistortionParameters::default()
    }
}

#[test]
fn zero_noise_without_lag_or_brighten_is_identity() {
    let src = row(6);
    let mut noise = ScriptedNoise::zeros();
    let out = scan_lag(&src, &unlagged(0), &mut noise).unwrap();
    assert_eq!(out, src);
}

#[test]
fn initial_lags_shift_each_channel_independently() {
    let src = row(10);
    let params = DistortionParameters {
        brighten_amount: 0,
        ..DistortionParameters::default()
    };
    let mut noise = ScriptedNoise::zeros();
    let out = scan_lag(&src, &params, &mut noise).unwrap();
    for x in 0..10 {
        let r_src = (x + 10 - 7) % 10;
        let b_src = (x + 3) % 10;
        let px = out.pixel(x, 0);
        assert_eq!(px[0], src.pixel(r_src, 0)[0]);
        assert_eq!(px[1], src.pixel(x, 0)[1]);
        assert_eq!(px[2], src.pixel(b_src, 0)[2]);
        assert_eq!(px[3], src.pixel(r_src, 0)[3], "alpha follows red");
    }
}

#[test]
fn edge_offset_pulls_red_and_blue_apart() {
    let src = row(8);
    let params = DistortionParameters {
        nondestructive_offset_stddev: 2.0,
        ..unlagged(0)
    };
    let mut noise = ScriptedNoise::zeros().with_normals(&[0.0, 0.0, 0.0, 1.0]);
    let out = scan_lag(&src, &params, &mut noise).unwrap();
    let px = out.pixel(0, 0);
    assert_eq!(px[0], src.pixel(6, 0)[0]);
    assert_eq!(px[2], src.pixel(2, 0)[2]);
    assert_eq!(px[3], src.pixel(6, 0)[3]);
    assert_eq!(out.pixel(1, 0), src.pixel(1, 0));
}

#[test]
fn brightens_color_channels_only() {
    let src = PixelBuffer::filled(3, 2, [10, 20, 30, 77]).unwrap();
    let mut noise = ScriptedNoise::zeros();
    let out = scan_lag(&src, &unlagged(37), &mut noise).unwrap();
    for y in 0..2 {
        for x in 0..3 {
            assert_eq!(out.pixel(x, y), [46, 55, 63, 77]);
        }
    }
}

#[test]
fn draws_four_normals_per_pixel() {
    let src = row(5);
    let mut noise = ScriptedNoise::zeros();
    scan_lag(&src, &unlagged(0), &mut noise).unwrap();
    assert_eq!(noise.normal_calls, 20);
    assert_eq!(noise.int_calls, 0);
}

#[test]
fn lag_step_accumulates_in_channel_order() {
    let mut lag = ScanLagState {
        lag_r: 0.0,
        lag_g: 0.0,
        lag_b: 0.0,
    };
    let mut noise = ScriptedNoise::zeros().with_normals(&[1.0, 2.0, 3.0, 1.0, 1.0, 1.0]);
    lag.step(&mut noise, 0.5);
    lag.step(&mut noise, 0.5);
    assert_eq!(
        lag,
        ScanLagState {
            lag_r: 1.0,
            lag_g: 1.5,
            lag_b: 2.0,
        }
    );
}

#[test]
fn lag_persists_across_rows() {
    // Red lag reaches 1.0 on the first pixel and is never reset.
    let src = PixelBuffer::from_raw(
        2,
        2,
        8,
        vec![1, 0, 0, 255, 2, 0, 0, 255, 3, 0, 0, 255, 4, 0, 0, 255],
    )
    .unwrap();
    let params = DistortionParameters {
        scan_lag_strength: 1.0,
        ..unlagged(0)
    };
    let mut noise = ScriptedNoise::zeros().with_normals(&[1.0]);
    let out = scan_lag(&src, &params, &mut noise).unwrap();
    assert_eq!(out.pixel(0, 0)[0], 2);
    assert_eq!(out.pixel(1, 0)[0], 1);
    assert_eq!(out.pixel(0, 1)[0], 4);
    assert_eq!(out.pixel(1, 1)[0], 3);
}
