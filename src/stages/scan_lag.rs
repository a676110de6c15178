use crate::{
    foundation::{buffer::PixelBuffer, error::GlitchResult, math::brighten, math::shift},
    noise::NoiseSource,
    params::DistortionParameters,
};

/// Per-channel horizontal drift, accumulated over the whole image and never reset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScanLagState {
    /// Red lag, in pixels.
    pub lag_r: f64,
    /// Green lag, in pixels.
    pub lag_g: f64,
    /// Blue lag, in pixels.
    pub lag_b: f64,
}

impl ScanLagState {
    /// Lags at the start of an image.
    pub fn from_params(params: &DistortionParameters) -> Self {
        Self {
            lag_r: params.initial_lag_r,
            lag_g: params.initial_lag_g,
            lag_b: params.initial_lag_b,
        }
    }

    /// Advance each lag by one Gaussian step (red, green, blue draw order).
    pub fn step<N: NoiseSource + ?Sized>(&mut self, noise: &mut N, strength: f64) {
        self.lag_r += noise.normal() * strength;
        self.lag_g += noise.normal() * strength;
        self.lag_b += noise.normal() * strength;
    }
}

/// Stage 2: per-channel scan lag followed by contrast-safe brightening.
///
/// Red (with alpha) and blue are additionally pulled apart by a shared per-pixel edge offset.
#[tracing::instrument(skip_all, fields(width = src.width(), height = src.height()))]
pub fn scan_lag<N: NoiseSource + ?Sized>(
    src: &PixelBuffer,
    params: &DistortionParameters,
    noise: &mut N,
) -> GlitchResult<PixelBuffer> {
    let (width, height) = (src.width(), src.height());
    let mut dst = PixelBuffer::new(width, height)?;
    let add = params.brighten_amount;

    let mut lag = ScanLagState::from_params(params);
    for y in 0..height {
        for x in 0..width {
            lag.step(noise, params.scan_lag_strength);
            let edge = noise.offset(params.nondestructive_offset_stddev);

            let ra = src.pixel(
                shift(x, (lag.lag_r as i64).saturating_sub(edge), width),
                y,
            );
            let g = src.pixel(shift(x, lag.lag_g as i64, width), y)[1];
            let b = src.pixel(
                shift(x, (lag.lag_b as i64).saturating_add(edge), width),
                y,
            )[2];

            dst.set_pixel(
                x,
                y,
                [brighten(ra[0], add), brighten(g, add), brighten(b, add), ra[3]],
            );
        }
    }

    tracing::debug!(
        lag_r = lag.lag_r,
        lag_g = lag.lag_g,
        lag_b = lag.lag_b,
        "scan lag pass complete"
    );
    Ok(dst)
}

#[cfg(test)]
#[path = "../../tests/unit/stages/scan_lag.rs"]
mod tests;
