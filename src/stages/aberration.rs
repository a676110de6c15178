use crate::{
    foundation::{buffer::PixelBuffer, math::shift},
    noise::NoiseSource,
    params::DistortionParameters,
};

/// Stage 3: chromatic aberration with trails, in place.
///
/// Red/alpha come from `x + offset`, blue from `x - offset`, green stays put. Each pixel is
/// written back into `buf` before the next one is read, so earlier writes in a row feed later
/// reads and smear color along the row. Do not double-buffer this.
#[tracing::instrument(skip_all, fields(width = buf.width(), height = buf.height()))]
pub fn aberrate_in_place<N: NoiseSource + ?Sized>(
    buf: &mut PixelBuffer,
    params: &DistortionParameters,
    noise: &mut N,
) {
    let (width, height) = (buf.width(), buf.height());
    let mean = i64::from(params.aberration_mean);

    for y in 0..height {
        for x in 0..width {
            let offset_x = mean.saturating_add(noise.offset(params.aberration_stddev));

            let ra = buf.pixel(shift(x, offset_x, width), y);
            let g = buf.pixel(x, y)[1];
            let b = buf.pixel(shift(x, offset_x.saturating_neg(), width), y)[2];

            buf.set_pixel(x, y, [ra[0], g, b, ra[3]]);
        }
    }

    tracing::debug!("aberration pass complete");
}

#[cfg(test)]
#[path = "../../tests/unit/stages/aberration.rs"]
mod tests;
