use crate::{
    foundation::{buffer::PixelBuffer, error::GlitchResult, math::shift},
    noise::NoiseSource,
    params::DistortionParameters,
};

/// Tear block currently in effect; survives across rows until the next block starts.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BlockState {
    /// Horizontal shift shared by every pixel of the block.
    pub line_offset: i64,
    /// Extra horizontal shift per row below the block's first row.
    pub stride_rate: f64,
    /// Row on which the block started.
    pub block_start_y: usize,
}

impl BlockState {
    /// Horizontal skew for row `y`; zero on the block's first row.
    pub fn stride_offset(&self, y: usize) -> i64 {
        (self.stride_rate * (y as f64 - self.block_start_y as f64)) as i64
    }
}

/// Stage 1: dissolve blur plus block tearing.
///
/// Each destination pixel copies a source pixel displaced by Gaussian jitter, the active tear
/// block's offset and its linear skew. Roughly every `block_height` rows a new block begins.
#[tracing::instrument(skip_all, fields(width = src.width(), height = src.height()))]
pub fn dissolve<N: NoiseSource + ?Sized>(
    src: &PixelBuffer,
    params: &DistortionParameters,
    noise: &mut N,
) -> GlitchResult<PixelBuffer> {
    params.validate()?;
    let (width, height) = (src.width(), src.height());
    let mut dst = PixelBuffer::new(width, height)?;
    let block_chance = u64::from(params.block_height).saturating_mul(width as u64);

    let mut block = BlockState::default();
    let mut blocks_started = 0usize;
    for y in 0..height {
        for x in 0..width {
            if noise.uniform_int(block_chance) == 0 {
                block = BlockState {
                    line_offset: noise.offset(params.block_offset_strength),
                    stride_rate: noise.normal() * params.stride_magnitude,
                    block_start_y: y,
                };
                blocks_started += 1;
            }

            let offset_x = noise
                .offset(params.blur_magnitude)
                .saturating_add(block.line_offset)
                .saturating_add(block.stride_offset(y));
            let offset_y = noise.offset(params.blur_magnitude);

            let px = src.pixel(shift(x, offset_x, width), shift(y, offset_y, height));
            dst.set_pixel(x, y, px);
        }
    }

    tracing::debug!(blocks_started, "dissolve pass complete");
    Ok(dst)
}

#[cfg(test)]
#[path = "../../tests/unit/stages/dissolve.rs"]
mod tests;
