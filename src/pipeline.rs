use crate::{
    foundation::{buffer::PixelBuffer, error::GlitchResult},
    noise::{NoiseSource, Seed, SeededNoise},
    params::DistortionParameters,
    stages::{aberration::aberrate_in_place, dissolve::dissolve, scan_lag::scan_lag},
};

/// Validated parameters, ready to run the three stages.
#[derive(Clone, Debug)]
pub struct Pipeline {
    params: DistortionParameters,
}

impl Pipeline {
    /// Reject invalid parameters up front so no run starts half-configured.
    pub fn new(params: DistortionParameters) -> GlitchResult<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    /// The validated parameters.
    pub fn params(&self) -> &DistortionParameters {
        &self.params
    }

    /// Run dissolve, scan lag and aberration in order, all drawing from `noise`.
    ///
    /// The source buffer is only read. The result has the source's width and height with tightly
    /// packed rows.
    #[tracing::instrument(skip_all, fields(width = src.width(), height = src.height()))]
    pub fn run<N: NoiseSource + ?Sized>(
        &self,
        src: &PixelBuffer,
        noise: &mut N,
    ) -> GlitchResult<PixelBuffer> {
        let dissolved = dissolve(src, &self.params, noise)?;
        let mut out = scan_lag(&dissolved, &self.params, noise)?;
        drop(dissolved);
        aberrate_in_place(&mut out, &self.params, noise);
        Ok(out)
    }
}

/// One-shot convenience: validate, seed a fresh generator and run the pipeline.
///
/// Returns the output together with the concrete seed, so clock-seeded runs can be reproduced.
pub fn glitch(
    src: &PixelBuffer,
    params: &DistortionParameters,
    seed: Seed,
) -> GlitchResult<(PixelBuffer, u64)> {
    let pipeline = Pipeline::new(params.clone())?;
    let mut noise = SeededNoise::new(seed);
    tracing::debug!(seed = noise.seed(), "seeded noise source");
    let out = pipeline.run(src, &mut noise)?;
    Ok((out, noise.seed()))
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
