use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::{GlitchError, GlitchResult};

/// Every numeric knob of the three distortion stages.
///
/// Missing fields in a JSON parameter file take the defaults below.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DistortionParameters {
    /// Std. dev. of the per-pixel dissolve jitter.
    pub blur_magnitude: f64,
    /// Average number of rows between tear blocks.
    pub block_height: u32,
    /// Std. dev. of a tear block's horizontal offset.
    pub block_offset_strength: f64,
    /// Std. dev. of a tear block's vertical skew (pixels of shift per row).
    pub stride_magnitude: f64,
    /// Std. dev. of the per-pixel scan lag random walk.
    pub scan_lag_strength: f64,
    /// Starting red scan lag, in pixels.
    pub initial_lag_r: f64,
    /// Starting green scan lag, in pixels.
    pub initial_lag_g: f64,
    /// Starting blue scan lag, in pixels.
    pub initial_lag_b: f64,
    /// Std. dev. of the red/blue edge smoothing offset.
    pub nondestructive_offset_stddev: f64,
    /// Brightness added by the contrast-safe brighten.
    pub brighten_amount: u8,
    /// Mean chromatic aberration offset.
    pub aberration_mean: i32,
    /// Std. dev. of the aberration offset; lower values give longer trails.
    pub aberration_stddev: f64,
}

impl Default for DistortionParameters {
    fn default() -> Self {
        Self {
            blur_magnitude: 7.0,
            block_height: 10,
            block_offset_strength: 30.0,
            stride_magnitude: 0.1,
            scan_lag_strength: 0.005,
            initial_lag_r: -7.0,
            initial_lag_g: 0.0,
            initial_lag_b: 3.0,
            nondestructive_offset_stddev: 10.0,
            brighten_amount: 37,
            aberration_mean: 10,
            aberration_stddev: 10.0,
        }
    }
}

impl DistortionParameters {
    /// Parse a JSON parameter document.
    pub fn from_json_str(json: &str) -> GlitchResult<Self> {
        serde_json::from_str(json).map_err(|e| GlitchError::config(e.to_string()))
    }

    /// Load a JSON parameter file.
    pub fn from_path(path: &Path) -> GlitchResult<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read parameters '{}'", path.display()))?;
        Self::from_json_str(&json)
    }

    /// Reject a zero block height and non-finite reals.
    pub fn validate(&self) -> GlitchResult<()> {
        if self.block_height == 0 {
            return Err(GlitchError::invalid_parameter("block_height must be > 0"));
        }
        let reals = [
            ("blur_magnitude", self.blur_magnitude),
            ("block_offset_strength", self.block_offset_strength),
            ("stride_magnitude", self.stride_magnitude),
            ("scan_lag_strength", self.scan_lag_strength),
            ("initial_lag_r", self.initial_lag_r),
            ("initial_lag_g", self.initial_lag_g),
            ("initial_lag_b", self.initial_lag_b),
            (
                "nondestructive_offset_stddev",
                self.nondestructive_offset_stddev,
            ),
            ("aberration_stddev", self.aberration_stddev),
        ];
        for (name, value) in reals {
            if !value.is_finite() {
                return Err(GlitchError::invalid_parameter(format!(
                    "{name} must be finite"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/params.rs"]
mod tests;
