//! glitchtape turns a decoded RGBA image into a "glitched" variant reminiscent of analog video
//! corruption: dissolve blur, block tearing, per-channel scan lag, chromatic aberration and color
//! trails.
//!
//! # Pipeline overview
//!
//! 1. **Dissolve**: `PixelBuffer -> PixelBuffer`, per-pixel jitter plus tear blocks
//! 2. **Scan lag**: `PixelBuffer -> PixelBuffer`, per-channel drift plus brightening
//! 3. **Aberration**: in place, red/blue misregistration with trailing feedback
//!
//! Every stage draws from one [`NoiseSource`] passed in by the caller, so a fixed [`Seed`]
//! reproduces the output byte for byte. Addressing wraps around the image edges.
//!
//! PNG decoding/encoding ([`decode_png`], [`encode_png`]) sits outside the pipeline; the stages
//! only ever see a [`PixelBuffer`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(missing_docs_in_private_items)]

mod codec;
mod foundation;
mod noise;
mod params;
mod pipeline;
mod stages;

pub use codec::png::{DecodeMode, decode_png, encode_png, read_png, write_png};
pub use foundation::buffer::{BYTES_PER_PIXEL, PixelBuffer, Rgba8};
pub use foundation::error::{GlitchError, GlitchResult};
pub use foundation::math::{brighten, fold_offset, wrap};
pub use noise::{NoiseSource, Seed, SeededNoise};
pub use params::DistortionParameters;
pub use pipeline::{Pipeline, glitch};
pub use stages::aberration::aberrate_in_place;
pub use stages::dissolve::{BlockState, dissolve};
pub use stages::scan_lag::{ScanLagState, scan_lag};
