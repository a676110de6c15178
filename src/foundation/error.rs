/// Convenience result type used across glitchtape.
pub type GlitchResult<T> = Result<T, GlitchError>;

/// Top-level error taxonomy used by pipeline and codec APIs.
#[derive(thiserror::Error, Debug)]
pub enum GlitchError {
    /// Decoded image is not 8-bit RGBA compatible.
    #[error("unsupported pixel format: {0}")]
    UnsupportedPixelFormat(String),

    /// A distortion parameter was rejected before processing began.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Pixel buffer descriptor does not describe its bytes.
    #[error("buffer error: {0}")]
    Buffer(String),

    /// Parameter file could not be parsed.
    #[error("config error: {0}")]
    Config(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GlitchError {
    /// Build a [`GlitchError::UnsupportedPixelFormat`] value.
    pub fn unsupported_pixel_format(msg: impl Into<String>) -> Self {
        Self::UnsupportedPixelFormat(msg.into())
    }

    /// Build a [`GlitchError::InvalidParameter`] value.
    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }

    /// Build a [`GlitchError::Buffer`] value.
    pub fn buffer(msg: impl Into<String>) -> Self {
        Self::Buffer(msg.into())
    }

    /// Build a [`GlitchError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
