use crate::foundation::error::{GlitchError, GlitchResult};

/// Bytes per pixel; every buffer is interleaved 8-bit RGBA.
pub const BYTES_PER_PIXEL: usize = 4;

/// One pixel in memory order.
pub type Rgba8 = [u8; 4];

/// Raw interleaved RGBA8 pixel storage with an explicit row stride.
///
/// Pixel `(x, y)` starts at byte `stride * y + 4 * x`. Rows may carry padding past `4 * width`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    stride: usize,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Zeroed buffer with tightly packed rows.
    pub fn new(width: usize, height: usize) -> GlitchResult<Self> {
        let stride = packed_stride(width)?;
        let len = stride
            .checked_mul(height)
            .ok_or_else(|| GlitchError::buffer("buffer size overflow"))?;
        Ok(Self {
            width,
            height,
            stride,
            data: vec![0u8; len],
        })
    }

    /// Adopt decoded bytes described by `width`, `height` and `stride`.
    pub fn from_raw(width: usize, height: usize, stride: usize, data: Vec<u8>) -> GlitchResult<Self> {
        let min_stride = packed_stride(width)?;
        if stride < min_stride {
            return Err(GlitchError::buffer(format!(
                "stride {stride} is shorter than a {width}px row ({min_stride} bytes)"
            )));
        }
        let expected = stride
            .checked_mul(height)
            .ok_or_else(|| GlitchError::buffer("buffer size overflow"))?;
        if data.len() != expected {
            return Err(GlitchError::buffer(format!(
                "expected {expected} bytes (stride * height), got {}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            stride,
            data,
        })
    }

    /// Buffer of `width * height` copies of `px`.
    pub fn filled(width: usize, height: usize, px: Rgba8) -> GlitchResult<Self> {
        let mut buf = Self::new(width, height)?;
        for chunk in buf.data.chunks_exact_mut(BYTES_PER_PIXEL) {
            chunk.copy_from_slice(&px);
        }
        Ok(buf)
    }

    /// Width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Bytes between the starts of consecutive rows.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Raw bytes, `stride * height` long.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Give up the buffer, returning its raw bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Byte offset of pixel `(x, y)`.
    #[inline]
    pub fn offset_of(&self, x: usize, y: usize) -> usize {
        self.stride * y + BYTES_PER_PIXEL * x
    }

    /// RGBA of pixel `(x, y)`.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Rgba8 {
        let i = self.offset_of(x, y);
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    /// Overwrite pixel `(x, y)`.
    #[inline]
    pub fn set_pixel(&mut self, x: usize, y: usize, px: Rgba8) {
        let i = self.offset_of(x, y);
        self.data[i..i + BYTES_PER_PIXEL].copy_from_slice(&px);
    }

    /// Copy of the pixel data with row padding stripped (`width * height * 4` bytes).
    pub fn to_packed(&self) -> Vec<u8> {
        let row = BYTES_PER_PIXEL * self.width;
        if row == self.stride {
            return self.data.clone();
        }
        let mut out = Vec::with_capacity(row * self.height);
        for y in 0..self.height {
            let start = self.stride * y;
            out.extend_from_slice(&self.data[start..start + row]);
        }
        out
    }
}

fn packed_stride(width: usize) -> GlitchResult<usize> {
    width
        .checked_mul(BYTES_PER_PIXEL)
        .ok_or_else(|| GlitchError::buffer("row size overflow"))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/buffer.rs"]
mod tests;
