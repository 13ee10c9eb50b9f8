use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use thiserror::Error;

pub const BYTES_PER_PIXEL: usize = 4;
const ALPHA_OFFSET: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PixelBufferError {
    #[error("pixel at x:{}, y:{} outside of {side}x{side} buffer", .pixel.x, .pixel.y)]
    PixelOutsideBounds { pixel: Point, side: u32 },
    #[error("expected {expected} alpha values, got {actual}")]
    AlphaCountMismatch { expected: usize, actual: usize },
}

/// Square RGBA buffer. The RGB channels hold a single background colour for
/// the buffer's whole life; renders only ever touch the alpha channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    side: u32,
    background: Colour,
    buffer: Vec<u8>,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(side: u32, background: Colour) -> Self {
        let pixel_count = side as usize * side as usize;
        let mut buffer = Vec::with_capacity(pixel_count * BYTES_PER_PIXEL);

        for _ in 0..pixel_count {
            buffer.extend_from_slice(&[background.r, background.g, background.b, 0]);
        }

        Self {
            side,
            background,
            buffer,
        }
    }

    #[must_use]
    pub fn side(&self) -> u32 {
        self.side
    }

    #[must_use]
    pub fn background(&self) -> Colour {
        self.background
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.side as usize * self.side as usize
    }

    /// Raw RGBA bytes, row-major.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    pub fn alphas(&self) -> impl Iterator<Item = u8> + '_ {
        self.buffer
            .chunks_exact(BYTES_PER_PIXEL)
            .map(|pixel| pixel[ALPHA_OFFSET])
    }

    pub fn alpha(&self, pixel: Point) -> Result<u8, PixelBufferError> {
        let offset = self.byte_offset(pixel)?;

        Ok(self.buffer[offset + ALPHA_OFFSET])
    }

    pub fn set_alpha(&mut self, pixel: Point, alpha: u8) -> Result<(), PixelBufferError> {
        let offset = self.byte_offset(pixel)?;
        self.buffer[offset + ALPHA_OFFSET] = alpha;

        Ok(())
    }

    /// Overwrites every alpha value in one pass. The slice must hold exactly
    /// one value per pixel in row-major order; on mismatch nothing is written.
    pub fn write_alphas(&mut self, alphas: &[u8]) -> Result<(), PixelBufferError> {
        if alphas.len() != self.pixel_count() {
            return Err(PixelBufferError::AlphaCountMismatch {
                expected: self.pixel_count(),
                actual: alphas.len(),
            });
        }

        for (pixel, &alpha) in self.buffer.chunks_exact_mut(BYTES_PER_PIXEL).zip(alphas) {
            pixel[ALPHA_OFFSET] = alpha;
        }

        Ok(())
    }

    fn byte_offset(&self, pixel: Point) -> Result<usize, PixelBufferError> {
        if pixel.x >= self.side || pixel.y >= self.side {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                side: self.side,
            });
        }

        Ok((pixel.y as usize * self.side as usize + pixel.x as usize) * BYTES_PER_PIXEL)
    }
}
