use rayon::prelude::*;

use crate::core::colouring::opacity::OpacityMap;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::fractals::algorithm::Escape;

/// Maps a complete frame of escapes to alpha and commits it to the buffer in
/// one write. The buffer is untouched if the frame does not fit it.
pub fn write_alphas(
    escapes: &[Escape],
    map: &OpacityMap,
    buffer: &mut PixelBuffer,
) -> Result<(), PixelBufferError> {
    let alphas: Vec<u8> = escapes.par_iter().map(|&escape| map.map(escape)).collect();

    buffer.write_alphas(&alphas)
}
