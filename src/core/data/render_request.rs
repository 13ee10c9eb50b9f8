use crate::core::colouring::mode::ColouringMode;
use crate::core::data::view::ViewParameters;
use crate::core::fractals::params::FractalParameters;

/// Snapshot of every input to one render.
///
/// `PartialEq` lets callers skip a render when nothing changed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderRequest {
    pub view: ViewParameters,
    pub fractal: FractalParameters,
    pub colouring: ColouringMode,
}
