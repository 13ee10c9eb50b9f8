use crate::core::colouring::mode::ColouringMode;
use crate::core::fractals::algorithm::Escape;
use crate::core::fractals::params::FractalParameters;

/// Turns escapes into alpha bytes for one parameter snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpacityMap {
    max_iterations: u32,
    mode: ColouringMode,
    smooth_multiplier: f64,
}

impl OpacityMap {
    #[must_use]
    pub fn new(params: &FractalParameters, mode: ColouringMode) -> Self {
        Self {
            max_iterations: params.max_iterations(),
            mode,
            smooth_multiplier: params.family().strategy().smooth_multiplier,
        }
    }

    #[must_use]
    pub fn map(&self, escape: Escape) -> u8 {
        quantize_alpha(opacity(
            escape,
            self.max_iterations,
            self.mode,
            self.smooth_multiplier,
        ))
    }
}

/// Opacity of a pixel before it is written into the 8-bit alpha channel.
///
/// Points that never escaped are fully transparent. In smooth mode the
/// fractional correction `log2(ln |z|)` is only defined for `|z|² > 1`; below
/// that the correction is dropped and the integer count is used as is.
#[must_use]
pub fn opacity(
    escape: Escape,
    max_iterations: u32,
    mode: ColouringMode,
    smooth_multiplier: f64,
) -> f64 {
    if !escape.escaped(max_iterations) {
        return 0.0;
    }

    let iterations = escape.iterations as f64;

    match mode {
        ColouringMode::Smooth { contrast } => {
            smooth_multiplier * contrast * smooth_iterations(iterations, escape.magnitude_squared)
        }
        ColouringMode::Discrete { contrast } => {
            contrast * ((iterations / max_iterations as f64).sqrt() * 255.0)
        }
    }
}

fn smooth_iterations(iterations: f64, magnitude_squared: f64) -> f64 {
    if magnitude_squared <= 1.0 {
        return iterations;
    }

    iterations - magnitude_squared.sqrt().ln().ln() / 2f64.ln()
}

/// Clamps to the channel range and rounds half to even. NaN becomes 0.
#[must_use]
pub fn quantize_alpha(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }

    value.clamp(0.0, 255.0).round_ties_even() as u8
}
