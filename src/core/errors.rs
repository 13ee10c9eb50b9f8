use thiserror::Error;

/// A render parameter outside the range the evaluator accepts.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InvalidParameter {
    #[error("grid side must be greater than zero")]
    ZeroSide,
    #[error("scale must be a positive finite number, got {0}")]
    NonPositiveScale(f64),
    #[error("maximum iterations must be greater than zero")]
    ZeroMaxIterations,
    #[error("escape radius must be a positive finite number, got {0}")]
    NonPositiveEscapeRadius(f64),
    #[error("escape radius {0:e} is too large: its square overflows")]
    EscapeRadiusOverflow(f64),
    #[error("julia constant must be finite, got ({real}, {imag})")]
    NonFiniteJuliaConstant { real: f64, imag: f64 },
    #[error("no julia preset at index {index} (expected 0..{count})")]
    UnknownJuliaPreset { index: usize, count: usize },
}
