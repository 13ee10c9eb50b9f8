mod controllers;
mod core;

pub use crate::controllers::interactive::{
    FrameData, FramePresenter, InteractiveController, RenderError, RenderEvent,
};
pub use crate::controllers::session::{ExplorerSession, MAX_SCALE, MIN_SCALE, SCALE_STEP};
pub use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
pub use crate::core::actions::generate_escapes::generate_escapes::generate_escapes;
pub use crate::core::actions::generate_escapes::generate_escapes_parallel_rayon::{
    GenerateEscapesError, generate_escapes_parallel_rayon,
    generate_escapes_parallel_rayon_cancelable,
};
pub use crate::core::actions::generate_escapes::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::colouring::mode::ColouringMode;
pub use crate::core::colouring::opacity::{OpacityMap, opacity, quantize_alpha};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::point::Point;
pub use crate::core::data::render_request::RenderRequest;
pub use crate::core::data::view::ViewParameters;
pub use crate::core::errors::InvalidParameter;
pub use crate::core::evaluator::{EvaluateError, FractalEvaluator, evaluate};
pub use crate::core::fractals::algorithm::{Escape, EscapeTimeAlgorithm, EscapeTimeError};
pub use crate::core::fractals::family::{EscapeStrategy, FamilyKind, FractalFamily};
pub use crate::core::fractals::julia_presets::{JULIA_PRESETS, julia_preset};
pub use crate::core::fractals::params::FractalParameters;
pub use crate::core::fractals::render_config::RenderConfig;
