//! The rendering context: one owned pixel buffer plus the parameters that
//! last filled it.

use std::time::Instant;

use log::debug;
use thiserror::Error;

use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
use crate::core::actions::generate_escapes::generate_escapes_parallel_rayon::{
    GenerateEscapesError, generate_escapes_parallel_rayon_cancelable,
};
use crate::core::actions::write_alphas::write_alphas;
use crate::core::colouring::opacity::OpacityMap;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::render_request::RenderRequest;
use crate::core::errors::InvalidParameter;
use crate::core::fractals::algorithm::{EscapeTimeAlgorithm, EscapeTimeError};

#[derive(Debug, Error)]
pub enum EvaluateError {
    #[error(transparent)]
    InvalidParameter(#[from] InvalidParameter),
    #[error("request is for a {requested}x{requested} grid but the buffer is {side}x{side}")]
    SideMismatch { requested: u32, side: u32 },
    #[error(transparent)]
    Cancelled(#[from] Cancelled),
    #[error(transparent)]
    Algorithm(#[from] EscapeTimeError),
    #[error(transparent)]
    PixelBuffer(#[from] PixelBufferError),
}

impl From<GenerateEscapesError<EscapeTimeError>> for EvaluateError {
    fn from(err: GenerateEscapesError<EscapeTimeError>) -> Self {
        match err {
            GenerateEscapesError::Cancelled(cancelled) => Self::Cancelled(cancelled),
            GenerateEscapesError::Algorithm(err) => Self::Algorithm(err),
        }
    }
}

/// Owns the frame buffer for its whole life and refills its alpha channel on
/// every evaluation.
#[derive(Debug, Clone)]
pub struct FractalEvaluator {
    buffer: PixelBuffer,
    last_request: Option<RenderRequest>,
}

impl FractalEvaluator {
    pub fn new(side: u32, background: Colour) -> Result<Self, InvalidParameter> {
        if side == 0 {
            return Err(InvalidParameter::ZeroSide);
        }

        Ok(Self {
            buffer: PixelBuffer::new(side, background),
            last_request: None,
        })
    }

    #[must_use]
    pub fn side(&self) -> u32 {
        self.buffer.side()
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    /// Parameters of the last frame committed to the buffer.
    #[must_use]
    pub fn last_request(&self) -> Option<&RenderRequest> {
        self.last_request.as_ref()
    }

    pub fn evaluate(&mut self, request: &RenderRequest) -> Result<&PixelBuffer, EvaluateError> {
        self.evaluate_cancelable(request, &NeverCancel)
    }

    /// Renders `request` into the owned buffer.
    ///
    /// The whole frame is computed before anything is written, so a cancelled
    /// or failed evaluation leaves the previous frame intact.
    pub fn evaluate_cancelable<C: CancelToken>(
        &mut self,
        request: &RenderRequest,
        cancel: &C,
    ) -> Result<&PixelBuffer, EvaluateError> {
        let side = self.buffer.side();

        if request.view.side() != side {
            return Err(EvaluateError::SideMismatch {
                requested: request.view.side(),
                side,
            });
        }

        let start = Instant::now();
        let algorithm = EscapeTimeAlgorithm::new(request.view, &request.fractal);
        let escapes = generate_escapes_parallel_rayon_cancelable(&algorithm, cancel)?;

        let map = OpacityMap::new(&request.fractal, request.colouring);
        write_alphas(&escapes, &map, &mut self.buffer)?;
        self.last_request = Some(*request);

        debug!(
            "{} {}x{} rendered in {:?} ({} iterations, {} colouring)",
            request.fractal.family().kind(),
            side,
            side,
            start.elapsed(),
            request.fractal.max_iterations(),
            request.colouring.display_name()
        );

        Ok(&self.buffer)
    }
}

/// One-shot render into a freshly allocated buffer.
pub fn evaluate(request: &RenderRequest, background: Colour) -> Result<PixelBuffer, EvaluateError> {
    let mut evaluator = FractalEvaluator::new(request.view.side(), background)?;
    evaluator.evaluate(request)?;

    Ok(evaluator.buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::generate_escapes::generate_escapes::generate_escapes;
    use crate::core::actions::generate_escapes::ports::fractal_algorithm::FractalAlgorithm;
    use crate::core::colouring::mode::ColouringMode;
    use crate::core::data::complex::Complex;
    use crate::core::data::point::Point;
    use crate::core::data::view::ViewParameters;
    use crate::core::fractals::julia_presets::julia_preset;
    use crate::core::fractals::params::FractalParameters;

    fn fnv1a(bytes: impl Iterator<Item = u8>) -> u64 {
        bytes.fold(0xcbf2_9ce4_8422_2325, |hash, byte| {
            (hash ^ byte as u64).wrapping_mul(0x0000_0100_0000_01b3)
        })
    }

    fn julia_request(side: u32, preset: usize, colouring: ColouringMode) -> RenderRequest {
        RenderRequest {
            view: ViewParameters::new(side, 2.8).unwrap(),
            fractal: FractalParameters::julia(julia_preset(preset).unwrap(), 1000, 20.0).unwrap(),
            colouring,
        }
    }

    fn mandelbrot_request(side: u32, colouring: ColouringMode) -> RenderRequest {
        RenderRequest {
            view: ViewParameters::new(side, 2.8).unwrap(),
            fractal: FractalParameters::mandelbrot(400, 20.0).unwrap(),
            colouring,
        }
    }

    #[test]
    fn test_julia_default_golden_checksum() {
        let buffer = evaluate(&julia_request(256, 0, ColouringMode::smooth()), Colour::TEAL).unwrap();

        assert_eq!(fnv1a(buffer.alphas()), 0x6ef4_1d0e_50af_aa7d);
        assert_eq!(buffer.alphas().map(u64::from).sum::<u64>(), 1_746_860);
    }

    #[test]
    fn test_julia_discrete_golden_checksum() {
        let buffer = evaluate(&julia_request(256, 0, ColouringMode::discrete()), Colour::TEAL).unwrap();

        assert_eq!(fnv1a(buffer.alphas()), 0xbd5b_db9e_f41a_9e1a);
    }

    #[test]
    fn test_mandelbrot_default_golden_checksum() {
        let buffer = evaluate(&mandelbrot_request(256, ColouringMode::smooth()), Colour::TEAL).unwrap();

        assert_eq!(fnv1a(buffer.alphas()), 0x5e79_1925_2b2e_685a);
        assert_eq!(buffer.alphas().filter(|&alpha| alpha == 0).count(), 12_743);
    }

    #[test]
    fn test_mandelbrot_discrete_golden_checksum() {
        let buffer = evaluate(&mandelbrot_request(256, ColouringMode::discrete()), Colour::TEAL).unwrap();

        assert_eq!(fnv1a(buffer.alphas()), 0x807f_e361_400d_ee05);
    }

    #[test]
    fn test_points_in_set_are_transparent() {
        let request = mandelbrot_request(32, ColouringMode::smooth());
        let algorithm = EscapeTimeAlgorithm::new(request.view, &request.fractal);
        let escapes = generate_escapes(&algorithm).unwrap();
        let buffer = evaluate(&request, Colour::TEAL).unwrap();

        let mut in_set = 0;
        for (escape, alpha) in escapes.iter().zip(buffer.alphas()) {
            if !escape.escaped(400) {
                in_set += 1;
                assert_eq!(alpha, 0);
            }
        }
        assert!(in_set > 0, "expected part of the grid inside the set");
    }

    #[test]
    fn test_colouring_mode_does_not_change_iterations() {
        let smooth = mandelbrot_request(32, ColouringMode::smooth());
        let discrete = RenderRequest {
            colouring: ColouringMode::discrete(),
            ..smooth
        };

        let smooth_escapes =
            generate_escapes(&EscapeTimeAlgorithm::new(smooth.view, &smooth.fractal)).unwrap();
        let discrete_escapes =
            generate_escapes(&EscapeTimeAlgorithm::new(discrete.view, &discrete.fractal)).unwrap();

        assert_eq!(smooth_escapes, discrete_escapes);
        assert_ne!(
            evaluate(&smooth, Colour::TEAL).unwrap(),
            evaluate(&discrete, Colour::TEAL).unwrap()
        );
    }

    #[test]
    fn test_julia_constant_is_wired_into_recurrence() {
        let first = julia_request(32, 0, ColouringMode::smooth());
        let second = julia_request(32, 1, ColouringMode::smooth());

        let first_escapes =
            generate_escapes(&EscapeTimeAlgorithm::new(first.view, &first.fractal)).unwrap();
        let second_escapes =
            generate_escapes(&EscapeTimeAlgorithm::new(second.view, &second.fractal)).unwrap();

        assert!(
            first_escapes
                .iter()
                .zip(&second_escapes)
                .any(|(a, b)| a.iterations != b.iterations)
        );
    }

    #[test]
    fn test_evaluate_twice_is_byte_identical() {
        let request = julia_request(48, 3, ColouringMode::smooth());
        let mut evaluator = FractalEvaluator::new(48, Colour::TEAL).unwrap();

        let first = evaluator.evaluate(&request).unwrap().clone();
        let second = evaluator.evaluate(&request).unwrap();

        assert_eq!(first.as_bytes(), second.as_bytes());
    }

    #[test]
    fn test_corner_pixels_use_interior_formula() {
        let side = 16;
        let request = julia_request(side, 0, ColouringMode::smooth());
        let algorithm = EscapeTimeAlgorithm::new(request.view, &request.fractal);
        let map = OpacityMap::new(&request.fractal, request.colouring);
        let buffer = evaluate(&request, Colour::TEAL).unwrap();
        let constant = julia_preset(0).unwrap();

        for index in [0, side - 1] {
            let coordinate = index as f64 / side as f64 * 2.8 - 1.4;
            let escape = algorithm.iterate(Complex::new(coordinate, coordinate), constant);
            let pixel = Point { x: index, y: index };

            assert_eq!(algorithm.compute(pixel).unwrap(), escape);
            assert_eq!(buffer.alpha(pixel).unwrap(), map.map(escape));
        }
    }

    #[test]
    fn test_buffer_is_reused_and_keeps_background() {
        let background = Colour { r: 10, g: 20, b: 30 };
        let mut evaluator = FractalEvaluator::new(8, background).unwrap();
        let before = evaluator.buffer().as_bytes().as_ptr();

        evaluator
            .evaluate(&mandelbrot_request(8, ColouringMode::smooth()))
            .unwrap();

        assert_eq!(evaluator.buffer().as_bytes().as_ptr(), before);
        for pixel in evaluator.buffer().as_bytes().chunks_exact(4) {
            assert_eq!(&pixel[..3], &[10, 20, 30]);
        }
    }

    #[test]
    fn test_cancelled_evaluation_keeps_previous_frame() {
        let mut evaluator = FractalEvaluator::new(16, Colour::TEAL).unwrap();
        let first = julia_request(16, 0, ColouringMode::smooth());
        let previous = evaluator.evaluate(&first).unwrap().clone();

        let result = evaluator.evaluate_cancelable(&mandelbrot_request(16, ColouringMode::smooth()), &|| true);

        assert!(matches!(result, Err(EvaluateError::Cancelled(_))));
        assert_eq!(evaluator.buffer(), &previous);
        assert_eq!(evaluator.last_request(), Some(&first));
    }

    #[test]
    fn test_side_mismatch_is_rejected() {
        let mut evaluator = FractalEvaluator::new(16, Colour::TEAL).unwrap();
        let result = evaluator.evaluate(&julia_request(32, 0, ColouringMode::smooth()));

        assert!(matches!(
            result,
            Err(EvaluateError::SideMismatch {
                requested: 32,
                side: 16
            })
        ));
        assert!(evaluator.last_request().is_none());
    }

    #[test]
    fn test_zero_side_evaluator_is_rejected() {
        assert_eq!(
            FractalEvaluator::new(0, Colour::TEAL).unwrap_err(),
            InvalidParameter::ZeroSide
        );
    }
}
