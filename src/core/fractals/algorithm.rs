use crate::core::actions::generate_escapes::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::view::ViewParameters;
use crate::core::fractals::family::EscapeStrategy;
use crate::core::fractals::params::FractalParameters;
use thiserror::Error;

/// Where an orbit stopped.
///
/// `magnitude_squared` is `rr + ii` of the orbit point that ended the loop,
/// which is what the smooth colouring reads.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Escape {
    pub iterations: u32,
    pub magnitude_squared: f64,
}

impl Escape {
    #[must_use]
    pub fn escaped(&self, max_iterations: u32) -> bool {
        self.iterations < max_iterations
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum EscapeTimeError {
    #[error("pixel at x:{}, y:{} outside of {side}x{side} grid", .pixel.x, .pixel.y)]
    PixelOutsideGrid { pixel: Point, side: u32 },
}

/// Escape-time iteration of `z -> z² + c` shared by every family.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EscapeTimeAlgorithm {
    view: ViewParameters,
    strategy: EscapeStrategy,
    max_iterations: u32,
    escape_radius_squared: f64,
}

impl EscapeTimeAlgorithm {
    #[must_use]
    pub fn new(view: ViewParameters, params: &FractalParameters) -> Self {
        Self {
            view,
            strategy: params.family().strategy(),
            max_iterations: params.max_iterations(),
            escape_radius_squared: params.escape_radius_squared(),
        }
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn strategy(&self) -> EscapeStrategy {
        self.strategy
    }

    #[must_use]
    pub fn iterate(&self, z: Complex, c: Complex) -> Escape {
        let mut z = z;
        let mut iterations = 0;

        // The body runs before the first test, so rr and ii are always set.
        loop {
            let rr = z.real * z.real;
            let ii = z.imag * z.imag;

            z = Complex {
                real: rr - ii + c.real,
                imag: 2.0 * z.real * z.imag + c.imag,
            };

            // Negated so a NaN magnitude counts as escaped.
            #[allow(clippy::neg_cmp_op_on_partial_ord)]
            let outside = !(rr + ii <= self.escape_radius_squared);

            if iterations >= self.max_iterations || outside {
                return Escape {
                    iterations,
                    magnitude_squared: rr + ii,
                };
            }

            iterations += 1;
        }
    }
}

impl FractalAlgorithm for EscapeTimeAlgorithm {
    type Success = Escape;
    type Failure = EscapeTimeError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let side = self.view.side();

        if pixel.x >= side || pixel.y >= side {
            return Err(EscapeTimeError::PixelOutsideGrid { pixel, side });
        }

        let (real, imag) = self.view.pixel_to_plane(pixel);
        let (z, c) = self.strategy.seed(real, imag);

        Ok(self.iterate(z, c))
    }

    fn side(&self) -> u32 {
        self.view.side()
    }
}
