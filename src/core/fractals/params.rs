use crate::core::data::complex::Complex;
use crate::core::errors::InvalidParameter;
use crate::core::fractals::family::FractalFamily;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FractalParameters {
    family: FractalFamily,
    max_iterations: u32,
    escape_radius: f64,
    escape_radius_squared: f64,
}

impl FractalParameters {
    pub fn new(
        family: FractalFamily,
        max_iterations: u32,
        escape_radius: f64,
    ) -> Result<Self, InvalidParameter> {
        if max_iterations == 0 {
            return Err(InvalidParameter::ZeroMaxIterations);
        }

        if !escape_radius.is_finite() || escape_radius <= 0.0 {
            return Err(InvalidParameter::NonPositiveEscapeRadius(escape_radius));
        }

        let escape_radius_squared = escape_radius * escape_radius;
        if !escape_radius_squared.is_finite() {
            return Err(InvalidParameter::EscapeRadiusOverflow(escape_radius));
        }

        if let FractalFamily::Julia { constant } = family {
            if !constant.is_finite() {
                return Err(InvalidParameter::NonFiniteJuliaConstant {
                    real: constant.real,
                    imag: constant.imag,
                });
            }
        }

        Ok(Self {
            family,
            max_iterations,
            escape_radius,
            escape_radius_squared,
        })
    }

    pub fn julia(
        constant: Complex,
        max_iterations: u32,
        escape_radius: f64,
    ) -> Result<Self, InvalidParameter> {
        Self::new(FractalFamily::Julia { constant }, max_iterations, escape_radius)
    }

    pub fn mandelbrot(max_iterations: u32, escape_radius: f64) -> Result<Self, InvalidParameter> {
        Self::new(FractalFamily::Mandelbrot, max_iterations, escape_radius)
    }

    #[must_use]
    pub fn family(&self) -> FractalFamily {
        self.family
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn escape_radius(&self) -> f64 {
        self.escape_radius
    }

    #[must_use]
    pub fn escape_radius_squared(&self) -> f64 {
        self.escape_radius_squared
    }
}
