use crate::core::data::complex::Complex;

const MANDELBROT_HORIZONTAL_OFFSET: f64 = -0.7;
const MANDELBROT_SMOOTH_MULTIPLIER: f64 = 5.0;

/// Family selector without its parameters, for menus and config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FamilyKind {
    #[default]
    Julia,
    Mandelbrot,
}

impl FamilyKind {
    pub const ALL: &'static [Self] = &[Self::Julia, Self::Mandelbrot];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Julia => "Julia",
            Self::Mandelbrot => "Mandelbrot",
        }
    }
}

impl std::fmt::Display for FamilyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FractalFamily {
    /// z starts at the pixel, c is fixed for the whole image.
    Julia { constant: Complex },
    /// z and c both start at the pixel.
    Mandelbrot,
}

impl FractalFamily {
    #[must_use]
    pub const fn kind(&self) -> FamilyKind {
        match self {
            Self::Julia { .. } => FamilyKind::Julia,
            Self::Mandelbrot => FamilyKind::Mandelbrot,
        }
    }

    #[must_use]
    pub fn strategy(&self) -> EscapeStrategy {
        match *self {
            Self::Julia { constant } => EscapeStrategy {
                horizontal_offset: 0.0,
                smooth_multiplier: 1.0,
                fixed_constant: Some(constant),
            },
            Self::Mandelbrot => EscapeStrategy {
                horizontal_offset: MANDELBROT_HORIZONTAL_OFFSET,
                smooth_multiplier: MANDELBROT_SMOOTH_MULTIPLIER,
                fixed_constant: None,
            },
        }
    }
}

/// Everything that distinguishes one family inside the shared escape loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EscapeStrategy {
    pub horizontal_offset: f64,
    pub smooth_multiplier: f64,
    fixed_constant: Option<Complex>,
}

impl EscapeStrategy {
    /// Starting orbit point and additive constant for a pixel already mapped
    /// onto the plane (before the horizontal offset).
    #[must_use]
    pub fn seed(&self, real: f64, imag: f64) -> (Complex, Complex) {
        let z = Complex::new(real + self.horizontal_offset, imag);
        let c = self.fixed_constant.unwrap_or(z);

        (z, c)
    }
}
