use crate::core::colouring::mode::{DEFAULT_DISCRETE_CONTRAST, DEFAULT_SMOOTH_CONTRAST};
use crate::core::data::colour::Colour;
use crate::core::fractals::family::FamilyKind;

pub const DEFAULT_SIDE: u32 = 256;
pub const DEFAULT_SCALE: f64 = 2.8;
pub const DEFAULT_ESCAPE_RADIUS: f64 = 20.0;
pub const DEFAULT_JULIA_MAX_ITERATIONS: u32 = 1000;
pub const DEFAULT_MANDELBROT_MAX_ITERATIONS: u32 = 400;

/// Start-up settings for a rendering session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    pub side: u32,
    pub background: Colour,
    pub scale: f64,
    pub escape_radius: f64,
    pub julia_max_iterations: u32,
    pub mandelbrot_max_iterations: u32,
    pub smooth_contrast: f64,
    pub discrete_contrast: f64,
    pub smooth: bool,
    pub family: FamilyKind,
    pub julia_preset: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            side: DEFAULT_SIDE,
            background: Colour::TEAL,
            scale: DEFAULT_SCALE,
            escape_radius: DEFAULT_ESCAPE_RADIUS,
            julia_max_iterations: DEFAULT_JULIA_MAX_ITERATIONS,
            mandelbrot_max_iterations: DEFAULT_MANDELBROT_MAX_ITERATIONS,
            smooth_contrast: DEFAULT_SMOOTH_CONTRAST,
            discrete_contrast: DEFAULT_DISCRETE_CONTRAST,
            smooth: true,
            family: FamilyKind::default(),
            julia_preset: 0,
        }
    }
}

impl RenderConfig {
    #[must_use]
    pub fn default_max_iterations(&self, family: FamilyKind) -> u32 {
        match family {
            FamilyKind::Julia => self.julia_max_iterations,
            FamilyKind::Mandelbrot => self.mandelbrot_max_iterations,
        }
    }
}
