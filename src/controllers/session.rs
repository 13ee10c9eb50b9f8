//! Parameter state behind an explorer UI.
//!
//! Widgets and input handlers mutate the session freely; nothing is validated
//! until [`ExplorerSession::request`] builds the snapshot for the next render.

use crate::core::colouring::mode::ColouringMode;
use crate::core::data::complex::Complex;
use crate::core::data::render_request::RenderRequest;
use crate::core::data::view::ViewParameters;
use crate::core::errors::InvalidParameter;
use crate::core::fractals::family::{FamilyKind, FractalFamily};
use crate::core::fractals::julia_presets::julia_preset;
use crate::core::fractals::params::FractalParameters;
use crate::core::fractals::render_config::RenderConfig;

pub const SCALE_STEP: f64 = 0.2;
pub const MIN_SCALE: f64 = 0.2;
pub const MAX_SCALE: f64 = 50.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ExplorerSession {
    config: RenderConfig,
    family: FamilyKind,
    julia_constant: Complex,
    scale: f64,
    escape_radius: f64,
    max_iterations: u32,
    smooth: bool,
    smooth_contrast: f64,
    discrete_contrast: f64,
}

impl ExplorerSession {
    pub fn new(config: RenderConfig) -> Result<Self, InvalidParameter> {
        Ok(Self {
            config,
            family: config.family,
            julia_constant: julia_preset(config.julia_preset)?,
            scale: config.scale,
            escape_radius: config.escape_radius,
            max_iterations: config.default_max_iterations(config.family),
            smooth: config.smooth,
            smooth_contrast: config.smooth_contrast,
            discrete_contrast: config.discrete_contrast,
        })
    }

    #[must_use]
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    #[must_use]
    pub fn family(&self) -> FamilyKind {
        self.family
    }

    #[must_use]
    pub fn julia_constant(&self) -> Complex {
        self.julia_constant
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn smooth(&self) -> bool {
        self.smooth
    }

    /// One mouse-wheel notch. Scrolling up (`delta_y < 0`) zooms in.
    /// Returns the new scale.
    ///
    /// The stepped scale is snapped to hundredths by rounding `scale * 100`
    /// half away from zero. On the 0.2 step grid this agrees with decimal
    /// two-place formatting. An off-grid scale from [`Self::set_scale`] can
    /// land on a binary tie that decimal formatting would round the other
    /// way, so the two may differ by 0.01.
    pub fn zoom(&mut self, delta_y: f64) -> f64 {
        let step = if delta_y < 0.0 { -SCALE_STEP } else { SCALE_STEP };
        let stepped = snap_to_hundredths(self.scale + step);

        self.scale = stepped.clamp(MIN_SCALE, MAX_SCALE);
        self.scale
    }

    pub fn set_scale(&mut self, scale: f64) {
        self.scale = scale;
    }

    /// Switches family and restores that family's iteration cap.
    pub fn select_family(&mut self, family: FamilyKind) {
        self.family = family;
        self.max_iterations = self.config.default_max_iterations(family);
    }

    pub fn select_julia_preset(&mut self, index: usize) -> Result<(), InvalidParameter> {
        self.julia_constant = julia_preset(index)?;
        Ok(())
    }

    pub fn set_julia_constant(&mut self, constant: Complex) {
        self.julia_constant = constant;
    }

    pub fn set_escape_radius(&mut self, escape_radius: f64) {
        self.escape_radius = escape_radius;
    }

    pub fn set_max_iterations(&mut self, max_iterations: u32) {
        self.max_iterations = max_iterations;
    }

    pub fn set_smooth(&mut self, smooth: bool) {
        self.smooth = smooth;
    }

    pub fn set_smooth_contrast(&mut self, contrast: f64) {
        self.smooth_contrast = contrast;
    }

    pub fn set_discrete_contrast(&mut self, contrast: f64) {
        self.discrete_contrast = contrast;
    }

    #[must_use]
    pub fn colouring(&self) -> ColouringMode {
        if self.smooth {
            ColouringMode::Smooth {
                contrast: self.smooth_contrast,
            }
        } else {
            ColouringMode::Discrete {
                contrast: self.discrete_contrast,
            }
        }
    }

    pub fn request(&self) -> Result<RenderRequest, InvalidParameter> {
        let family = match self.family {
            FamilyKind::Julia => FractalFamily::Julia {
                constant: self.julia_constant,
            },
            FamilyKind::Mandelbrot => FractalFamily::Mandelbrot,
        };

        Ok(RenderRequest {
            view: ViewParameters::new(self.config.side, self.scale)?,
            fractal: FractalParameters::new(family, self.max_iterations, self.escape_radius)?,
            colouring: self.colouring(),
        })
    }
}

fn snap_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
