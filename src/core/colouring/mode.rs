pub const DEFAULT_SMOOTH_CONTRAST: f64 = 1.0;
pub const DEFAULT_DISCRETE_CONTRAST: f64 = 1.25;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColouringMode {
    /// Continuous iteration count from the double logarithm of the escape magnitude.
    Smooth { contrast: f64 },
    /// `sqrt(k / max_iterations)` scaled onto the alpha range.
    Discrete { contrast: f64 },
}

impl ColouringMode {
    #[must_use]
    pub const fn smooth() -> Self {
        Self::Smooth {
            contrast: DEFAULT_SMOOTH_CONTRAST,
        }
    }

    #[must_use]
    pub const fn discrete() -> Self {
        Self::Discrete {
            contrast: DEFAULT_DISCRETE_CONTRAST,
        }
    }

    #[must_use]
    pub const fn contrast(&self) -> f64 {
        match *self {
            Self::Smooth { contrast } | Self::Discrete { contrast } => contrast,
        }
    }

    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Smooth { .. } => "Smooth",
            Self::Discrete { .. } => "Discrete",
        }
    }
}

impl Default for ColouringMode {
    fn default() -> Self {
        Self::smooth()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_smooth_with_unit_contrast() {
        assert_eq!(ColouringMode::default(), ColouringMode::Smooth { contrast: 1.0 });
    }

    #[test]
    fn test_discrete_default_contrast() {
        assert_eq!(ColouringMode::discrete().contrast(), 1.25);
        assert_eq!(ColouringMode::discrete().display_name(), "Discrete");
    }
}
