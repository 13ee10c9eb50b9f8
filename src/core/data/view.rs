use crate::core::data::point::Point;
use crate::core::errors::InvalidParameter;

/// Square viewport onto the complex plane, centred on the origin.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewParameters {
    side: u32,
    scale: f64,
    half_scale: f64,
}

impl ViewParameters {
    pub fn new(side: u32, scale: f64) -> Result<Self, InvalidParameter> {
        if side == 0 {
            return Err(InvalidParameter::ZeroSide);
        }

        if !scale.is_finite() || scale <= 0.0 {
            return Err(InvalidParameter::NonPositiveScale(scale));
        }

        Ok(Self {
            side,
            scale,
            half_scale: scale * 0.5,
        })
    }

    #[must_use]
    pub fn side(&self) -> u32 {
        self.side
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[must_use]
    pub fn half_scale(&self) -> f64 {
        self.half_scale
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.side as usize * self.side as usize
    }

    /// Maps a pixel to the complex plane before any family offset is applied.
    /// Returns `(real, imag)`; the column drives the real axis.
    #[must_use]
    pub fn pixel_to_plane(&self, pixel: Point) -> (f64, f64) {
        let side = self.side as f64;
        let real = pixel.x as f64 / side * self.scale - self.half_scale;
        let imag = pixel.y as f64 / side * self.scale - self.half_scale;

        (real, imag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_derives_half_scale() {
        let view = ViewParameters::new(256, 2.8).unwrap();

        assert_eq!(view.side(), 256);
        assert_eq!(view.scale(), 2.8);
        assert_eq!(view.half_scale(), 1.4);
        assert_eq!(view.pixel_count(), 65536);
    }

    #[test]
    fn test_zero_side_is_rejected() {
        assert_eq!(ViewParameters::new(0, 2.8), Err(InvalidParameter::ZeroSide));
    }

    #[test]
    fn test_non_positive_scale_is_rejected() {
        assert_eq!(
            ViewParameters::new(16, 0.0),
            Err(InvalidParameter::NonPositiveScale(0.0))
        );
        assert_eq!(
            ViewParameters::new(16, -2.8),
            Err(InvalidParameter::NonPositiveScale(-2.8))
        );
        assert!(ViewParameters::new(16, f64::NAN).is_err());
        assert!(ViewParameters::new(16, f64::INFINITY).is_err());
    }

    #[test]
    fn test_pixel_to_plane_top_left() {
        let view = ViewParameters::new(4, 4.0).unwrap();

        assert_eq!(view.pixel_to_plane(Point { x: 0, y: 0 }), (-2.0, -2.0));
    }

    #[test]
    fn test_pixel_to_plane_bottom_right_stops_short_of_edge() {
        let view = ViewParameters::new(4, 4.0).unwrap();

        // j / N never reaches 1, so the last column sits one step before +half_scale
        assert_eq!(view.pixel_to_plane(Point { x: 3, y: 3 }), (1.0, 1.0));
    }

    #[test]
    fn test_pixel_to_plane_columns_drive_real_axis() {
        let view = ViewParameters::new(4, 4.0).unwrap();

        assert_eq!(view.pixel_to_plane(Point { x: 2, y: 0 }), (0.0, -2.0));
        assert_eq!(view.pixel_to_plane(Point { x: 0, y: 2 }), (-2.0, 0.0));
    }
}
