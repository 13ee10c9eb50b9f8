use crate::core::data::complex::Complex;
use crate::core::errors::InvalidParameter;

pub const JULIA_PRESETS: [Complex; 8] = [
    Complex::new(-0.171, 0.658),
    Complex::new(0.3555, 0.3555),
    Complex::new(-0.38, 0.618),
    Complex::new(-0.748, 0.114),
    Complex::new(-0.76, 0.08),
    Complex::new(-0.8, 0.157),
    Complex::new(0.285, 0.0118),
    Complex::new(0.257, 0.0),
];

pub fn julia_preset(index: usize) -> Result<Complex, InvalidParameter> {
    JULIA_PRESETS
        .get(index)
        .copied()
        .ok_or(InvalidParameter::UnknownJuliaPreset {
            index,
            count: JULIA_PRESETS.len(),
        })
}
