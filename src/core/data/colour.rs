#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const TEAL: Self = Self { r: 0, g: 255, b: 204 };
}

impl Default for Colour {
    fn default() -> Self {
        Self::TEAL
    }
}
