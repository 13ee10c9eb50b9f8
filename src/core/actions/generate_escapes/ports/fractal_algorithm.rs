use crate::core::data::point::Point;
use std::error::Error;

pub trait FractalAlgorithm {
    type Success;
    type Failure: Error;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure>;

    /// Side length of the square grid the algorithm accepts pixels from.
    fn side(&self) -> u32;
}
