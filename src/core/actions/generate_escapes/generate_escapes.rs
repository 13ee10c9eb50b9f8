use crate::core::actions::generate_escapes::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;

/// Computes every pixel of the grid on the calling thread, row-major.
pub fn generate_escapes<Alg: FractalAlgorithm>(
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure> {
    let side = algorithm.side();

    (0..side)
        .flat_map(|y| (0..side).map(move |x| Point { x, y }))
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}
