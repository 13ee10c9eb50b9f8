use rayon::prelude::*;
use thiserror::Error;

use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel, poll_row};
use crate::core::actions::generate_escapes::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;

/// Distinguishes cancellation from algorithm failure, so callers can drop
/// cancelled work silently.
#[derive(Debug, Error)]
pub enum GenerateEscapesError<E: std::error::Error + 'static> {
    #[error(transparent)]
    Cancelled(Cancelled),
    #[error("algorithm error: {0}")]
    Algorithm(#[source] E),
}

/// Computes every pixel in parallel using rayon's work-stealing scheduler.
///
/// For cancel-aware generation, use [`generate_escapes_parallel_rayon_cancelable`].
pub fn generate_escapes_parallel_rayon<Alg>(
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send + 'static,
{
    generate_escapes_parallel_rayon_cancelable(algorithm, &NeverCancel).map_err(|e| match e {
        GenerateEscapesError::Algorithm(alg_err) => alg_err,
        GenerateEscapesError::Cancelled(_) => {
            unreachable!("NeverCancel token should never signal cancellation")
        }
    })
}

/// Computes every pixel in parallel, one rayon task per row.
///
/// The token is polled through [`poll_row`], so a cancelled frame stops
/// within one poll interval of every busy row. Results are row-major,
/// matching [`generate_escapes`](super::generate_escapes::generate_escapes).
pub fn generate_escapes_parallel_rayon_cancelable<Alg, C>(
    algorithm: &Alg,
    cancel: &C,
) -> Result<Vec<Alg::Success>, GenerateEscapesError<Alg::Failure>>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send + 'static,
    C: CancelToken,
{
    let side = algorithm.side();
    let row_width = side as usize;

    let rows: Result<Vec<Vec<Alg::Success>>, GenerateEscapesError<Alg::Failure>> = (0..side)
        .into_par_iter()
        .map(|y| {
            let mut row = Vec::with_capacity(row_width);

            for (column, x) in (0..side).enumerate() {
                poll_row(cancel, column).map_err(GenerateEscapesError::Cancelled)?;

                let result = algorithm
                    .compute(Point { x, y })
                    .map_err(GenerateEscapesError::Algorithm)?;
                row.push(result);
            }

            Ok(row)
        })
        .collect();

    rows.map(|r| r.into_iter().flatten().collect())
}
