use std::time::Instant;

use fractal_evaluator::{ExplorerSession, FamilyKind, FractalEvaluator, RenderConfig};
use log::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init()
        .ok();

    let config = RenderConfig::default();
    let mut session = ExplorerSession::new(config)?;
    let mut evaluator = FractalEvaluator::new(config.side, config.background)?;

    info!("Image size: {}x{}", config.side, config.side);

    for &family in FamilyKind::ALL {
        session.select_family(family);
        let request = session.request()?;

        let start = Instant::now();
        let buffer = evaluator.evaluate(&request)?;
        let duration = start.elapsed();

        let transparent = buffer.alphas().filter(|&alpha| alpha == 0).count();
        info!(
            "{}: {} iterations, {} transparent pixels, rendered in {:?}",
            family,
            request.fractal.max_iterations(),
            transparent,
            duration
        );
    }

    Ok(())
}
