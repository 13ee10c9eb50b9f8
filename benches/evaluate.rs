use criterion::{Criterion, black_box, criterion_group, criterion_main};
use fractal_evaluator::{
    ColouringMode, EscapeTimeAlgorithm, ExplorerSession, FamilyKind, FractalEvaluator,
    RenderConfig, generate_escapes,
};

fn bench_evaluate(c: &mut Criterion) {
    let config = RenderConfig::default();
    let mut group = c.benchmark_group("evaluate");
    group.sample_size(20);

    for &family in FamilyKind::ALL {
        let mut session = ExplorerSession::new(config).expect("default config is valid");
        session.select_family(family);
        let request = session.request().expect("default request is valid");
        let mut evaluator =
            FractalEvaluator::new(config.side, config.background).expect("default side is valid");

        group.bench_function(format!("{}_parallel", family), |b| {
            b.iter(|| {
                evaluator
                    .evaluate(black_box(&request))
                    .expect("render succeeds");
            })
        });

        let algorithm = EscapeTimeAlgorithm::new(request.view, &request.fractal);
        group.bench_function(format!("{}_serial_escapes", family), |b| {
            b.iter(|| generate_escapes(black_box(&algorithm)).expect("render succeeds"))
        });
    }

    let mut session = ExplorerSession::new(config).expect("default config is valid");
    session.set_smooth(false);
    let request = session.request().expect("default request is valid");
    assert_eq!(request.colouring, ColouringMode::discrete());
    let mut evaluator =
        FractalEvaluator::new(config.side, config.background).expect("default side is valid");
    group.bench_function("Julia_discrete_parallel", |b| {
        b.iter(|| {
            evaluator
                .evaluate(black_box(&request))
                .expect("render succeeds");
        })
    });

    group.finish();
}

criterion_group!(benches, bench_evaluate);
criterion_main!(benches);
