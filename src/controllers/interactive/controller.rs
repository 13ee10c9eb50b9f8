use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Instant;

use log::{debug, trace, warn};

use crate::controllers::interactive::events::{FrameData, RenderError, RenderEvent};
use crate::controllers::interactive::ports::FramePresenter;
use crate::core::actions::cancellation::GenerationToken;
use crate::core::data::colour::Colour;
use crate::core::data::render_request::RenderRequest;
use crate::core::errors::InvalidParameter;
use crate::core::evaluator::{EvaluateError, FractalEvaluator};

struct SharedState {
    generation: AtomicU64,
    last_completed_generation: AtomicU64,
    latest_request: Mutex<Option<(u64, RenderRequest)>>,
    wake: Condvar,
    shutdown: AtomicBool,
    presenter: Arc<dyn FramePresenter>,
}

pub struct InteractiveController {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
}

impl InteractiveController {
    pub fn new(
        side: u32,
        background: Colour,
        presenter: Arc<dyn FramePresenter>,
    ) -> Result<Self, InvalidParameter> {
        let evaluator = FractalEvaluator::new(side, background)?;

        let shared = Arc::new(SharedState {
            generation: AtomicU64::new(0),
            last_completed_generation: AtomicU64::new(0),
            latest_request: Mutex::new(None),
            wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
            presenter,
        });

        let worker_shared = Arc::clone(&shared);

        let worker = thread::spawn(move || {
            Self::worker_loop(&worker_shared, evaluator);
        });

        Ok(Self {
            shared,
            worker: Some(worker),
        })
    }

    /// Queues `request` as the newest generation, replacing anything still
    /// pending and cancelling a render in flight.
    pub fn submit_request(&self, request: RenderRequest) -> u64 {
        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut guard = self
                .shared
                .latest_request
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            *guard = Some((generation, request));
        }

        self.shared.wake.notify_one();

        generation
    }

    pub fn shutdown(&mut self) {
        {
            // Held so the flag cannot land between the worker's check and its wait.
            let _guard = self
                .shared
                .latest_request
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            self.shared.shutdown.store(true, Ordering::Release);
        }

        self.shared.wake.notify_one();

        if let Some(handle) = self.worker.take() {
            if handle.join().is_err() {
                warn!("render worker panicked");
            }
        }
    }

    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.shared
            .last_completed_generation
            .load(Ordering::Acquire)
    }

    fn worker_loop(shared: &Arc<SharedState>, mut evaluator: FractalEvaluator) {
        loop {
            let (job_generation, request) = {
                let mut guard = shared
                    .latest_request
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner);
                loop {
                    if shared.shutdown.load(Ordering::Acquire) {
                        return;
                    }

                    if let Some(req) = guard.take() {
                        break req;
                    }

                    guard = shared
                        .wake
                        .wait(guard)
                        .unwrap_or_else(PoisonError::into_inner);
                }
            };

            let cancel_token =
                GenerationToken::new(job_generation, &shared.generation, &shared.shutdown);

            let start = Instant::now();
            let result = evaluator.evaluate_cancelable(&request, &cancel_token);
            let render_duration = start.elapsed();

            let event = match result {
                Ok(pixel_buffer) => RenderEvent::Frame(FrameData {
                    generation: job_generation,
                    pixel_buffer: pixel_buffer.clone(),
                    render_duration,
                }),
                Err(EvaluateError::Cancelled(_)) => {
                    trace!("generation {} cancelled", job_generation);
                    continue;
                }
                Err(err) => {
                    warn!("generation {} failed: {}", job_generation, err);
                    RenderEvent::Error(RenderError {
                        generation: job_generation,
                        message: err.to_string(),
                    })
                }
            };

            if cancel_token.is_superseded() {
                trace!("generation {} superseded before presenting", job_generation);
                continue;
            }

            debug!(
                "presenting generation {} after {:?}",
                job_generation, render_duration
            );
            shared.presenter.present(event);

            shared
                .last_completed_generation
                .store(job_generation, Ordering::Release);
        }
    }
}

impl Drop for InteractiveController {
    fn drop(&mut self) {
        self.shutdown();
    }
}
