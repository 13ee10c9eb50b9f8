//! Interactive controller for real-time fractal rendering.
//!
//! A single worker thread owns the evaluator. Submitting a request supersedes
//! whatever is pending or in flight; only the newest generation is ever
//! presented.

mod controller;
pub mod events;
pub mod ports;

pub use controller::InteractiveController;
pub use events::{FrameData, RenderError, RenderEvent};
pub use ports::FramePresenter;
