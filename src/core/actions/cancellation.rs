//! Cooperative cancellation for escape generation.
//!
//! A generator polls its token when it starts a row and again every
//! [`ROW_POLL_INTERVAL_PIXELS`] pixels along that row. A positive poll
//! abandons the whole frame; nothing computed so far reaches the buffer.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use thiserror::Error;

pub const ROW_POLL_INTERVAL_PIXELS: usize = 1024;

/// The frame was abandoned before every escape was known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("render cancelled")]
pub struct Cancelled;

pub trait CancelToken: Send + Sync {
    fn is_cancelled(&self) -> bool;
}

/// Polls `token` if `column` falls on a poll point of the current row.
#[inline]
pub fn poll_row<C: CancelToken + ?Sized>(token: &C, column: usize) -> Result<(), Cancelled> {
    if column % ROW_POLL_INTERVAL_PIXELS == 0 && token.is_cancelled() {
        return Err(Cancelled);
    }

    Ok(())
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCancel;

impl CancelToken for NeverCancel {
    #[inline]
    fn is_cancelled(&self) -> bool {
        false
    }
}

/// Cancels once a newer request generation is published or shutdown is
/// requested.
#[derive(Debug, Clone, Copy)]
pub struct GenerationToken<'a> {
    generation: u64,
    latest: &'a AtomicU64,
    shutdown: &'a AtomicBool,
}

impl<'a> GenerationToken<'a> {
    #[must_use]
    pub fn new(generation: u64, latest: &'a AtomicU64, shutdown: &'a AtomicBool) -> Self {
        Self {
            generation,
            latest,
            shutdown,
        }
    }

    #[must_use]
    pub fn is_superseded(&self) -> bool {
        self.latest.load(Ordering::Acquire) != self.generation
    }
}

impl CancelToken for GenerationToken<'_> {
    #[inline]
    fn is_cancelled(&self) -> bool {
        self.shutdown.load(Ordering::Relaxed)
            || self.latest.load(Ordering::Relaxed) != self.generation
    }
}

impl<F> CancelToken for F
where
    F: Fn() -> bool + Send + Sync,
{
    #[inline]
    fn is_cancelled(&self) -> bool {
        self()
    }
}
