use crate::controllers::interactive::events::RenderEvent;

/// Receives completed frames on the controller's worker thread.
pub trait FramePresenter: Send + Sync {
    fn present(&self, event: RenderEvent);
}
