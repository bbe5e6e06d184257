use crate::core::sizing::Viewport;

/// Quiet period after the last resize event before the new size is applied.
pub const RESIZE_SETTLE_SEC: f64 = 0.15;

/// Collapses a burst of resize events into a single reallocation.
#[derive(Clone, Debug, Default)]
pub struct ResizeCoalescer {
    pending: Option<Viewport>,
    last_event_sec: f64,
}

impl ResizeCoalescer {
    pub fn note(&mut self, viewport: Viewport, now_sec: f64) {
        self.pending = Some(viewport);
        self.last_event_sec = now_sec;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Hands out the latest size once events have been quiet long enough.
    pub fn take_ready(&mut self, now_sec: f64) -> Option<Viewport> {
        if now_sec - self.last_event_sec < RESIZE_SETTLE_SEC {
            return None;
        }
        self.pending.take()
    }
}
