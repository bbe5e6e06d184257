// Bookkeeping for mounts and the frame loop, kept free of browser types so it
// can be exercised on the host.

/// Single parked value keyed by the canvas id it was mounted on.
pub struct MountSlot<T> {
    parked: Option<(String, T)>,
}

impl<T> Default for MountSlot<T> {
    fn default() -> Self {
        Self { parked: None }
    }
}

impl<T> MountSlot<T> {
    /// Park `value`, handing back whatever was parked before.
    pub fn park(&mut self, canvas_id: &str, value: T) -> Option<T> {
        self.parked
            .replace((canvas_id.to_string(), value))
            .map(|(_, v)| v)
    }

    /// Remove the parked value only if it was mounted on `canvas_id`.
    pub fn take_for(&mut self, canvas_id: &str) -> Option<T> {
        match &self.parked {
            Some((id, _)) if id == canvas_id => self.parked.take().map(|(_, v)| v),
            _ => None,
        }
    }

    pub fn take(&mut self) -> Option<T> {
        self.parked.take().map(|(_, v)| v)
    }

    pub fn is_empty(&self) -> bool {
        self.parked.is_none()
    }
}

/// Scheduling state of a requestAnimationFrame loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoopState {
    running: bool,
    handle: Option<i32>,
}

impl Default for LoopState {
    fn default() -> Self {
        Self {
            running: true,
            handle: None,
        }
    }
}

impl LoopState {
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn handle(&self) -> Option<i32> {
        self.handle
    }

    /// Record the outcome of a frame request; a failed request ends the loop.
    pub fn record_request(&mut self, handle: Option<i32>) {
        self.handle = handle;
        if handle.is_none() {
            self.running = false;
        }
    }

    /// Stop the loop. Returns the pending frame to cancel, once; `None` if
    /// the loop had already stopped.
    pub fn stop(&mut self) -> Option<Option<i32>> {
        if !self.running {
            return None;
        }
        self.running = false;
        Some(self.handle.take())
    }
}
