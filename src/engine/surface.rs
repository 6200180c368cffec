use super::scheduler::{FrameHandle, FrameScheduler};
use crate::error::BackdropError;
use crate::field::Dimensions;
use crate::render::DrawTarget;

/// Owns the drawing surface, its size, and the frame loop's pending handle.
pub struct SurfaceManager<T, S> {
    target: T,
    scheduler: S,
    dims: Dimensions,
    running: bool,
    pending: Option<FrameHandle>,
}

impl<T: DrawTarget, S: FrameScheduler> SurfaceManager<T, S> {
    pub fn attach(target: T, scheduler: S, dims: Dimensions) -> Self {
        let mut surface = Self {
            target,
            scheduler,
            dims: Dimensions::default(),
            running: false,
            pending: None,
        };
        surface.resize(dims.width, dims.height);
        surface
    }

    /// Updates the size and the backing buffer together.
    pub fn resize(&mut self, width: f32, height: f32) {
        let dims = Dimensions::new(width, height);
        self.target.resize(dims);
        self.dims = dims;
    }

    /// Starts the frame loop. No-op while already running.
    pub fn start(&mut self) -> Result<(), BackdropError> {
        if self.running {
            return Ok(());
        }
        self.pending = Some(self.scheduler.schedule()?);
        self.running = true;
        Ok(())
    }

    /// Cancels the pending frame. After this returns `begin_frame` refuses
    /// every callback until the next `start`.
    pub fn stop(&mut self) {
        self.running = false;
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
    }

    /// Consumes the pending frame. `false` means the callback is stale and
    /// must not draw.
    pub fn begin_frame(&mut self) -> bool {
        self.pending.take().is_some() && self.running
    }

    /// Queues the next frame of a running loop.
    pub fn schedule_next(&mut self) -> Result<(), BackdropError> {
        if self.running && self.pending.is_none() {
            self.pending = Some(self.scheduler.schedule()?);
        }
        Ok(())
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
    pub fn is_tick_scheduled(&self) -> bool {
        self.pending.is_some()
    }
    pub fn dims(&self) -> Dimensions {
        self.dims
    }
    pub fn target(&self) -> &T {
        &self.target
    }
    pub fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }
}
