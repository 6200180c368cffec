//! In-process stand-ins for the browser frame clock and pointer feed. The
//! host (usually a test) delivers frames by calling `Controller::frame`.

use glam::Vec2;

use crate::engine::{FrameHandle, FrameScheduler, PointerSource, PointerState};
use crate::error::BackdropError;

#[derive(Debug, Default)]
pub struct ManualScheduler {
    next: i32,
    requested: usize,
    cancelled: usize,
    last: Option<FrameHandle>,
    fail: bool,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// A scheduler whose every request fails.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn requested(&self) -> usize {
        self.requested
    }
    pub fn cancelled(&self) -> usize {
        self.cancelled
    }
    pub fn last(&self) -> Option<FrameHandle> {
        self.last
    }
}

impl FrameScheduler for ManualScheduler {
    fn schedule(&mut self) -> Result<FrameHandle, BackdropError> {
        if self.fail {
            return Err(BackdropError::Schedule("manual scheduler refused".into()));
        }
        self.next += 1;
        self.requested += 1;
        let handle = FrameHandle(self.next);
        self.last = Some(handle);
        Ok(handle)
    }

    fn cancel(&mut self, _handle: FrameHandle) {
        self.cancelled += 1;
    }
}

/// Pointer feed moved by hand. Moves made while unsubscribed are dropped,
/// as a removed DOM listener would drop them.
#[derive(Debug, Default)]
pub struct ManualPointer {
    state: Option<PointerState>,
    subscriptions: usize,
    fail: bool,
}

impl ManualPointer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn move_to(&self, pos: Vec2) {
        if let Some(state) = &self.state {
            state.set(pos);
        }
    }

    pub fn is_subscribed(&self) -> bool {
        self.state.is_some()
    }

    /// Total number of successful subscriptions so far.
    pub fn subscriptions(&self) -> usize {
        self.subscriptions
    }
}

impl PointerSource for ManualPointer {
    fn subscribe(&mut self, state: PointerState) -> Result<(), BackdropError> {
        if self.fail {
            return Err(BackdropError::Listener("manual pointer refused".into()));
        }
        self.state = Some(state);
        self.subscriptions += 1;
        Ok(())
    }

    fn unsubscribe(&mut self) {
        self.state = None;
    }
}
