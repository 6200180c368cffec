use crate::error::BackdropError;

/// Cancellation token for one scheduled frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i32);

/// Platform frame clock. Each `schedule` call queues exactly one callback
/// into the engine; the host delivers it by calling `Controller::frame`.
pub trait FrameScheduler {
    fn schedule(&mut self) -> Result<FrameHandle, BackdropError>;

    /// Drops a queued callback. Cancelling an already-delivered handle is a
    /// no-op.
    fn cancel(&mut self, handle: FrameHandle);
}
