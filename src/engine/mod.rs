//! Frame loop, pointer tracking and the per-mode lifecycle.
//!
//! Everything here is platform-neutral: the browser supplies a
//! [`FrameScheduler`] and a [`PointerSource`] from `platform::web`, tests
//! supply the doubles in `platform::headless`.

pub mod input;
pub mod lifecycle;
pub mod scheduler;
pub mod surface;

pub use input::{InputTracker, PointerSource, PointerState};
pub use lifecycle::{Controller, Phase};
pub use scheduler::{FrameHandle, FrameScheduler};
pub use surface::SurfaceManager;
