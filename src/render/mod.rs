pub mod canvas;
pub mod color;
pub mod recorder;
pub mod target;

pub use canvas::CanvasTarget;
pub use color::{Color, Palette};
pub use recorder::{DrawCommand, DrawList};
pub use target::{DrawTarget, Paint, Stop, Stroke};
