pub mod mode;
pub mod options;

pub use mode::{Mode, ModeSpec, SeedParams};
pub use options::{BackdropOptions, Sizing};
