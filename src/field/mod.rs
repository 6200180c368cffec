pub mod bounds;
pub mod edges;
pub mod particle;

pub use bounds::{Boundary, Dimensions};
pub use edges::{Edge, connections};
pub use particle::{Particle, ParticleField};
