//! Per-mode frame renderers.
//!
//! Each renderer draws one frame from the mode's particle field (when it has
//! one), the pointer and the surface size, advancing the field as it goes.
//! Modes share only the helpers in [`shared`].

pub mod attractor;
pub mod blobs;
pub mod flowing_mesh;
pub mod gradient_mesh;
pub mod lattice;
pub mod menu;
pub mod mesh_dots;
pub mod needles;
pub mod orbs;
pub mod particles;
pub mod rings;
pub mod shared;
pub mod waves;

pub use shared::{FrameContext, interaction};

use crate::config::Mode;
use crate::field::ParticleField;
use crate::render::{Color, DrawTarget};

const TRAIL_FADE: Color = Color::Rgba { r: 0, g: 0, b: 0, a: 0.05 };

/// Draws one frame of `mode`. Returns `false` without touching the target or
/// the field when the surface has no area.
pub fn render(
    mode: Mode,
    target: &mut dyn DrawTarget,
    field: &mut ParticleField,
    frame: &FrameContext,
) -> bool {
    if frame.dims.is_empty() {
        return false;
    }

    if mode.spec().trails {
        target.fade(TRAIL_FADE);
    } else {
        target.clear();
    }

    match mode {
        Mode::Particles => particles::render(target, field, frame),
        Mode::Waves => waves::render(target, frame),
        Mode::LatticeArrows => lattice::render(target, frame),
        Mode::OrbitalRings => rings::render(target, frame),
        Mode::BlobField => blobs::render(target, field, frame),
        Mode::MeshDots => mesh_dots::render(target, frame),
        Mode::FlowingMesh => flowing_mesh::render(target, field, frame),
        Mode::GradientMesh => gradient_mesh::render(target, frame),
        Mode::FloatingOrbs => orbs::render(target, field, frame),
        Mode::NeedleField => needles::render(target, frame),
        Mode::MenuBackdrop => menu::render(target, field, frame),
        Mode::AttractorField => attractor::render(target, field, frame),
    }
    true
}
