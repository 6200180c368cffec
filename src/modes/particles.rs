//! Free-drifting particles that glow and grow a trail ring near the pointer.

use super::shared::FrameContext;
use crate::config::Mode;
use crate::field::ParticleField;
use crate::render::{DrawTarget, Paint, Stroke};

/// Rendered radius of a particle under `interaction`.
pub fn glow_radius(base: f32, interaction: f32) -> f32 {
    base + interaction * 4.0
}

pub fn render(target: &mut dyn DrawTarget, field: &mut ParticleField, frame: &FrameContext) {
    let spec = Mode::Particles.spec();
    let time = frame.seconds();

    // draw where the particle is this frame, then move it
    for p in field.particles() {
        let interaction = frame.interaction_at(p.pos, spec.falloff);
        let fill = frame.palette.primary(p.index, time, 0.3 + interaction * 0.6);
        target.fill_circle(p.pos, glow_radius(p.radius, interaction), &Paint::Solid(fill));

        if interaction > 0.2 {
            let trail = frame.palette.accent(p.index, time, interaction * 0.5);
            target.stroke_circle(
                p.pos,
                p.radius + interaction * 8.0,
                &Stroke::new(trail, 1.0 + interaction * 2.0),
            );
        }
    }
    field.step(spec.boundary, frame.dims);
}
