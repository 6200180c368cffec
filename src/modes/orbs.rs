//! Gently circling orbs with bright halos, linked to every nearby orb in both
//! of the pair's colours.

use glam::Vec2;

use super::shared::FrameContext;
use crate::config::Mode;
use crate::field::{ParticleField, connections};
use crate::render::{DrawTarget, Paint, Stroke};

const LINK_DISTANCE: f32 = 200.0;
const LINK_NORMALIZER: f32 = 300.0;

pub fn render(target: &mut dyn DrawTarget, field: &mut ParticleField, frame: &FrameContext) {
    let spec = Mode::FloatingOrbs.spec();
    let t = frame.time(0.001);
    let secs = frame.seconds();

    for p in field.particles_mut() {
        let k = p.index as f32;
        p.pos += Vec2::new((t + k).sin(), (t + k).cos()) * 0.5;
        spec.boundary.apply(p, frame.dims);
    }

    let particles = field.particles();
    for edge in connections(particles, LINK_DISTANCE) {
        let alpha = edge.opacity(LINK_DISTANCE, LINK_NORMALIZER);
        let (a, b) = (&particles[edge.a], &particles[edge.b]);
        for owner in [a, b] {
            target.line(
                a.pos,
                b.pos,
                &Stroke::new(frame.palette.primary(owner.index, secs, alpha), 1.0),
            );
        }
    }

    for p in particles {
        let interaction = frame.interaction_at(p.pos, spec.falloff);
        target.fill_circle(
            p.pos,
            5.0 + interaction * 8.0,
            &Paint::Solid(frame.palette.primary(p.index, secs, 0.35 + interaction * 0.65)),
        );
        target.stroke_circle(
            p.pos,
            10.0 + interaction * 15.0,
            &Stroke::new(
                frame.palette.accent(p.index, secs, 0.35 + interaction * 0.75),
                2.5 + interaction * 4.0,
            ),
        );
    }
}
