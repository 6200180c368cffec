//! Contact-form backdrop: wobbling particles pulled toward the pointer with
//! damping, drawn over fading trails with faint wave layers.

use glam::Vec2;

use super::shared::{FrameContext, interaction, wave_path};
use crate::config::Mode;
use crate::field::{Particle, ParticleField, connections};
use crate::render::color::{BLUE, PURPLE, VIOLET};
use crate::render::{DrawTarget, Paint, Stroke};

const PULL_RADIUS: f32 = 500.0;
const PULL_FORCE: f32 = 0.4;
const DAMPING: f32 = 0.94;
const LINK_DISTANCE: f32 = 150.0;
const LINK_NORMALIZER: f32 = 300.0;

/// One tick of motion: phase wobble, drift, pull toward `pointer`, damping.
pub fn advance(p: &mut Particle, pointer: Option<Vec2>, time: f32) {
    p.phase += p.frequency;
    let wobble = Vec2::new(p.phase.cos(), (time * 0.005 + p.index as f32).sin()) * 2.0;
    p.pos += wobble + p.vel;

    if let Some(pointer) = pointer {
        let offset = pointer - p.pos;
        let distance = offset.length();
        if distance < PULL_RADIUS {
            let dir = offset.try_normalize().unwrap_or(Vec2::ZERO);
            p.vel += dir * interaction(distance, PULL_RADIUS) * PULL_FORCE;
        }
    }
    p.vel *= DAMPING;
}

pub fn render(target: &mut dyn DrawTarget, field: &mut ParticleField, frame: &FrameContext) {
    let spec = Mode::AttractorField.spec();
    let time = frame.seconds();

    for p in field.particles_mut() {
        advance(p, frame.pointer, time);
        spec.boundary.apply(p, frame.dims);

        let near = frame.interaction_at(p.pos, spec.falloff);
        target.fill_circle(
            p.pos,
            p.radius + near * 3.0,
            &Paint::Solid(frame.palette.primary(p.index, time, 0.4 + near * 0.5)),
        );
        if near > 0.3 {
            target.stroke_circle(
                p.pos,
                p.radius + near * 6.0,
                &Stroke::new(
                    frame.palette.primary(p.index, time, near * 0.8),
                    2.0 + near * 3.0,
                ),
            );
        }
    }

    let particles = field.particles();
    for edge in connections(particles, LINK_DISTANCE) {
        let alpha = edge.opacity(LINK_DISTANCE, LINK_NORMALIZER) * 0.2;
        target.line(
            particles[edge.a].pos,
            particles[edge.b].pos,
            &Stroke::new(PURPLE.with_alpha(alpha), 0.5),
        );
    }

    let mid = frame.dims.height / 2.0;
    let layers = [VIOLET.with_alpha(0.12), BLUE.with_alpha(0.1), VIOLET.with_alpha(0.08)];
    for (layer, color) in layers.into_iter().enumerate() {
        let l = layer as f32;
        let points = wave_path(frame.dims.width, 20.0, false, |x| {
            mid + (x * 0.01 + time * (0.5 + l * 0.2) + l).sin() * (30.0 + l * 10.0)
        });
        target.stroke_path(&points, &Stroke::new(color, 2.0));
    }
}
