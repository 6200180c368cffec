//! Overlay-menu backdrop: particles bounce inside the surface, link to their
//! neighbours, and throw attraction lines to a nearby pointer.

use super::shared::FrameContext;
use crate::config::Mode;
use crate::field::{ParticleField, connections};
use crate::render::color::{BLUE, PURPLE};
use crate::render::{DrawTarget, Paint, Stroke};

const LINK_DISTANCE: f32 = 200.0;
const LINK_NORMALIZER: f32 = 500.0;
const ATTRACTION_FALLOFF: f32 = 250.0;

pub fn render(target: &mut dyn DrawTarget, field: &mut ParticleField, frame: &FrameContext) {
    let spec = Mode::MenuBackdrop.spec();
    field.step(spec.boundary, frame.dims);
    let particles = field.particles();

    for p in particles {
        let interaction = frame.interaction_at(p.pos, spec.falloff);
        target.fill_circle(
            p.pos,
            p.radius + interaction * 4.0,
            &Paint::Solid(PURPLE.with_alpha(0.3 + interaction * 0.5)),
        );
        if interaction > 0.2 {
            target.stroke_circle(
                p.pos,
                p.radius + interaction * 8.0,
                &Stroke::new(BLUE.with_alpha(interaction * 0.6), 1.5 + interaction * 2.0),
            );
        }
    }

    for edge in connections(particles, LINK_DISTANCE) {
        target.line(
            particles[edge.a].pos,
            particles[edge.b].pos,
            &Stroke::new(
                PURPLE.with_alpha(edge.opacity(LINK_DISTANCE, LINK_NORMALIZER)),
                0.5,
            ),
        );
    }

    let Some(pointer) = frame.pointer else { return };
    for p in particles {
        let pull = frame.interaction_at(p.pos, ATTRACTION_FALLOFF);
        if pull > 0.3 {
            target.line(
                p.pos,
                pointer,
                &Stroke::new(BLUE.with_alpha(pull * 0.4), 1.0 + pull),
            );
        }
    }
}
