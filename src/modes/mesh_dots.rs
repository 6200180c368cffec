//! Nodes orbiting the centre on a breathing ring, each linked to the next,
//! with halos that light up under the pointer.

use std::f32::consts::TAU;

use glam::Vec2;

use super::shared::{FrameContext, oscillate, pulse};
use crate::config::Mode;
use crate::render::color::{BLUE, VIOLET};
use crate::render::{DrawTarget, Paint, Stroke};

const NODES: usize = 25;

/// Position of node `i` at time `t`. Indices past the last node wrap round
/// the ring but keep their own radius phase.
pub fn node(center: Vec2, i: usize, t: f32) -> Vec2 {
    let k = i as f32;
    let angle = (k / NODES as f32) * TAU + t * 0.3;
    let radius = oscillate(250.0, 120.0, t, 0.5, k);
    center + Vec2::from_angle(angle) * radius
}

pub fn render(target: &mut dyn DrawTarget, frame: &FrameContext) {
    let falloff = Mode::MeshDots.spec().falloff;
    let t = frame.time(0.0004);
    let secs = frame.seconds();
    let center = frame.dims.center();

    for i in 0..NODES {
        let at = node(center, i, t);
        let interaction = frame.interaction_at(at, falloff);

        target.fill_circle(
            at,
            4.0 + interaction * 6.0,
            &Paint::Solid(frame.palette.primary(i, secs, 0.4 + interaction * 0.6)),
        );
        target.stroke_circle(
            at,
            8.0 + interaction * 12.0,
            &Stroke::new(
                frame.palette.accent(i, secs, interaction * 0.5),
                1.5 + interaction * 2.0,
            ),
        );
        target.line(
            at,
            node(center, i + 1, t),
            &Stroke::new(frame.palette.primary(i, secs, 0.1 + interaction * 0.2), 1.0),
        );
    }

    let core = pulse(t);
    let radius = 8.0 + core * 10.0;
    target.fill_circle(center, radius, &Paint::Solid(VIOLET.with_alpha(0.6 + core * 0.3)));
    target.stroke_circle(center, radius, &Stroke::new(BLUE.with_alpha(0.8), 2.0));
}
