//! Ambient connected motes over slow wave strokes. Ignores the pointer.

use std::f32::consts::PI;

use glam::Vec2;

use super::shared::{FrameContext, oscillate, pulse, wave_path};
use crate::config::Mode;
use crate::field::{ParticleField, connections};
use crate::render::color::PURPLE;
use crate::render::{Color, DrawTarget, Paint, Stroke};

const WAVES: usize = 4;
const LINK_DISTANCE: f32 = 200.0;
const LINK_NORMALIZER: f32 = 400.0;

pub fn render(target: &mut dyn DrawTarget, field: &mut ParticleField, frame: &FrameContext) {
    let t = frame.time(0.0006);
    let secs = frame.seconds();
    let boundary = Mode::FlowingMesh.spec().boundary;

    for p in field.particles_mut() {
        let k = p.index as f32;
        p.pos += Vec2::new((t + k * 0.3).sin(), (t * 0.7 + k * 0.2).cos()) * 0.4;
        boundary.apply(p, frame.dims);

        let hue = frame.palette.hue(p.index, secs);
        let glow = pulse(t * 0.8 + k);
        target.fill_circle(
            p.pos,
            2.5 + glow * 2.0,
            &Paint::Solid(Color::hsla(hue, 70.0, 50.0, 0.4 + glow * 0.4)),
        );
        target.stroke_circle(
            p.pos,
            6.0 + glow * 3.0,
            &Stroke::new(Color::hsla(hue, 70.0, 60.0, 0.2 + glow * 0.3), 1.0),
        );
    }

    let mid = frame.dims.height / 2.0;
    for wave in 0..WAVES {
        let w = wave as f32;
        let amplitude = oscillate(40.0, 20.0, t, 0.3, w);
        let points = wave_path(frame.dims.width, 20.0, true, |x| {
            mid + ((x * 0.008 + t * 0.5 + w * 1.5) * PI).sin() * amplitude + (t * 0.4 + w).cos() * 30.0
        });
        let color = frame.palette.primary(wave, secs, 0.2 - w * 0.04);
        target.stroke_path(&points, &Stroke::new(color, 2.0).round());
    }

    let particles = field.particles();
    for edge in connections(particles, LINK_DISTANCE) {
        let alpha = edge.opacity(LINK_DISTANCE, LINK_NORMALIZER) * 0.3;
        target.line(
            particles[edge.a].pos,
            particles[edge.b].pos,
            &Stroke::new(PURPLE.with_alpha(alpha), 0.5),
        );
    }
}
