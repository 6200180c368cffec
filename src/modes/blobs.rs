//! Soft radial-gradient blobs on wandering orbits, with a scatter of motes
//! drifting underneath.

use std::f32::consts::TAU;

use glam::Vec2;

use super::shared::{FrameContext, oscillate};
use crate::config::Mode;
use crate::field::ParticleField;
use crate::render::{Color, DrawTarget, Paint, Stop, Stroke};

const BLOBS: usize = 5;

/// Centre and radius of blob `i` at time `t`.
pub fn blob(center: Vec2, i: usize, t: f32) -> (Vec2, f32) {
    let k = i as f32;
    let angle = (t + (k / BLOBS as f32) * TAU) * 0.5;
    let orbit = oscillate(200.0, 100.0, t, 0.3, k * 0.8);
    let at = center
        + Vec2::from_angle(angle) * orbit
        + Vec2::new(0.0, (t * 0.4 + k).sin() * 80.0);
    (at, oscillate(80.0, 40.0, t, 0.6, k * 1.2))
}

pub fn render(target: &mut dyn DrawTarget, field: &mut ParticleField, frame: &FrameContext) {
    let t = frame.time(0.0005);
    let secs = frame.seconds();

    for i in 0..BLOBS {
        let (at, size) = blob(frame.dims.center(), i, t);
        let k = i as f32;
        let hue = frame.palette.hue(i, secs);
        let saturation = oscillate(70.0, 20.0, t, 0.3, k);
        let lightness = oscillate(50.0, 15.0, t, 0.4, k * 0.5);

        target.fill_circle(
            at,
            size,
            &Paint::Radial {
                center: at,
                radius: size,
                stops: vec![
                    Stop::new(0.0, Color::hsla(hue, saturation, lightness + 15.0, 0.6)),
                    Stop::new(0.7, Color::hsla(hue, saturation, lightness, 0.3)),
                    Stop::new(1.0, Color::hsla(hue, saturation, lightness, 0.0)),
                ],
            },
        );
        target.stroke_circle(
            at,
            size + 20.0,
            &Stroke::new(Color::hsla(hue, saturation, lightness + 10.0, 0.4), 2.0),
        );
    }

    let boundary = Mode::BlobField.spec().boundary;
    for p in field.particles_mut() {
        let k = p.index as f32;
        p.pos += Vec2::new((t + k * 0.5).sin(), (t + k * 0.5).cos()) * 0.3;
        boundary.apply(p, frame.dims);

        let hue = frame.palette.hue(p.index, secs);
        target.fill_circle(
            p.pos,
            oscillate(2.0, 1.5, t, 0.8, k),
            &Paint::Solid(Color::hsla(hue, 70.0, 50.0, oscillate(0.4, 0.3, t, 1.0, k))),
        );
    }
}
