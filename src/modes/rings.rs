//! Concentric rings with dots orbiting on each, around a pulsing core.

use std::f32::consts::{FRAC_PI_2, PI};

use glam::Vec2;

use super::shared::{FrameContext, oscillate, pulse};
use crate::render::color::{BLUE, PURPLE, VIOLET};
use crate::render::{DrawTarget, Paint, Stop, Stroke};

const RINGS: usize = 8;
const DOTS_PER_RING: usize = 4;

pub fn render(target: &mut dyn DrawTarget, frame: &FrameContext) {
    let t = frame.time(0.0004);
    let secs = frame.seconds();
    let center = frame.dims.center();

    for ring in 0..RINGS {
        let i = ring as f32;
        let rotation = t + i * PI / (RINGS as f32 / 2.0);
        let radius = 150.0 + i * 40.0;
        let opacity = 0.4 - i * 0.05;

        target.stroke_circle(
            center,
            radius,
            &Stroke::new(
                frame.palette.primary(ring, secs, opacity),
                oscillate(2.5, 1.0, t, 1.0, i),
            ),
        );

        for dot in 0..DOTS_PER_RING {
            let d = dot as f32;
            let at = center + Vec2::from_angle(rotation + d * FRAC_PI_2) * radius;
            target.fill_circle(
                at,
                oscillate(3.0, 2.0, t, 1.5, d),
                &Paint::Solid(frame.palette.primary(ring, secs, opacity + 0.2)),
            );
        }
    }

    let core = pulse(t * 1.2);
    target.fill_circle(
        center,
        80.0 + core * 30.0,
        &Paint::Radial {
            center,
            radius: 80.0,
            stops: vec![
                Stop::new(0.0, VIOLET.with_alpha(0.5 + core * 0.3)),
                Stop::new(0.7, BLUE.with_alpha(0.3 + core * 0.2)),
                Stop::new(1.0, PURPLE.with_alpha(0.0)),
            ],
        },
    );
}
