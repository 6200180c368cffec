//! Coarse lattice of softly pulsing radial gradients, displaced by slow sine
//! waves and stitched to their right and lower neighbours.

use glam::Vec2;

use super::shared::{FrameContext, lattice, oscillate};
use crate::render::{Color, DrawTarget, Paint, Stop, Stroke};

const GRID: f32 = 150.0;
const GLOW_RADIUS: f32 = 100.0;

/// Lattice point `(x, y)` displaced at time `t`.
pub fn displace(x: f32, y: f32, t: f32) -> Vec2 {
    Vec2::new(
        x + (x * 0.005 + t * 0.3).sin() * 30.0,
        y + (y * 0.005 + t * 0.25).cos() * 30.0,
    )
}

pub fn render(target: &mut dyn DrawTarget, frame: &FrameContext) {
    let t = frame.time(0.0005);
    let secs = frame.seconds();
    let dims = frame.dims;
    let saturation = oscillate(60.0, 20.0, t, 0.2, 0.0);

    for point in lattice(dims, GRID, 0.0) {
        let (x, y) = (point.pos.x, point.pos.y);
        let at = displace(x, y, t);
        let hue = frame.palette.hue(point.parity(), secs);
        let lightness = oscillate(50.0, 15.0, t, 0.15, x * 0.002);

        target.fill_circle(
            at,
            GLOW_RADIUS,
            &Paint::Radial {
                center: at,
                radius: GLOW_RADIUS,
                stops: vec![
                    Stop::new(0.0, Color::hsla(hue, saturation, lightness, 0.4)),
                    Stop::new(0.5, Color::hsla(hue, saturation, lightness, 0.2)),
                    Stop::new(1.0, Color::hsla(hue, saturation, lightness, 0.0)),
                ],
            },
        );

        let link = Stroke::new(Color::hsla(hue, 60.0, 50.0, 0.15), 1.0);
        if x + GRID < dims.width {
            target.line(at, displace(x + GRID, y, t), &link);
        }
        if y + GRID < dims.height {
            target.line(at, displace(x, y + GRID, t), &link);
        }
    }
}
