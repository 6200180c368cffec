//! Interactive lattice: squares that swell near the pointer, interaction
//! rings, and arrows rotated to point at it.

use glam::Vec2;

use super::shared::{FrameContext, lattice};
use crate::config::Mode;
use crate::render::{DrawTarget, Paint, Stroke};

const SPACING: f32 = 80.0;
const HEAD_LENGTH: f32 = 8.0;
const HEAD_HALF_WIDTH: f32 = 5.0;

/// Shaft endpoints and head triangle of an arrow centred on `at`, pointing
/// along `dir` (unit length).
pub fn arrow(at: Vec2, dir: Vec2, half_length: f32) -> ([Vec2; 2], [Vec2; 3]) {
    let tip = at + dir * half_length;
    let base = at + dir * (half_length - HEAD_LENGTH);
    let side = dir.perp() * HEAD_HALF_WIDTH;
    ([at - dir * half_length, tip], [tip, base - side, base + side])
}

pub fn render(target: &mut dyn DrawTarget, frame: &FrameContext) {
    let falloff = Mode::LatticeArrows.spec().falloff;
    let time = frame.seconds();

    for point in lattice(frame.dims, SPACING, 0.0) {
        let interaction = frame.interaction_at(point.pos, falloff);
        let tone = point.parity();

        let size = 3.0 + interaction * 6.0;
        target.fill_rect(
            point.pos - Vec2::splat(size / 2.0),
            Vec2::splat(size),
            frame.palette.primary(tone, time, 0.15 + interaction * 0.5),
        );

        if interaction > 0.1 {
            target.stroke_circle(
                point.pos,
                15.0 + interaction * 25.0,
                &Stroke::new(
                    frame.palette.accent(tone, time, interaction * 0.7),
                    1.5 + interaction * 2.0,
                ),
            );
        }

        if interaction > 0.3 {
            let Some(pointer) = frame.pointer else { continue };
            let dir = (pointer - point.pos).try_normalize().unwrap_or(Vec2::X);
            let (shaft, head) = arrow(point.pos, dir, 20.0 + interaction * 15.0);
            target.line(
                shaft[0],
                shaft[1],
                &Stroke::new(
                    frame.palette.primary(tone, time, interaction * 0.8),
                    2.0 + interaction,
                ),
            );
            target.fill_polygon(
                &head,
                &Paint::Solid(frame.palette.primary(tone, time, interaction)),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_points_along_direction() {
        let (shaft, head) = arrow(Vec2::new(100.0, 100.0), Vec2::X, 20.0);
        assert_eq!(shaft, [Vec2::new(80.0, 100.0), Vec2::new(120.0, 100.0)]);
        assert_eq!(head[0], Vec2::new(120.0, 100.0));
        assert_eq!(head[1].x, 112.0);
        assert_eq!((head[1].y - head[2].y).abs(), 10.0);
    }
}
