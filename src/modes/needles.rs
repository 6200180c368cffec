//! Hero needle field: a dense lattice of short strokes that turn to face the
//! pointer, lengthen, thicken and pick up a gradient glow as it approaches.

use glam::Vec2;

use super::shared::{FrameContext, lattice};
use crate::config::Mode;
use crate::render::color::{BLUE, GLOW, PURPLE, WHITE};
use crate::render::{DrawTarget, Paint, Stop, Stroke};

const SPACING: f32 = 40.0;
const NEEDLE_LENGTH: f32 = 20.0;

pub fn render(target: &mut dyn DrawTarget, frame: &FrameContext) {
    let falloff = Mode::NeedleField.spec().falloff;

    for point in lattice(frame.dims, SPACING, SPACING / 2.0) {
        let interaction = frame.interaction_at(point.pos, falloff);
        let dir = frame
            .pointer
            .and_then(|p| (p - point.pos).try_normalize())
            .unwrap_or(Vec2::X);

        let half = (NEEDLE_LENGTH + interaction * 15.0) / 2.0;
        let (from, to) = (point.pos - dir * half, point.pos + dir * half);
        let width = 1.0 + interaction * 3.0;

        let stroke = if interaction > 0.1 {
            let alpha = 0.3 + interaction;
            Stroke::new(
                Paint::Linear {
                    from,
                    to,
                    stops: vec![
                        Stop::new(0.0, PURPLE.with_alpha(alpha)),
                        Stop::new(1.0, BLUE.with_alpha(alpha)),
                    ],
                },
                width,
            )
            .glow(10.0 * interaction, GLOW)
        } else {
            Stroke::new(WHITE.with_alpha(0.15), width)
        };
        target.line(from, to, &stroke.round());
    }
}
