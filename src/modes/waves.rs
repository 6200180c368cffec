//! Layered sine strokes across the middle of the surface. The pointer raises
//! the amplitude of the samples near it.

use std::f32::consts::PI;

use glam::Vec2;

use super::shared::{FrameContext, wave_path};
use crate::config::Mode;
use crate::render::{DrawTarget, Stroke};

const LAYERS: usize = 5;
const SAMPLE_STEP: f32 = 15.0;

pub fn render(target: &mut dyn DrawTarget, frame: &FrameContext) {
    let falloff = Mode::Waves.spec().falloff;
    let t = frame.time(0.0008);
    let mid = frame.dims.height / 2.0;

    for layer in 0..LAYERS {
        let w = layer as f32;
        let points = wave_path(frame.dims.width, SAMPLE_STEP, true, |x| {
            let boost = frame.interaction_at(Vec2::new(x, mid), falloff);
            mid + ((x * 0.008 + t + w * 1.5) * PI).sin() * (60.0 + boost * 100.0) + (t * 0.5).cos() * 30.0
        });

        let alpha = 0.25 + w * 0.12 + w * 0.08;
        let color = frame.palette.primary(layer, frame.seconds(), alpha);
        target.stroke_path(&points, &Stroke::new(color, 2.5 + w * 0.7).round());
    }
}
