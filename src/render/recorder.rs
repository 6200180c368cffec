use glam::Vec2;

use super::color::Color;
use super::target::{DrawTarget, Paint, Stroke};
use crate::field::Dimensions;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Resize(Dimensions),
    Clear,
    Fade(Color),
    FillCircle { center: Vec2, radius: f32, paint: Paint },
    StrokeCircle { center: Vec2, radius: f32, stroke: Stroke },
    StrokePath { points: Vec<Vec2>, stroke: Stroke },
    FillPolygon { points: Vec<Vec2>, paint: Paint },
    FillRect { origin: Vec2, size: Vec2, color: Color },
}

impl DrawCommand {
    /// True for commands that put pixels on the surface.
    pub fn is_draw(&self) -> bool {
        !matches!(self, DrawCommand::Resize(_))
    }
}

/// Headless surface that records every call instead of rasterising.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    dims: Dimensions,
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn draw_count(&self) -> usize {
        self.commands.iter().filter(|c| c.is_draw()).count()
    }

    /// Drains everything recorded so far.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl DrawTarget for DrawList {
    fn resize(&mut self, dims: Dimensions) {
        self.dims = dims;
        self.commands.push(DrawCommand::Resize(dims));
    }

    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn fade(&mut self, color: Color) {
        self.commands.push(DrawCommand::Fade(color));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            paint: paint.clone(),
        });
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, stroke: &Stroke) {
        self.commands.push(DrawCommand::StrokeCircle {
            center,
            radius,
            stroke: stroke.clone(),
        });
    }

    fn stroke_path(&mut self, points: &[Vec2], stroke: &Stroke) {
        self.commands.push(DrawCommand::StrokePath {
            points: points.to_vec(),
            stroke: stroke.clone(),
        });
    }

    fn fill_polygon(&mut self, points: &[Vec2], paint: &Paint) {
        self.commands.push(DrawCommand::FillPolygon {
            points: points.to_vec(),
            paint: paint.clone(),
        });
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color) {
        self.commands.push(DrawCommand::FillRect { origin, size, color });
    }
}
