use glam::Vec2;

use super::color::Color;
use crate::field::Dimensions;

/// Colour stop on a gradient, `offset` in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stop {
    pub offset: f32,
    pub color: Color,
}

impl Stop {
    pub const fn new(offset: f32, color: Color) -> Self {
        Self { offset, color }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    /// Concentric gradient from `center` out to `radius`.
    Radial {
        center: Vec2,
        radius: f32,
        stops: Vec<Stop>,
    },
    Linear {
        from: Vec2,
        to: Vec2,
        stops: Vec<Stop>,
    },
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Paint::Solid(color)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub paint: Paint,
    pub width: f32,
    /// Round caps and joins.
    pub round: bool,
    /// Shadow blur radius and colour.
    pub glow: Option<(f32, Color)>,
}

impl Stroke {
    pub fn new(paint: impl Into<Paint>, width: f32) -> Self {
        Self {
            paint: paint.into(),
            width,
            round: false,
            glow: None,
        }
    }

    pub fn round(mut self) -> Self {
        self.round = true;
        self
    }

    pub fn glow(mut self, blur: f32, color: Color) -> Self {
        if blur > 0.0 {
            self.glow = Some((blur, color));
        }
        self
    }
}

/// A canvas-like surface the mode renderers draw into.
///
/// Implementations own the backing buffer; `resize` must update it in the
/// same call so size and buffer never disagree.
pub trait DrawTarget {
    fn resize(&mut self, dims: Dimensions);

    /// Erase the whole surface.
    fn clear(&mut self);

    /// Paint a translucent layer over the whole surface so earlier frames
    /// fade out as trails.
    fn fade(&mut self, color: Color);

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint);

    fn stroke_circle(&mut self, center: Vec2, radius: f32, stroke: &Stroke);

    /// Open polyline through `points`.
    fn stroke_path(&mut self, points: &[Vec2], stroke: &Stroke);

    /// Closed, filled polygon.
    fn fill_polygon(&mut self, points: &[Vec2], paint: &Paint);

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color);

    fn line(&mut self, from: Vec2, to: Vec2, stroke: &Stroke) {
        self.stroke_path(&[from, to], stroke);
    }
}
