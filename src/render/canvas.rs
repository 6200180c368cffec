use std::f64::consts::TAU;

use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasGradient, CanvasRenderingContext2d, HtmlCanvasElement};

use super::color::Color;
use super::target::{DrawTarget, Paint, Stop, Stroke};
use crate::error::BackdropError;
use crate::field::Dimensions;

/// `DrawTarget` backed by a `<canvas>` 2D context.
pub struct CanvasTarget {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    dims: Dimensions,
}

fn log_failure(op: &str, result: Result<(), JsValue>) {
    if let Err(err) = result {
        log::debug!("canvas {} failed: {:?}", op, err);
    }
}

impl CanvasTarget {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, BackdropError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| BackdropError::js(BackdropError::SurfaceUnavailable, e))?
            .ok_or_else(|| BackdropError::SurfaceUnavailable("2d context not supported".into()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| BackdropError::SurfaceUnavailable("context is not 2d".into()))?;
        let dims = Dimensions::new(canvas.width() as f32, canvas.height() as f32);
        Ok(Self { canvas, ctx, dims })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    fn gradient(&self, paint: &Paint) -> Option<CanvasGradient> {
        let (gradient, stops) = match paint {
            Paint::Solid(_) => return None,
            Paint::Radial { center, radius, stops } => {
                let (x, y) = (center.x as f64, center.y as f64);
                match self.ctx.create_radial_gradient(x, y, 0.0, x, y, radius.max(0.0) as f64) {
                    Ok(g) => (g, stops),
                    Err(err) => {
                        log::debug!("radial gradient rejected: {:?}", err);
                        return None;
                    }
                }
            }
            Paint::Linear { from, to, stops } => (
                self.ctx
                    .create_linear_gradient(from.x as f64, from.y as f64, to.x as f64, to.y as f64),
                stops,
            ),
        };
        for Stop { offset, color } in stops {
            log_failure(
                "add_color_stop",
                gradient.add_color_stop((*offset).clamp(0.0, 1.0), &color.css()),
            );
        }
        Some(gradient)
    }

    fn set_fill(&self, paint: &Paint) {
        match (paint, self.gradient(paint)) {
            (_, Some(gradient)) => self.ctx.set_fill_style_canvas_gradient(&gradient),
            (Paint::Solid(color), None) => self.ctx.set_fill_style_str(&color.css()),
            (_, None) => self.ctx.set_fill_style_str("transparent"),
        }
    }

    fn set_stroke(&self, stroke: &Stroke) {
        match (&stroke.paint, self.gradient(&stroke.paint)) {
            (_, Some(gradient)) => self.ctx.set_stroke_style_canvas_gradient(&gradient),
            (Paint::Solid(color), None) => self.ctx.set_stroke_style_str(&color.css()),
            (_, None) => self.ctx.set_stroke_style_str("transparent"),
        }
        self.ctx.set_line_width(stroke.width.max(0.0) as f64);
        let (cap, join) = if stroke.round { ("round", "round") } else { ("butt", "miter") };
        self.ctx.set_line_cap(cap);
        self.ctx.set_line_join(join);
        match stroke.glow {
            Some((blur, color)) => {
                self.ctx.set_shadow_blur(blur as f64);
                self.ctx.set_shadow_color(&color.css());
            }
            None => self.ctx.set_shadow_blur(0.0),
        }
    }

    fn circle_path(&self, center: Vec2, radius: f32) -> bool {
        if !(radius > 0.0) {
            return false;
        }
        self.ctx.begin_path();
        match self.ctx.arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU) {
            Ok(()) => true,
            Err(err) => {
                log::debug!("arc rejected: {:?}", err);
                false
            }
        }
    }

    fn polyline(&self, points: &[Vec2]) -> bool {
        let Some((first, rest)) = points.split_first() else {
            return false;
        };
        self.ctx.begin_path();
        self.ctx.move_to(first.x as f64, first.y as f64);
        for p in rest {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        true
    }
}

impl DrawTarget for CanvasTarget {
    fn resize(&mut self, dims: Dimensions) {
        let width = dims.width.max(0.0) as u32;
        let height = dims.height.max(0.0) as u32;
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.dims = Dimensions::new(width as f32, height as f32);
    }

    fn clear(&mut self) {
        self.ctx
            .clear_rect(0.0, 0.0, self.dims.width as f64, self.dims.height as f64);
    }

    fn fade(&mut self, color: Color) {
        self.ctx.set_shadow_blur(0.0);
        self.ctx.set_fill_style_str(&color.css());
        self.ctx
            .fill_rect(0.0, 0.0, self.dims.width as f64, self.dims.height as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint) {
        if self.circle_path(center, radius) {
            self.set_fill(paint);
            self.ctx.fill();
        }
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, stroke: &Stroke) {
        if self.circle_path(center, radius) {
            self.set_stroke(stroke);
            self.ctx.stroke();
            self.ctx.set_shadow_blur(0.0);
        }
    }

    fn stroke_path(&mut self, points: &[Vec2], stroke: &Stroke) {
        if points.len() >= 2 && self.polyline(points) {
            self.set_stroke(stroke);
            self.ctx.stroke();
            self.ctx.set_shadow_blur(0.0);
        }
    }

    fn fill_polygon(&mut self, points: &[Vec2], paint: &Paint) {
        if points.len() >= 3 && self.polyline(points) {
            self.ctx.close_path();
            self.set_fill(paint);
            self.ctx.fill();
        }
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color) {
        self.ctx.set_fill_style_str(&color.css());
        self.ctx
            .fill_rect(origin.x as f64, origin.y as f64, size.x as f64, size.y as f64);
    }
}
