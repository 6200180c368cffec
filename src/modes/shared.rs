use glam::Vec2;

use crate::field::Dimensions;
use crate::render::Palette;

/// Everything a renderer reads besides its own particle field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameContext {
    pub dims: Dimensions,
    /// Surface-space pointer; `None` until the first move.
    pub pointer: Option<Vec2>,
    /// Milliseconds since the mode was activated.
    pub elapsed_ms: f64,
    pub palette: Palette,
}

impl FrameContext {
    /// Animation clock scaled by a per-mode `rate` (per millisecond).
    pub fn time(&self, rate: f64) -> f32 {
        (self.elapsed_ms * rate) as f32
    }

    pub fn seconds(&self) -> f32 {
        (self.elapsed_ms / 1000.0) as f32
    }

    pub fn interaction_at(&self, at: Vec2, falloff: f32) -> f32 {
        pointer_interaction(self.pointer, at, falloff)
    }
}

/// `max(0, 1 - distance / falloff)`: 1 at the pointer, 0 at or past `falloff`.
pub fn interaction(distance: f32, falloff: f32) -> f32 {
    if !(falloff > 0.0) || distance.is_nan() {
        return 0.0;
    }
    (1.0 - distance / falloff).clamp(0.0, 1.0)
}

pub fn pointer_interaction(pointer: Option<Vec2>, at: Vec2, falloff: f32) -> f32 {
    pointer.map_or(0.0, |p| interaction(p.distance(at), falloff))
}

/// `base + amplitude * sin(time * freq + phase)`
pub fn oscillate(base: f32, amplitude: f32, time: f32, freq: f32, phase: f32) -> f32 {
    base + amplitude * (time * freq + phase).sin()
}

/// `sin` remapped to `[0, 1]`.
pub fn pulse(t: f32) -> f32 {
    t.sin() * 0.5 + 0.5
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatticePoint {
    pub pos: Vec2,
    pub col: usize,
    pub row: usize,
}

impl LatticePoint {
    /// Checkerboard parity used for two-tone lattices.
    pub fn parity(&self) -> usize {
        (self.col + self.row) % 2
    }
}

/// Fixed-spacing grid over the surface, column-major, one point per
/// `spacing`-sized cell placed `offset` into the cell.
pub fn lattice(dims: Dimensions, spacing: f32, offset: f32) -> impl Iterator<Item = LatticePoint> {
    let count = |extent: f32| {
        if dims.is_empty() || !(spacing > 0.0) {
            0
        } else {
            (extent / spacing).ceil() as usize
        }
    };
    let cols = count(dims.width);
    let rows = count(dims.height);
    (0..cols).flat_map(move |col| {
        (0..rows).map(move |row| LatticePoint {
            pos: Vec2::new(
                offset + col as f32 * spacing,
                offset + row as f32 * spacing,
            ),
            col,
            row,
        })
    })
}

/// Samples `y(x)` every `step` units across the surface width.
pub fn wave_path(width: f32, step: f32, inclusive: bool, mut y: impl FnMut(f32) -> f32) -> Vec<Vec2> {
    if !(step > 0.0) || !(width >= 0.0) {
        return Vec::new();
    }
    let samples = (width / step).floor() as usize;
    (0..=samples)
        .map(|i| i as f32 * step)
        .filter(|x| inclusive || *x < width)
        .map(|x| Vec2::new(x, y(x)))
        .collect()
}
