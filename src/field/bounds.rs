use glam::Vec2;

use super::particle::Particle;

/// Current drawing surface size in surface units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Dimensions {
    pub width: f32,
    pub height: f32,
}

impl Dimensions {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Zero, negative or non-finite sizes cannot be drawn into.
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite())
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= 0.0 && p.x < self.width && p.y >= 0.0 && p.y < self.height
    }
}

/// What happens to a particle that leaves the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Boundary {
    /// Re-enter from the opposite edge. The wrapped span is widened by
    /// `margin` on every side.
    Wrap { margin: f32 },
    /// Reflect the velocity away from the crossed edge and clamp.
    Bounce,
}

impl Boundary {
    /// Brings `particle` back inside `dims`. Callers skip empty surfaces.
    pub fn apply(&self, particle: &mut Particle, dims: Dimensions) {
        match *self {
            Boundary::Wrap { margin } => {
                particle.pos.x = wrap(particle.pos.x, -margin, dims.width + margin);
                particle.pos.y = wrap(particle.pos.y, -margin, dims.height + margin);
            }
            Boundary::Bounce => {
                bounce(&mut particle.pos.x, &mut particle.vel.x, dims.width);
                bounce(&mut particle.pos.y, &mut particle.vel.y, dims.height);
            }
        }
    }
}

/// Maps `value` into `[min, max)`.
fn wrap(value: f32, min: f32, max: f32) -> f32 {
    let span = max - min;
    if span <= 0.0 || !value.is_finite() {
        return min;
    }
    if value >= min && value < max {
        return value;
    }
    let wrapped = min + (value - min).rem_euclid(span);
    // rem_euclid can round up to exactly `span` for tiny negative offsets
    if wrapped >= max { min } else { wrapped }
}

fn bounce(pos: &mut f32, vel: &mut f32, extent: f32) {
    if *pos < 0.0 {
        *vel = vel.abs();
    } else if *pos > extent {
        *vel = -vel.abs();
    }
    *pos = pos.clamp(0.0, extent.max(0.0));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn particle_at(x: f32, y: f32, vx: f32, vy: f32) -> Particle {
        Particle {
            pos: Vec2::new(x, y),
            vel: Vec2::new(vx, vy),
            ..Particle::default()
        }
    }

    #[test]
    fn empty_dimensions() {
        assert!(Dimensions::new(0.0, 600.0).is_empty());
        assert!(Dimensions::new(800.0, -1.0).is_empty());
        assert!(Dimensions::new(f32::NAN, 10.0).is_empty());
        assert!(!Dimensions::new(800.0, 600.0).is_empty());
    }

    #[test]
    fn wrap_re_enters_from_opposite_edge() {
        let dims = Dimensions::new(800.0, 600.0);
        let mut p = particle_at(-0.5, 601.0, -1.0, 1.0);
        Boundary::Wrap { margin: 0.0 }.apply(&mut p, dims);
        assert_eq!(p.pos, Vec2::new(799.5, 1.0));
        assert_eq!(p.vel, Vec2::new(-1.0, 1.0));
    }

    #[test]
    fn wrap_stays_half_open() {
        assert_eq!(wrap(800.0, 0.0, 800.0), 0.0);
        assert!(wrap(-1e-9, 0.0, 800.0) < 800.0);
        assert_eq!(wrap(1700.0, 0.0, 800.0), 100.0);
    }

    #[test]
    fn wrap_with_margin_uses_widened_span() {
        let dims = Dimensions::new(400.0, 300.0);
        let mut p = particle_at(-101.0, 450.0, 0.0, 0.0);
        Boundary::Wrap { margin: 100.0 }.apply(&mut p, dims);
        assert_eq!(p.pos.x, 499.0);
        assert_eq!(p.pos.y, -50.0);
    }

    #[test]
    fn bounce_reflects_and_clamps() {
        let dims = Dimensions::new(800.0, 600.0);
        let mut p = particle_at(801.0, -2.0, 1.0, -0.5);
        Boundary::Bounce.apply(&mut p, dims);
        assert_eq!(p.pos, Vec2::new(800.0, 0.0));
        assert_eq!(p.vel, Vec2::new(-1.0, 0.5));
    }

    #[test]
    fn bounce_after_shrink_turns_inward_once() {
        let dims = Dimensions::new(400.0, 300.0);
        // left outside by a resize while already heading back in
        let mut p = particle_at(700.0, 100.0, -0.5, 0.0);
        Boundary::Bounce.apply(&mut p, dims);
        assert_eq!(p.vel.x, -0.5);
        assert_eq!(p.pos.x, 400.0);
    }
}
