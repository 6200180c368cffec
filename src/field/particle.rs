use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;
use rand::distributions::Standard;

use super::bounds::{Boundary, Dimensions};
use crate::config::SeedParams;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Angle advanced by `frequency` each tick for oscillating drift.
    pub phase: f32,
    pub frequency: f32,
    /// Stable position in the seeded set, used for colour alternation.
    pub index: usize,
}

impl Particle {
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }
}

/// The particle set owned by one mode activation.
#[derive(Debug, Clone, Default)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

fn unit(rng: &mut impl Rng) -> f32 {
    rng.sample(Standard)
}

impl ParticleField {
    pub fn new(particles: Vec<Particle>) -> Self {
        Self { particles }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Uniform positions over the surface, symmetric random velocities.
    pub fn seed(params: &SeedParams, dims: Dimensions, rng: &mut impl Rng) -> Self {
        let width = dims.width.max(0.0);
        let height = dims.height.max(0.0);
        let particles = (0..params.count)
            .map(|index| {
                let pos = Vec2::new(unit(rng) * width, unit(rng) * height);
                let vel = Vec2::new(
                    (unit(rng) - 0.5) * params.velocity_spread,
                    (unit(rng) - 0.5) * params.velocity_spread,
                );
                let radius = params.radius_min + unit(rng) * params.radius_extent;
                let (phase, frequency) = if params.oscillating {
                    (unit(rng) * TAU, unit(rng) * 0.08 + 0.04)
                } else {
                    (0.0, 0.0)
                };
                Particle {
                    pos,
                    vel,
                    radius,
                    phase,
                    frequency,
                    index,
                }
            })
            .collect();
        Self { particles }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    /// Integrates velocity and applies `boundary` to every particle.
    pub fn step(&mut self, boundary: Boundary, dims: Dimensions) {
        for p in self.particles.iter_mut() {
            p.advance();
            boundary.apply(p, dims);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    const PARAMS: SeedParams = SeedParams {
        count: 40,
        velocity_spread: 2.0,
        radius_min: 1.0,
        radius_extent: 2.0,
        oscillating: false,
    };

    #[test]
    fn seeds_inside_surface_with_bounded_velocity() {
        let dims = Dimensions::new(800.0, 600.0);
        let mut rng = SmallRng::seed_from_u64(1);
        let field = ParticleField::seed(&PARAMS, dims, &mut rng);

        assert_eq!(field.len(), 40);
        for (i, p) in field.particles().iter().enumerate() {
            assert_eq!(p.index, i);
            assert!((0.0..=dims.width).contains(&p.pos.x), "{:?}", p.pos);
            assert!((0.0..=dims.height).contains(&p.pos.y), "{:?}", p.pos);
            assert!(p.vel.x.abs() <= 1.0 && p.vel.y.abs() <= 1.0);
            assert!((1.0..=3.0).contains(&p.radius));
            assert_eq!(p.frequency, 0.0);
        }
    }

    #[test]
    fn oscillating_seed_sets_phase_and_frequency() {
        let params = SeedParams {
            oscillating: true,
            velocity_spread: 3.0,
            ..PARAMS
        };
        let mut rng = SmallRng::seed_from_u64(2);
        let field = ParticleField::seed(&params, Dimensions::new(100.0, 100.0), &mut rng);
        for p in field.particles() {
            assert!((0.0..=TAU).contains(&p.phase));
            assert!((0.04..=0.12).contains(&p.frequency));
            assert!(p.vel.x.abs() <= 1.5);
        }
    }

    #[test]
    fn seeding_is_deterministic_per_seed() {
        let dims = Dimensions::new(640.0, 480.0);
        let a = ParticleField::seed(&PARAMS, dims, &mut SmallRng::seed_from_u64(9));
        let b = ParticleField::seed(&PARAMS, dims, &mut SmallRng::seed_from_u64(9));
        assert_eq!(a.particles(), b.particles());
    }

    #[test]
    fn zero_surface_seeds_at_origin() {
        let mut rng = SmallRng::seed_from_u64(3);
        let field = ParticleField::seed(&PARAMS, Dimensions::default(), &mut rng);
        assert!(field.particles().iter().all(|p| p.pos == Vec2::ZERO));
    }

    #[test]
    fn wrapped_steps_stay_in_bounds() {
        let dims = Dimensions::new(320.0, 200.0);
        let mut rng = SmallRng::seed_from_u64(4);
        let mut field = ParticleField::seed(&PARAMS, dims, &mut rng);
        for _ in 0..2_000 {
            field.step(Boundary::Wrap { margin: 0.0 }, dims);
            assert!(field.particles().iter().all(|p| dims.contains(p.pos)));
        }
    }

    #[test]
    fn bounce_flips_once_per_crossing() {
        let dims = Dimensions::new(10.0, 10.0);
        let mut field = ParticleField::new(vec![Particle {
            pos: Vec2::new(9.5, 5.0),
            vel: Vec2::new(1.0, 0.0),
            ..Particle::default()
        }]);

        let mut flips = 0;
        let mut crossings = 0;
        let mut last = field.particles()[0].vel.x;
        for _ in 0..100 {
            let before = field.particles()[0];
            let next = before.pos.x + before.vel.x;
            if !(0.0..=dims.width).contains(&next) {
                crossings += 1;
            }
            field.step(Boundary::Bounce, dims);
            let vx = field.particles()[0].vel.x;
            if vx.signum() != last.signum() {
                flips += 1;
            }
            last = vx;
        }
        assert!(crossings > 0);
        assert_eq!(flips, crossings);
    }
}
