use super::particle::Particle;

/// A pair of particles close enough to be linked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
    pub distance: f32,
}

impl Edge {
    /// Linear fade from `threshold / normalizer` at contact to 0 at `threshold`.
    pub fn opacity(&self, threshold: f32, normalizer: f32) -> f32 {
        if normalizer <= 0.0 {
            return 0.0;
        }
        ((threshold - self.distance) / normalizer).max(0.0)
    }
}

/// All unordered pairs closer than `threshold`, `a < b`.
///
/// Quadratic in the particle count; meshes keep their sets small.
pub fn connections(particles: &[Particle], threshold: f32) -> Vec<Edge> {
    let mut edges = Vec::new();
    for (a, pa) in particles.iter().enumerate() {
        for (offset, pb) in particles[a + 1..].iter().enumerate() {
            let distance = pa.pos.distance(pb.pos);
            if distance < threshold {
                edges.push(Edge {
                    a,
                    b: a + 1 + offset,
                    distance,
                });
            }
        }
    }
    edges
}
