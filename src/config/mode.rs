use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::BackdropError;
use crate::field::bounds::Boundary;

/// Selectable animation behaviour. Exactly one is active per engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum Mode {
    #[default]
    Particles,
    Waves,
    LatticeArrows,
    OrbitalRings,
    BlobField,
    MeshDots,
    FlowingMesh,
    GradientMesh,
    FloatingOrbs,
    NeedleField,
    MenuBackdrop,
    AttractorField,
}

/// How a mode's particle set is seeded on activation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeedParams {
    pub count: usize,
    /// Velocity components are drawn from `(u - 0.5) * spread`.
    pub velocity_spread: f32,
    pub radius_min: f32,
    pub radius_extent: f32,
    /// Seed a per-particle phase frequency for oscillating drift.
    pub oscillating: bool,
}

impl SeedParams {
    const fn drifting(count: usize, velocity_spread: f32, radius_min: f32, radius_extent: f32) -> Self {
        Self {
            count,
            velocity_spread,
            radius_min,
            radius_extent,
            oscillating: false,
        }
    }
}

/// Static description of a mode: what to seed, how particles leave the
/// surface, and whether the pointer is tracked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModeSpec {
    pub seed: Option<SeedParams>,
    pub boundary: Boundary,
    pub interactive: bool,
    /// Distance at which pointer interaction reaches zero.
    pub falloff: f32,
    /// Fade the previous frame instead of clearing it.
    pub trails: bool,
}

const STATIC: ModeSpec = ModeSpec {
    seed: None,
    boundary: Boundary::Wrap { margin: 0.0 },
    interactive: false,
    falloff: 0.0,
    trails: false,
};

// (tag, aliases) in declaration order
const TAGS: [(Mode, &str, &[&str]); 12] = [
    (Mode::Particles, "particles", &[]),
    (Mode::Waves, "waves", &[]),
    (Mode::LatticeArrows, "lattice-arrows", &["grid"]),
    (Mode::OrbitalRings, "orbital-rings", &["projectsAnimation"]),
    (Mode::BlobField, "blob-field", &["skillsAnimation"]),
    (Mode::MeshDots, "mesh-dots", &["dots"]),
    (Mode::FlowingMesh, "flowing-mesh", &["contactAnimation"]),
    (Mode::GradientMesh, "gradient-mesh", &["simpleAnimation"]),
    (Mode::FloatingOrbs, "floating-orbs", &["floatingOrbs"]),
    (Mode::NeedleField, "needle-field", &["hero"]),
    (Mode::MenuBackdrop, "menu-backdrop", &["menu"]),
    (Mode::AttractorField, "attractor-field", &["contact"]),
];

impl Mode {
    pub const ALL: [Mode; 12] = [
        Mode::Particles,
        Mode::Waves,
        Mode::LatticeArrows,
        Mode::OrbitalRings,
        Mode::BlobField,
        Mode::MeshDots,
        Mode::FlowingMesh,
        Mode::GradientMesh,
        Mode::FloatingOrbs,
        Mode::NeedleField,
        Mode::MenuBackdrop,
        Mode::AttractorField,
    ];

    pub fn tag(self) -> &'static str {
        TAGS.iter()
            .find(|(mode, _, _)| *mode == self)
            .map(|(_, tag, _)| *tag)
            .unwrap_or("particles")
    }

    pub fn spec(self) -> ModeSpec {
        match self {
            Mode::Particles => ModeSpec {
                seed: Some(SeedParams::drifting(40, 2.0, 1.0, 2.0)),
                interactive: true,
                falloff: 300.0,
                ..STATIC
            },
            Mode::Waves => ModeSpec {
                interactive: true,
                falloff: 400.0,
                ..STATIC
            },
            Mode::LatticeArrows => ModeSpec {
                interactive: true,
                falloff: 350.0,
                ..STATIC
            },
            Mode::OrbitalRings | Mode::GradientMesh => STATIC,
            Mode::BlobField | Mode::FlowingMesh => ModeSpec {
                seed: Some(SeedParams::drifting(40, 2.0, 1.0, 2.0)),
                ..STATIC
            },
            Mode::MeshDots => ModeSpec {
                interactive: true,
                falloff: 250.0,
                ..STATIC
            },
            Mode::FloatingOrbs => ModeSpec {
                seed: Some(SeedParams::drifting(40, 2.0, 1.0, 2.0)),
                interactive: true,
                falloff: 400.0,
                ..STATIC
            },
            Mode::NeedleField => ModeSpec {
                interactive: true,
                falloff: 400.0,
                ..STATIC
            },
            Mode::MenuBackdrop => ModeSpec {
                seed: Some(SeedParams::drifting(60, 1.5, 1.0, 3.0)),
                boundary: Boundary::Bounce,
                interactive: true,
                falloff: 300.0,
                trails: false,
            },
            Mode::AttractorField => ModeSpec {
                seed: Some(SeedParams {
                    oscillating: true,
                    ..SeedParams::drifting(40, 3.0, 1.0, 2.0)
                }),
                boundary: Boundary::Wrap { margin: 100.0 },
                interactive: true,
                falloff: 300.0,
                trails: true,
            },
        }
    }
}

impl FromStr for Mode {
    type Err = BackdropError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        TAGS.iter()
            .find(|(_, tag, aliases)| *tag == s || aliases.iter().any(|alias| *alias == s))
            .map(|(mode, _, _)| *mode)
            .ok_or_else(|| BackdropError::UnknownMode(s.to_string()))
    }
}

impl TryFrom<String> for Mode {
    type Error = BackdropError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
