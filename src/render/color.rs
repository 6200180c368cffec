use std::fmt;

use serde::Deserialize;

/// A CSS colour with its own alpha. Alpha is clamped when formatted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    Rgba { r: u8, g: u8, b: u8, a: f32 },
    /// Hue in degrees, saturation and lightness in percent.
    Hsla { h: f32, s: f32, l: f32, a: f32 },
}

pub const VIOLET: Color = Color::rgb(168, 85, 247);
pub const BLUE: Color = Color::rgb(59, 130, 246);
pub const PURPLE: Color = Color::rgb(147, 51, 234);
pub const WHITE: Color = Color::rgb(255, 255, 255);
/// Needle glow.
pub const GLOW: Color = Color::rgb(124, 58, 237);

pub const VIOLET_HUE: f32 = 270.0;
pub const BLUE_HUE: f32 = 200.0;

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgba { r, g, b, a: 1.0 }
    }

    pub const fn hsla(h: f32, s: f32, l: f32, a: f32) -> Self {
        Color::Hsla { h, s, l, a }
    }

    pub fn alpha(&self) -> f32 {
        match *self {
            Color::Rgba { a, .. } | Color::Hsla { a, .. } => a,
        }
    }

    pub fn with_alpha(self, alpha: f32) -> Self {
        match self {
            Color::Rgba { r, g, b, .. } => Color::Rgba { r, g, b, a: alpha },
            Color::Hsla { h, s, l, .. } => Color::Hsla { h, s, l, a: alpha },
        }
    }

    pub fn css(&self) -> String {
        self.to_string()
    }
}

fn clamp_unit(v: f32) -> f32 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Color::Rgba { r, g, b, a } => write!(f, "rgba({}, {}, {}, {})", r, g, b, clamp_unit(a)),
            Color::Hsla { h, s, l, a } => write!(
                f,
                "hsla({}, {}%, {}%, {})",
                h.rem_euclid(360.0),
                s.clamp(0.0, 100.0),
                l.clamp(0.0, 100.0),
                clamp_unit(a)
            ),
        }
    }
}

/// How particles and lattice points are coloured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Palette {
    /// Violet and blue alternating by index parity.
    #[default]
    TwoTone,
    /// Hue sweeping with index and time.
    Spectrum,
}

const SWEEP_STEP: f32 = 24.0;
const SWEEP_RATE: f32 = 40.0;

/// `(index * step + time * rate) mod 360`
pub fn hue_sweep(index: usize, step: f32, time: f32, rate: f32) -> f32 {
    (index as f32 * step + time * rate).rem_euclid(360.0)
}

impl Palette {
    /// Main colour for element `index`; `time` is in seconds.
    pub fn primary(&self, index: usize, time: f32, alpha: f32) -> Color {
        match self {
            Palette::TwoTone if index % 2 == 0 => VIOLET.with_alpha(alpha),
            Palette::TwoTone => BLUE.with_alpha(alpha),
            Palette::Spectrum => Color::hsla(self.hue(index, time), 80.0, 62.0, alpha),
        }
    }

    /// Contrasting colour used for halos and trails around `primary`.
    pub fn accent(&self, index: usize, time: f32, alpha: f32) -> Color {
        match self {
            Palette::TwoTone => self.primary(index + 1, time, alpha),
            Palette::Spectrum => Color::hsla(self.hue(index, time) + 180.0, 80.0, 62.0, alpha),
        }
    }

    /// Base hue for HSL-styled modes.
    pub fn hue(&self, index: usize, time: f32) -> f32 {
        match self {
            Palette::TwoTone if index % 2 == 0 => VIOLET_HUE,
            Palette::TwoTone => BLUE_HUE,
            Palette::Spectrum => hue_sweep(index, SWEEP_STEP, time, SWEEP_RATE),
        }
    }
}
