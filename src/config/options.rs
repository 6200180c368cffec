use serde::Deserialize;

use super::mode::Mode;
use crate::error::BackdropError;
use crate::render::color::Palette;

/// Where the surface takes its size from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Sizing {
    /// Track the window's inner size (full-bleed section backgrounds).
    #[default]
    Window,
    /// Track the canvas element's own content box.
    Element,
}

/// Host-supplied engine options. Every field is optional in JSON.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct BackdropOptions {
    pub mode: Mode,
    /// RNG seed for particle placement; drawn from the host when absent.
    pub seed: Option<u64>,
    pub palette: Palette,
    pub sizing: Sizing,
    /// Tear down and re-seed the field whenever the surface is resized.
    pub reseed_on_resize: bool,
    /// Stop the loop and pointer tracking while the surface is off screen.
    pub pause_when_hidden: bool,
}

impl Default for BackdropOptions {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            seed: None,
            palette: Palette::default(),
            sizing: Sizing::default(),
            reseed_on_resize: false,
            pause_when_hidden: true,
        }
    }
}

impl BackdropOptions {
    pub fn with_mode(mode: Mode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, BackdropError> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_defaults() {
        let options = BackdropOptions::from_json("  ").unwrap();
        assert_eq!(options, BackdropOptions::default());
        assert!(options.pause_when_hidden);
    }

    #[test]
    fn parses_camel_case_fields() {
        let options = BackdropOptions::from_json(
            r#"{"mode":"floatingOrbs","seed":7,"palette":"spectrum","sizing":"element","reseedOnResize":true}"#,
        )
        .unwrap();
        assert_eq!(options.mode, Mode::FloatingOrbs);
        assert_eq!(options.seed, Some(7));
        assert_eq!(options.palette, Palette::Spectrum);
        assert_eq!(options.sizing, Sizing::Element);
        assert!(options.reseed_on_resize);
        assert!(options.pause_when_hidden);
    }

    #[test]
    fn unknown_mode_surfaces_as_invalid_options() {
        let err = BackdropOptions::from_json(r#"{"mode":"confetti"}"#).unwrap_err();
        assert!(matches!(err, BackdropError::InvalidOptions(_)));
        assert!(err.to_string().contains("confetti"));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(BackdropOptions::from_json(r#"{"speed":2}"#).is_err());
    }
}
