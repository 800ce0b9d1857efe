//! Render configuration, loaded from TOML.
//!
//! Every field has a default, so an empty document is a valid config:
//!
//! ```toml
//! foreground = "#000000"
//! background = "#FFFFFF"
//! scale = 20.0
//! kern = 2.0
//! tolerance = 1e-9
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::color::{Color, parse_hex_color};
use crate::error::{MathboxError, Result};

/// Top-level mathbox configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MathboxConfig {
    /// Foreground color as `#RRGGBB` or `#RRGGBBAA`.
    pub foreground: String,
    /// Optional background color.
    pub background: Option<String>,
    /// Scale applied by the retained geometry target.
    pub scale: f64,
    /// Gap between an over/under delimiter and its script.
    pub kern: f64,
    /// Absolute tolerance used when comparing the two render paths.
    pub tolerance: f64,
}

impl Default for MathboxConfig {
    fn default() -> Self {
        Self {
            foreground: "#000000".to_string(),
            background: None,
            scale: 1.0,
            kern: 2.0,
            tolerance: 1e-9,
        }
    }
}

impl MathboxConfig {
    /// Parse and validate a config from a TOML string.
    pub fn from_toml(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        log::debug!("Loaded config from {}", path.display());
        Self::from_toml(&text)
    }

    /// Reject values that would produce nonsensical geometry.
    pub fn validate(&self) -> Result<()> {
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(MathboxError::Config(format!(
                "scale must be finite and positive, got {}",
                self.scale
            )));
        }
        if !(self.kern.is_finite() && self.kern >= 0.0) {
            return Err(MathboxError::Config(format!(
                "kern must be finite and non-negative, got {}",
                self.kern
            )));
        }
        if !(self.tolerance.is_finite() && self.tolerance >= 0.0) {
            return Err(MathboxError::Config(format!(
                "tolerance must be finite and non-negative, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }

    /// Parsed foreground color. Falls back to black if unparseable.
    pub fn foreground_color(&self) -> Color {
        parse_hex_color(&self.foreground).unwrap_or_else(|| {
            log::warn!(
                "Unparseable foreground '{}' -- falling back to black",
                self.foreground
            );
            Color::BLACK
        })
    }

    /// Parsed background color, if one is configured and parseable.
    pub fn background_color(&self) -> Option<Color> {
        let raw = self.background.as_deref()?;
        let parsed = parse_hex_color(raw);
        if parsed.is_none() {
            log::warn!("Unparseable background '{raw}' -- ignoring");
        }
        parsed
    }
}
