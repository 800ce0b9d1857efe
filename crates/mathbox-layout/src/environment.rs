//! Construction-time environment.

use mathbox_types::{Color, MathboxConfig};

/// Style values that leaf boxes snapshot when they are built.
///
/// Boxes copy the colors at construction; changing or dropping the
/// environment afterwards does not affect them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TexEnvironment {
    foreground: Option<Color>,
    background: Option<Color>,
}

impl TexEnvironment {
    pub fn new(foreground: Option<Color>, background: Option<Color>) -> Self {
        Self {
            foreground,
            background,
        }
    }

    /// Environment with colors taken from a config.
    pub fn from_config(config: &MathboxConfig) -> Self {
        Self {
            foreground: Some(config.foreground_color()),
            background: config.background_color(),
        }
    }

    pub fn foreground(&self) -> Option<Color> {
        self.foreground
    }

    pub fn background(&self) -> Option<Color> {
        self.background
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_no_colors() {
        let env = TexEnvironment::default();
        assert_eq!(env.foreground(), None);
        assert_eq!(env.background(), None);
    }

    #[test]
    fn from_config_snapshots_colors() {
        let cfg = MathboxConfig::from_toml(
            r##"
foreground = "#112233"
background = "#FFFFFF"
"##,
        )
        .unwrap();
        let env = TexEnvironment::from_config(&cfg);
        assert_eq!(env.foreground(), Some(Color::rgb(0x11, 0x22, 0x33)));
        assert_eq!(env.background(), Some(Color::WHITE));
    }
}
