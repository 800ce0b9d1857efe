//! Error types for mathbox.

use std::io;

/// Errors produced by mathbox.
#[derive(Debug, thiserror::Error)]
pub enum MathboxError {
    #[error("invalid dimension: {what} = {value}")]
    InvalidDimension { what: &'static str, value: f64 },

    #[error("render error: {0}")]
    Render(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, MathboxError>;

/// Check that a length is finite and non-negative.
pub fn check_length(what: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(MathboxError::InvalidDimension { what, value })
    }
}

/// Check that an offset is finite. Offsets may be negative.
pub fn check_offset(what: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(MathboxError::InvalidDimension { what, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_dimension_display() {
        let e = MathboxError::InvalidDimension {
            what: "width",
            value: -1.5,
        };
        assert_eq!(format!("{e}"), "invalid dimension: width = -1.5");
    }

    #[test]
    fn render_error_display() {
        let e = MathboxError::Render("transform stack underflow".into());
        assert_eq!(format!("{e}"), "render error: transform stack underflow");
    }

    #[test]
    fn config_error_display() {
        let e = MathboxError::Config("scale must be positive".into());
        assert_eq!(format!("{e}"), "config error: scale must be positive");
    }

    #[test]
    fn io_error_from_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let e: MathboxError = io_err.into();
        let msg = format!("{e}");
        assert!(msg.contains("I/O error"));
        assert!(msg.contains("gone"));
    }

    #[test]
    fn toml_error_from_conversion() {
        let toml_err = toml::from_str::<toml::Value>("this is [[[not valid toml").unwrap_err();
        let e: MathboxError = toml_err.into();
        assert!(format!("{e}").contains("TOML parse error"));
    }

    #[test]
    fn json_error_from_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let e: MathboxError = json_err.into();
        assert!(format!("{e}").contains("JSON error"));
    }

    #[test]
    fn check_length_accepts_zero_and_positive() {
        assert_eq!(check_length("w", 0.0).unwrap(), 0.0);
        assert_eq!(check_length("w", 2.5).unwrap(), 2.5);
    }

    #[test]
    fn check_length_rejects_negative_and_nan() {
        assert!(check_length("w", -0.1).is_err());
        assert!(check_length("w", f64::NAN).is_err());
        assert!(check_length("w", f64::INFINITY).is_err());
    }

    #[test]
    fn check_offset_allows_negative() {
        assert_eq!(check_offset("shift", -3.0).unwrap(), -3.0);
        assert!(check_offset("shift", f64::NEG_INFINITY).is_err());
    }
}
