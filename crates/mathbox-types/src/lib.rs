//! Foundation types for mathbox.
//!
//! This crate holds the renderer-agnostic types shared by every mathbox
//! crate: colors, geometry primitives and affine transforms, the font id
//! sentinel, configuration, and error types.

pub mod color;
pub mod config;
pub mod error;
pub mod font;
pub mod geometry;

pub use color::Color;
pub use config::MathboxConfig;
pub use error::{MathboxError, Result};
pub use font::FontId;
pub use geometry::{Matrix, Point, Rect, Transform};
