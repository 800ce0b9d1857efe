//! The box abstraction shared by every layout node.
//!
//! ```text
//!                       ---  ↑
//!                      / ,_\ │
//!                    ,_| |_  │ height
//!                    |_, ,_| │
//!                      | |   ↓
//!   reference point ×─ | | ─── baseline (y)
//!                      | |   ↑
//!                     /_/    ↓ depth
//!                    ←─────→
//!                     width
//! ```
//!
//! `y` grows downward, so a box drawn at `(x, y)` covers the rows
//! `y - height ..= y + depth`.

use mathbox_types::{Color, FontId, Result};
use serde::Serialize;

use crate::geometry_group::GeometryGroup;
use crate::hbox::HorizontalBox;
use crate::over_under::OverUnderBox;
use crate::renderer::ElementRenderer;
use crate::rule::HorizontalRule;
use crate::strut::StrutBox;

/// The four measurements of a box, fixed at construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Metrics {
    pub width: f64,
    /// Extent above the baseline.
    pub height: f64,
    /// Extent below the baseline.
    pub depth: f64,
    /// Baseline offset applied by the parent. Positive moves the box down.
    pub shift: f64,
}

impl Metrics {
    /// Total vertical extent, `height + depth`.
    pub fn total_height(&self) -> f64 {
        self.height + self.depth
    }
}

/// A node of the layout tree.
///
/// Boxes are immutable once built. Every variant is constructed from
/// already-measured children and owns them exclusively.
#[derive(Debug, Clone, PartialEq)]
pub enum TexBox {
    Rule(HorizontalRule),
    OverUnder(OverUnderBox),
    Strut(StrutBox),
    Horizontal(HorizontalBox),
}

impl TexBox {
    pub fn metrics(&self) -> Metrics {
        match self {
            TexBox::Rule(b) => b.metrics(),
            TexBox::OverUnder(b) => b.metrics(),
            TexBox::Strut(b) => b.metrics(),
            TexBox::Horizontal(b) => b.metrics(),
        }
    }

    pub fn width(&self) -> f64 {
        self.metrics().width
    }

    pub fn height(&self) -> f64 {
        self.metrics().height
    }

    pub fn depth(&self) -> f64 {
        self.metrics().depth
    }

    pub fn shift(&self) -> f64 {
        self.metrics().shift
    }

    pub fn total_height(&self) -> f64 {
        self.metrics().total_height()
    }

    pub fn foreground(&self) -> Option<Color> {
        match self {
            TexBox::Rule(b) => b.foreground(),
            TexBox::OverUnder(_) | TexBox::Strut(_) | TexBox::Horizontal(_) => None,
        }
    }

    /// Kept for completeness; no variant paints its background.
    pub fn background(&self) -> Option<Color> {
        match self {
            TexBox::Rule(b) => b.background(),
            TexBox::OverUnder(_) | TexBox::Strut(_) | TexBox::Horizontal(_) => None,
        }
    }

    /// Append this box's shapes to `group`.
    ///
    /// `(x, y)` is the reference point on the baseline in unscaled layout
    /// units. Every coordinate and length is multiplied by `scale` before
    /// it is stored. `scale` must be finite and positive.
    pub fn render_geometry(&self, group: &mut GeometryGroup, scale: f64, x: f64, y: f64) {
        debug_assert!(scale.is_finite() && scale > 0.0, "bad scale {scale}");
        match self {
            TexBox::Rule(b) => b.render_geometry(group, scale, x, y),
            TexBox::OverUnder(b) => b.render_geometry(group, scale, x, y),
            TexBox::Strut(_) => {},
            TexBox::Horizontal(b) => b.render_geometry(group, scale, x, y),
        }
    }

    /// Draw this box through an immediate renderer.
    ///
    /// `(x, y)` is interpreted as in [`render_geometry`](Self::render_geometry)
    /// but left unscaled; the renderer owns its scale.
    pub fn render_to<R: ElementRenderer + ?Sized>(
        &self,
        renderer: &mut R,
        x: f64,
        y: f64,
    ) -> Result<()> {
        match self {
            TexBox::Rule(b) => b.render_to(renderer, x, y),
            TexBox::OverUnder(b) => b.render_to(renderer, x, y),
            TexBox::Strut(_) => Ok(()),
            TexBox::Horizontal(b) => b.render_to(renderer, x, y),
        }
    }

    /// Font of this box's trailing content, or [`FontId::NONE`].
    ///
    /// Callers must treat the sentinel as "not applicable".
    pub fn last_font_id(&self) -> FontId {
        match self {
            TexBox::Horizontal(b) => b.last_font_id(),
            TexBox::Rule(_) | TexBox::OverUnder(_) | TexBox::Strut(_) => FontId::NONE,
        }
    }
}

impl From<HorizontalRule> for TexBox {
    fn from(b: HorizontalRule) -> Self {
        TexBox::Rule(b)
    }
}

impl From<OverUnderBox> for TexBox {
    fn from(b: OverUnderBox) -> Self {
        TexBox::OverUnder(b)
    }
}

impl From<StrutBox> for TexBox {
    fn from(b: StrutBox) -> Self {
        TexBox::Strut(b)
    }
}

impl From<HorizontalBox> for TexBox {
    fn from(b: HorizontalBox) -> Self {
        TexBox::Horizontal(b)
    }
}
