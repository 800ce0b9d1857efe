//! Base box with a delimiter and optional script stacked over or under it.
//!
//! The delimiter is measured horizontally (e.g. a brace glyph) and drawn
//! rotated by a quarter turn, so its *width* becomes the vertical room it
//! takes between the base and the script.

use mathbox_types::error::check_length;
use mathbox_types::{Point, Result, Transform};

use crate::geometry_group::GeometryGroup;
use crate::renderer::ElementRenderer;
use crate::tex_box::{Metrics, TexBox};

/// Rotation applied to the delimiter in both orientations.
pub const DELIMITER_ROTATION_DEGREES: f64 = 90.0;

/// Base, delimiter and optional script drawn as one unit.
#[derive(Debug, Clone, PartialEq)]
pub struct OverUnderBox {
    metrics: Metrics,
    base: Box<TexBox>,
    delimiter: Box<TexBox>,
    script: Option<Box<TexBox>>,
    kern: f64,
    over: bool,
}

/// Where the parts of an [`OverUnderBox`] land for a given reference point.
///
/// Shared by both render paths so they cannot drift apart.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Placement {
    /// Translation applied before the delimiter's rotation.
    delimiter_translation: Point,
    /// Reference point of the delimiter inside the rotated space.
    delimiter_origin: Point,
    /// Baseline of the script, when there is one.
    script_y: Option<f64>,
}

impl OverUnderBox {
    /// Stack `delimiter` (and `script`, if any) over the base when `over`
    /// is true, under it otherwise. `kern` separates delimiter and script.
    pub fn new(
        base: TexBox,
        delimiter: TexBox,
        script: Option<TexBox>,
        kern: f64,
        over: bool,
    ) -> Result<Self> {
        let kern = check_length("over/under kern", kern)?;
        let script_extent = script.as_ref().map_or(0.0, |s| s.total_height() + kern);
        let stack = delimiter.width() + script_extent;

        let base_metrics = base.metrics();
        let metrics = if over {
            Metrics {
                width: base_metrics.width,
                height: base_metrics.height + stack,
                depth: base_metrics.depth,
                shift: 0.0,
            }
        } else {
            Metrics {
                width: base_metrics.width,
                height: base_metrics.height,
                depth: base_metrics.depth + stack,
                shift: 0.0,
            }
        };
        log::debug!(
            "over/under box: over={over} script={} width={} height={} depth={}",
            script.is_some(),
            metrics.width,
            metrics.height,
            metrics.depth
        );

        Ok(Self {
            metrics,
            base: Box::new(base),
            delimiter: Box::new(delimiter),
            script: script.map(Box::new),
            kern,
            over,
        })
    }

    pub fn metrics(&self) -> Metrics {
        self.metrics
    }

    pub fn base(&self) -> &TexBox {
        &self.base
    }

    pub fn delimiter(&self) -> &TexBox {
        &self.delimiter
    }

    pub fn script(&self) -> Option<&TexBox> {
        self.script.as_deref()
    }

    pub fn kern(&self) -> f64 {
        self.kern
    }

    /// True when delimiter and script sit above the base.
    pub fn is_over(&self) -> bool {
        self.over
    }

    fn placement(&self, x: f64, y: f64) -> Placement {
        let dw = self.delimiter.width();
        let half = dw / 2.0;

        // Vertical midpoint reference for the rotated delimiter.
        let (center_y, translation_y) = if self.over {
            let center_y = y - self.base.height() - dw;
            (center_y, center_y + half)
        } else {
            let center_y = y + self.base.depth() + dw;
            (center_y, center_y - half)
        };

        let script_y = self.script.as_ref().map(|script| {
            if self.over {
                center_y - self.kern - script.depth()
            } else {
                center_y + self.kern + script.height()
            }
        });

        Placement {
            delimiter_translation: Point::new(x + half, translation_y),
            delimiter_origin: Point::new(-half, -self.delimiter.depth() + half),
            script_y,
        }
    }

    fn delimiter_transforms(translation: Point) -> Vec<Transform> {
        vec![
            Transform::Translate {
                x: translation.x,
                y: translation.y,
            },
            Transform::Rotate {
                degrees: DELIMITER_ROTATION_DEGREES,
            },
        ]
    }

    pub fn render_geometry(&self, group: &mut GeometryGroup, scale: f64, x: f64, y: f64) {
        log::trace!("render over/under geometry at ({x}, {y}) over={}", self.over);
        self.base.render_geometry(group, scale, x, y);

        let p = self.placement(x, y);
        let translation = Point::new(
            p.delimiter_translation.x * scale,
            p.delimiter_translation.y * scale,
        );
        let mut delimiter_group =
            GeometryGroup::with_transforms(Self::delimiter_transforms(translation));
        self.delimiter.render_geometry(
            &mut delimiter_group,
            scale,
            p.delimiter_origin.x,
            p.delimiter_origin.y,
        );
        group.push_group(delimiter_group);

        if let (Some(script), Some(script_y)) = (&self.script, p.script_y) {
            script.render_geometry(group, scale, x, script_y);
        }
    }

    pub fn render_to<R: ElementRenderer + ?Sized>(
        &self,
        renderer: &mut R,
        x: f64,
        y: f64,
    ) -> Result<()> {
        log::trace!("render over/under at ({x}, {y}) over={}", self.over);
        renderer.render_element(&self.base, x, y)?;

        let p = self.placement(x, y);
        renderer.render_transformed(
            &self.delimiter,
            &Self::delimiter_transforms(p.delimiter_translation),
            p.delimiter_origin.x,
            p.delimiter_origin.y,
        )?;

        if let (Some(script), Some(script_y)) = (&self.script, p.script_y) {
            renderer.render_element(script, x, script_y)?;
        }
        Ok(())
    }
}
