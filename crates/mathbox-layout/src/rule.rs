//! Solid horizontal rule, used for fraction bars and similar lines.

use mathbox_types::error::{check_length, check_offset};
use mathbox_types::{Color, Rect, Result};

use crate::environment::TexEnvironment;
use crate::geometry_group::GeometryGroup;
use crate::renderer::ElementRenderer;
use crate::tex_box::Metrics;

/// Color used when a rule has no foreground.
pub const FALLBACK_COLOR: Color = Color::BLACK;

/// A filled rectangle sitting on the baseline.
///
/// The rule has `height = thickness` and no depth: its bottom edge is the
/// baseline and it extends upward.
#[derive(Debug, Clone, PartialEq)]
pub struct HorizontalRule {
    metrics: Metrics,
    foreground: Option<Color>,
    background: Option<Color>,
}

impl HorizontalRule {
    /// Build a rule, snapshotting colors from `env`.
    ///
    /// `thickness` and `width` must be finite and non-negative; `shift` must
    /// be finite.
    pub fn new(env: &TexEnvironment, thickness: f64, width: f64, shift: f64) -> Result<Self> {
        Ok(Self {
            metrics: Metrics {
                width: check_length("rule width", width)?,
                height: check_length("rule thickness", thickness)?,
                depth: 0.0,
                shift: check_offset("rule shift", shift)?,
            },
            foreground: env.foreground(),
            background: env.background(),
        })
    }

    pub fn metrics(&self) -> Metrics {
        self.metrics
    }

    pub fn thickness(&self) -> f64 {
        self.metrics.height
    }

    pub fn foreground(&self) -> Option<Color> {
        self.foreground
    }

    pub fn background(&self) -> Option<Color> {
        self.background
    }

    /// The rule's rectangle in unscaled coordinates for reference point `(x, y)`.
    pub fn rect_at(&self, x: f64, y: f64) -> Rect {
        Rect::new(
            x,
            y - self.metrics.height,
            self.metrics.width,
            self.metrics.height,
        )
    }

    pub fn render_geometry(&self, group: &mut GeometryGroup, scale: f64, x: f64, y: f64) {
        group.push_rect(self.rect_at(x, y).scaled(scale));
    }

    pub fn render_to<R: ElementRenderer + ?Sized>(
        &self,
        renderer: &mut R,
        x: f64,
        y: f64,
    ) -> Result<()> {
        let color = self.foreground.unwrap_or(FALLBACK_COLOR);
        renderer.render_rectangle(self.rect_at(x, y), color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, DrawList};
    use mathbox_types::MathboxError;

    fn env() -> TexEnvironment {
        TexEnvironment::new(Some(Color::rgb(200, 0, 0)), Some(Color::WHITE))
    }

    #[test]
    fn metrics_follow_constructor() {
        let r = HorizontalRule::new(&env(), 0.5, 12.0, -1.0).unwrap();
        let m = r.metrics();
        assert_eq!(m.width, 12.0);
        assert_eq!(m.height, 0.5);
        assert_eq!(m.depth, 0.0);
        assert_eq!(m.shift, -1.0);
        assert_eq!(r.thickness(), 0.5);
    }

    #[test]
    fn colors_are_snapshotted() {
        let mut e = env();
        let r = HorizontalRule::new(&e, 1.0, 1.0, 0.0).unwrap();
        e = TexEnvironment::default();
        assert_eq!(e.foreground(), None);
        assert_eq!(r.foreground(), Some(Color::rgb(200, 0, 0)));
        assert_eq!(r.background(), Some(Color::WHITE));
    }

    #[test]
    fn negative_thickness_is_rejected() {
        let err = HorizontalRule::new(&env(), -1.0, 10.0, 0.0).unwrap_err();
        assert!(matches!(
            err,
            MathboxError::InvalidDimension {
                what: "rule thickness",
                ..
            }
        ));
    }

    #[test]
    fn negative_width_is_rejected() {
        assert!(HorizontalRule::new(&env(), 1.0, -10.0, 0.0).is_err());
    }

    #[test]
    fn non_finite_shift_is_rejected() {
        assert!(HorizontalRule::new(&env(), 1.0, 10.0, f64::NAN).is_err());
    }

    #[test]
    fn geometry_sits_on_baseline() {
        let r = HorizontalRule::new(&env(), 2.0, 10.0, 0.0).unwrap();
        let mut group = GeometryGroup::new();
        r.render_geometry(&mut group, 1.0, 3.0, 7.0);
        assert_eq!(group.flatten(), vec![Rect::new(3.0, 5.0, 10.0, 2.0)]);
    }

    #[test]
    fn geometry_is_scaled() {
        let r = HorizontalRule::new(&env(), 2.0, 10.0, 0.0).unwrap();
        let mut group = GeometryGroup::new();
        r.render_geometry(&mut group, 3.0, 1.0, 4.0);
        // [x*s, (y-h)*s] to [(x+w)*s, y*s]
        assert_eq!(group.flatten(), vec![Rect::new(3.0, 6.0, 30.0, 6.0)]);
    }

    #[test]
    fn render_to_fills_with_foreground() {
        let r = HorizontalRule::new(&env(), 2.0, 10.0, 0.0).unwrap();
        let mut list = DrawList::new();
        r.render_to(&mut list, 3.0, 7.0).unwrap();
        assert_eq!(
            list.commands(),
            &[DrawCommand::FillRect {
                rect: Rect::new(3.0, 5.0, 10.0, 2.0),
                color: Color::rgb(200, 0, 0),
            }]
        );
    }

    #[test]
    fn render_to_falls_back_to_black() {
        let r = HorizontalRule::new(&TexEnvironment::default(), 1.0, 1.0, 0.0).unwrap();
        let mut list = DrawList::new();
        r.render_to(&mut list, 0.0, 0.0).unwrap();
        assert_eq!(list.flatten()[0].1, FALLBACK_COLOR);
    }

    #[test]
    fn zero_sized_rule_is_valid() {
        let r = HorizontalRule::new(&env(), 0.0, 0.0, 0.0).unwrap();
        let mut group = GeometryGroup::new();
        r.render_geometry(&mut group, 1.0, 0.0, 0.0);
        assert_eq!(group.rect_count(), 1);
    }
}
