//! Horizontal list of boxes.

use mathbox_types::{FontId, Result};

use crate::geometry_group::GeometryGroup;
use crate::renderer::ElementRenderer;
use crate::tex_box::{Metrics, TexBox};

/// Children laid out left to right on a shared baseline.
///
/// Each child is drawn at its own `shift` below the row's baseline, and the
/// row's height and depth grow to cover the shifted children.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HorizontalBox {
    metrics: Metrics,
    children: Vec<TexBox>,
}

impl HorizontalBox {
    pub fn new(children: Vec<TexBox>) -> Self {
        let mut metrics = Metrics::default();
        for child in &children {
            let m = child.metrics();
            metrics.width += m.width;
            metrics.height = metrics.height.max(m.height - m.shift);
            metrics.depth = metrics.depth.max(m.depth + m.shift);
        }
        Self { metrics, children }
    }

    pub fn metrics(&self) -> Metrics {
        self.metrics
    }

    pub fn children(&self) -> &[TexBox] {
        &self.children
    }

    /// Reference points of the children for a row drawn at `(x, y)`.
    fn child_origins(&self, x: f64, y: f64) -> impl Iterator<Item = (&TexBox, f64, f64)> {
        self.children.iter().scan(x, move |cur_x, child| {
            let origin = (child, *cur_x, y + child.shift());
            *cur_x += child.width();
            Some(origin)
        })
    }

    pub fn render_geometry(&self, group: &mut GeometryGroup, scale: f64, x: f64, y: f64) {
        for (child, cx, cy) in self.child_origins(x, y) {
            child.render_geometry(group, scale, cx, cy);
        }
    }

    pub fn render_to<R: ElementRenderer + ?Sized>(
        &self,
        renderer: &mut R,
        x: f64,
        y: f64,
    ) -> Result<()> {
        for (child, cx, cy) in self.child_origins(x, y) {
            renderer.render_element(child, cx, cy)?;
        }
        Ok(())
    }

    /// Font of the last child that has one.
    pub fn last_font_id(&self) -> FontId {
        self.children
            .iter()
            .rev()
            .map(TexBox::last_font_id)
            .find(|id| !id.is_none())
            .unwrap_or(FontId::NONE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::DrawList;
    use crate::test_utils::{rule, shifted_rule, strut};
    use mathbox_types::Rect;

    #[test]
    fn empty_row_is_zero_sized() {
        let row = HorizontalBox::new(Vec::new());
        assert_eq!(row.metrics(), Metrics::default());
        assert_eq!(row.last_font_id(), FontId::NONE);
    }

    #[test]
    fn width_sums_and_extents_cover_children() {
        let row = HorizontalBox::new(vec![strut(2.0, 5.0, 1.0), strut(3.0, 2.0, 4.0)]);
        let m = row.metrics();
        assert_eq!(m.width, 5.0);
        assert_eq!(m.height, 5.0);
        assert_eq!(m.depth, 4.0);
    }

    #[test]
    fn shift_moves_extent_downward() {
        // thickness 2, shifted down by 3: spans rows y+1 ..= y+3
        let row = HorizontalBox::new(vec![shifted_rule(2.0, 4.0, 3.0)]);
        let m = row.metrics();
        assert_eq!(m.height, 0.0);
        assert_eq!(m.depth, 3.0);
    }

    #[test]
    fn children_advance_and_apply_shift() {
        let row = HorizontalBox::new(vec![
            rule(1.0, 4.0),
            strut(2.0, 0.0, 0.0),
            shifted_rule(1.0, 3.0, 2.0),
        ]);
        let mut list = DrawList::new();
        row.render_to(&mut list, 10.0, 20.0).unwrap();
        let rects: Vec<Rect> = list.flatten().into_iter().map(|(r, _)| r).collect();
        assert_eq!(
            rects,
            vec![Rect::new(10.0, 19.0, 4.0, 1.0), Rect::new(16.0, 21.0, 3.0, 1.0)]
        );

        let mut group = GeometryGroup::new();
        row.render_geometry(&mut group, 1.0, 10.0, 20.0);
        assert_eq!(group.flatten(), rects);
    }
}
