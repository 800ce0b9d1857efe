//! Cross-checks between the retained and immediate render paths.

use mathbox_types::{Rect, Result};

use crate::geometry_group::GeometryGroup;
use crate::renderer::{DrawList, ElementRenderer};
use crate::tex_box::TexBox;

/// Render `root` into a fresh geometry group and return its rectangles in
/// unscaled world space. `scale` must be finite and positive.
pub fn retained_rects(root: &TexBox, scale: f64, x: f64, y: f64) -> Vec<Rect> {
    debug_assert!(scale.is_finite() && scale > 0.0, "bad scale {scale}");
    let mut group = GeometryGroup::new();
    root.render_geometry(&mut group, scale, x, y);
    group
        .flatten()
        .into_iter()
        .map(|r| r.scaled(1.0 / scale))
        .collect()
}

/// Render `root` through a [`DrawList`] and return its rectangles in world
/// space.
pub fn immediate_rects(root: &TexBox, x: f64, y: f64) -> Result<Vec<Rect>> {
    let mut list = DrawList::new();
    list.render_element(root, x, y)?;
    Ok(list.flatten().into_iter().map(|(r, _)| r).collect())
}

/// True when `a` and `b` hold the same rectangles, in any order, with
/// corners equal within `eps`.
pub fn rects_congruent(a: &[Rect], b: &[Rect], eps: f64) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut matched = vec![false; b.len()];
    a.iter().all(|ra| {
        let hit = b
            .iter()
            .enumerate()
            .find(|(i, rb)| !matched[*i] && ra.approx_eq(rb, eps))
            .map(|(i, _)| i);
        match hit {
            Some(i) => {
                matched[i] = true;
                true
            },
            None => false,
        }
    })
}
