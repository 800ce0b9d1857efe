//! Retained geometry target.
//!
//! A [`GeometryGroup`] accumulates rectangles and nested groups. Each group
//! carries an ordered transform list that applies to everything beneath it.
//! Coordinates arrive already scaled by the caller.

use mathbox_types::{Matrix, Rect, Transform};
use serde::Serialize;

/// A retained shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Geometry {
    Rectangle(Rect),
    Group(GeometryGroup),
}

/// A transformed collection of shapes.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GeometryGroup {
    transforms: Vec<Transform>,
    children: Vec<Geometry>,
}

impl GeometryGroup {
    /// An untransformed, empty group.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty group whose children are mapped through `transforms`,
    /// outermost first.
    pub fn with_transforms(transforms: Vec<Transform>) -> Self {
        Self {
            transforms,
            children: Vec::new(),
        }
    }

    pub fn transforms(&self) -> &[Transform] {
        &self.transforms
    }

    pub fn children(&self) -> &[Geometry] {
        &self.children
    }

    pub fn push_rect(&mut self, rect: Rect) {
        self.children.push(Geometry::Rectangle(rect));
    }

    pub fn push_group(&mut self, group: GeometryGroup) {
        self.children.push(Geometry::Group(group));
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of rectangles in this group and all nested groups.
    pub fn rect_count(&self) -> usize {
        self.children
            .iter()
            .map(|child| match child {
                Geometry::Rectangle(_) => 1,
                Geometry::Group(g) => g.rect_count(),
            })
            .sum()
    }

    /// All rectangles mapped into the coordinate space of this group's
    /// parent, in insertion order.
    pub fn flatten(&self) -> Vec<Rect> {
        let mut out = Vec::with_capacity(self.rect_count());
        self.flatten_into(&Matrix::IDENTITY, &mut out);
        out
    }

    fn flatten_into(&self, parent: &Matrix, out: &mut Vec<Rect>) {
        let matrix = parent.compose(&Matrix::from_transforms(&self.transforms));
        for child in &self.children {
            match child {
                Geometry::Rectangle(rect) => out.push(matrix.transform_rect(rect)),
                Geometry::Group(group) => group.flatten_into(&matrix, out),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_group_is_empty() {
        let g = GeometryGroup::new();
        assert!(g.is_empty());
        assert_eq!(g.len(), 0);
        assert_eq!(g.rect_count(), 0);
        assert!(g.transforms().is_empty());
    }

    #[test]
    fn flatten_untransformed() {
        let mut g = GeometryGroup::new();
        g.push_rect(Rect::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(g.flatten(), vec![Rect::new(1.0, 2.0, 3.0, 4.0)]);
    }

    #[test]
    fn nested_groups_compose_transforms() {
        let mut inner = GeometryGroup::with_transforms(vec![Transform::Rotate { degrees: 90.0 }]);
        inner.push_rect(Rect::new(0.0, 0.0, 4.0, 1.0));
        let mut outer =
            GeometryGroup::with_transforms(vec![Transform::Translate { x: 10.0, y: 20.0 }]);
        outer.push_group(inner);
        outer.push_rect(Rect::new(0.0, 0.0, 1.0, 1.0));

        assert_eq!(outer.len(), 2);
        assert_eq!(outer.rect_count(), 2);
        let flat = outer.flatten();
        assert!(flat[0].approx_eq(&Rect::new(9.0, 20.0, 1.0, 4.0), 1e-12));
        assert!(flat[1].approx_eq(&Rect::new(10.0, 20.0, 1.0, 1.0), 1e-12));
    }

    #[test]
    fn serializes_as_tagged_tree() {
        let mut g = GeometryGroup::with_transforms(vec![Transform::Rotate { degrees: 90.0 }]);
        g.push_rect(Rect::new(0.0, 0.0, 1.0, 1.0));
        let json = serde_json::to_value(&g).unwrap();
        assert_eq!(json["transforms"][0]["kind"], "rotate");
        assert_eq!(json["children"][0]["kind"], "rectangle");
    }
}
