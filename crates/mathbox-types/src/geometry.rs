//! Geometry primitives: points, rectangles, and 2D affine transforms.
//!
//! Coordinates follow the layout convention: `x` grows to the right and `y`
//! grows downward, so a box's height extends toward smaller `y` values and
//! its depth toward larger ones.

use serde::{Deserialize, Serialize};

/// A point in layout space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle with position and size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from two opposite corners, in any order.
    pub fn from_corners(a: Point, b: Point) -> Self {
        let x = a.x.min(b.x);
        let y = a.y.min(b.y);
        Self {
            x,
            y,
            width: a.x.max(b.x) - x,
            height: a.y.max(b.y) - y,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// The four corners, clockwise from the top-left.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.x, self.y),
            Point::new(self.right(), self.y),
            Point::new(self.right(), self.bottom()),
            Point::new(self.x, self.bottom()),
        ]
    }

    /// Multiply position and size by `factor`.
    pub fn scaled(&self, factor: f64) -> Rect {
        Rect {
            x: self.x * factor,
            y: self.y * factor,
            width: self.width * factor,
            height: self.height * factor,
        }
    }

    /// Smallest rectangle containing both `self` and `other`.
    pub fn union(&self, other: &Rect) -> Rect {
        let x1 = self.x.min(other.x);
        let y1 = self.y.min(other.y);
        let x2 = self.right().max(other.right());
        let y2 = self.bottom().max(other.bottom());
        Rect {
            x: x1,
            y: y1,
            width: x2 - x1,
            height: y2 - y1,
        }
    }

    /// Compare corners within an absolute tolerance.
    pub fn approx_eq(&self, other: &Rect, eps: f64) -> bool {
        (self.x - other.x).abs() <= eps
            && (self.y - other.y).abs() <= eps
            && (self.right() - other.right()).abs() <= eps
            && (self.bottom() - other.bottom()).abs() <= eps
    }
}

/// A single affine transform step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Transform {
    Translate { x: f64, y: f64 },
    /// Rotation in degrees. Positive angles turn +x toward +y.
    Rotate { degrees: f64 },
    Scale { sx: f64, sy: f64 },
}

impl Transform {
    pub fn to_matrix(&self) -> Matrix {
        match *self {
            Transform::Translate { x, y } => Matrix::translation(x, y),
            Transform::Rotate { degrees } => Matrix::rotation(degrees),
            Transform::Scale { sx, sy } => Matrix::scaling(sx, sy),
        }
    }
}

/// A 2D affine matrix.
///
/// A point maps as `x' = m11*x + m12*y + dx`, `y' = m21*x + m22*y + dy`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    pub m11: f64,
    pub m12: f64,
    pub m21: f64,
    pub m22: f64,
    pub dx: f64,
    pub dy: f64,
}

impl Default for Matrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix {
    pub const IDENTITY: Self = Self {
        m11: 1.0,
        m12: 0.0,
        m21: 0.0,
        m22: 1.0,
        dx: 0.0,
        dy: 0.0,
    };

    pub const fn translation(x: f64, y: f64) -> Self {
        Self {
            dx: x,
            dy: y,
            ..Self::IDENTITY
        }
    }

    pub const fn scaling(sx: f64, sy: f64) -> Self {
        Self {
            m11: sx,
            m22: sy,
            ..Self::IDENTITY
        }
    }

    /// Rotation by `degrees`. Quarter turns produce exact 0/±1 entries.
    pub fn rotation(degrees: f64) -> Self {
        let (sin, cos) = if degrees.rem_euclid(90.0) == 0.0 {
            match (degrees.rem_euclid(360.0) / 90.0) as u8 {
                0 => (0.0, 1.0),
                1 => (1.0, 0.0),
                2 => (0.0, -1.0),
                _ => (-1.0, 0.0),
            }
        } else {
            degrees.to_radians().sin_cos()
        };
        Self {
            m11: cos,
            m12: -sin,
            m21: sin,
            m22: cos,
            dx: 0.0,
            dy: 0.0,
        }
    }

    /// `self ∘ inner`: the result applies `inner` first, then `self`.
    pub fn compose(&self, inner: &Matrix) -> Matrix {
        Matrix {
            m11: self.m11 * inner.m11 + self.m12 * inner.m21,
            m12: self.m11 * inner.m12 + self.m12 * inner.m22,
            m21: self.m21 * inner.m11 + self.m22 * inner.m21,
            m22: self.m21 * inner.m12 + self.m22 * inner.m22,
            dx: self.m11 * inner.dx + self.m12 * inner.dy + self.dx,
            dy: self.m21 * inner.dx + self.m22 * inner.dy + self.dy,
        }
    }

    /// Compose an ordered transform list, outermost first.
    ///
    /// `[Translate, Rotate]` maps a local point `p` to
    /// `Translate(Rotate(p))`, the same result as pushing each transform
    /// onto a drawing context in list order.
    pub fn from_transforms(transforms: &[Transform]) -> Matrix {
        transforms
            .iter()
            .fold(Matrix::IDENTITY, |acc, t| acc.compose(&t.to_matrix()))
    }

    pub fn transform_point(&self, p: Point) -> Point {
        Point {
            x: self.m11 * p.x + self.m12 * p.y + self.dx,
            y: self.m21 * p.x + self.m22 * p.y + self.dy,
        }
    }

    /// Bounding box of the transformed rectangle.
    ///
    /// Exact for transforms made of translations, scales and quarter turns.
    pub fn transform_rect(&self, rect: &Rect) -> Rect {
        let [a, b, c, d] = rect.corners().map(|p| self.transform_point(p));
        Rect::from_corners(a, c).union(&Rect::from_corners(b, d))
    }
}
