//! mathbox-layout: the box model of the formula layout engine and the two
//! rendering targets it draws into.
//!
//! A layout pass builds a tree of [`TexBox`] nodes from already-measured
//! children. A render pass then walks the tree top-down through one of two
//! entry points:
//!
//! - [`TexBox::render_geometry`] appends scaled rectangles and transform
//!   groups into a retained [`GeometryGroup`].
//! - [`TexBox::render_to`] issues immediate drawing calls against an
//!   [`ElementRenderer`], such as the recording [`DrawList`].
//!
//! Both paths share the placement arithmetic of each box, so for the same
//! tree and origin they produce congruent rectangles (see [`compare`]).

pub mod compare;
pub mod environment;
pub mod geometry_group;
pub mod hbox;
pub mod over_under;
pub mod renderer;
pub mod rule;
pub mod strut;
pub mod tex_box;

#[cfg(test)]
pub(crate) mod test_utils;

pub use environment::TexEnvironment;
pub use geometry_group::{Geometry, GeometryGroup};
pub use hbox::HorizontalBox;
pub use over_under::OverUnderBox;
pub use renderer::{DrawCommand, DrawList, ElementRenderer};
pub use rule::HorizontalRule;
pub use strut::StrutBox;
pub use tex_box::{Metrics, TexBox};
