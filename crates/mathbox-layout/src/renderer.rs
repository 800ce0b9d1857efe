//! Immediate rendering target.
//!
//! [`ElementRenderer`] is the contract boxes draw through when they render
//! immediately. Backends implement the three required primitives; child
//! boxes are rendered through the provided `render_element` and
//! `render_transformed`, which recurse back into [`TexBox::render_to`].
//!
//! [`DrawList`] is the in-tree implementation. It records every call as a
//! [`DrawCommand`] so a pass can be replayed, inspected, or flattened into
//! world-space rectangles.

use mathbox_types::{Color, MathboxError, Matrix, Rect, Result, Transform};
use serde::Serialize;

use crate::tex_box::TexBox;

/// Immediate drawing operations a box may issue.
pub trait ElementRenderer {
    // -----------------------------------------------------------------------
    // Required
    // -----------------------------------------------------------------------

    /// Fill `rect` (unscaled layout units, current transform) with `color`.
    fn render_rectangle(&mut self, rect: Rect, color: Color) -> Result<()>;

    /// Push an ordered transform list, outermost first. Everything drawn
    /// until the matching [`pop_transforms`](Self::pop_transforms) is mapped
    /// through it.
    fn push_transforms(&mut self, transforms: &[Transform]) -> Result<()>;

    /// Undo the most recent [`push_transforms`](Self::push_transforms).
    fn pop_transforms(&mut self) -> Result<()>;

    // -----------------------------------------------------------------------
    // Provided
    // -----------------------------------------------------------------------

    /// Render a child box at `(x, y)`.
    fn render_element(&mut self, element: &TexBox, x: f64, y: f64) -> Result<()> {
        element.render_to(self, x, y)
    }

    /// Apply `transforms`, then render a child box at local `(x, y)`.
    ///
    /// The transforms are popped even if the child fails to render.
    fn render_transformed(
        &mut self,
        element: &TexBox,
        transforms: &[Transform],
        x: f64,
        y: f64,
    ) -> Result<()> {
        self.push_transforms(transforms)?;
        let rendered = self.render_element(element, x, y);
        let popped = self.pop_transforms();
        rendered.and(popped)
    }
}

/// A recorded immediate-mode call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    FillRect { rect: Rect, color: Color },
    PushTransforms { transforms: Vec<Transform> },
    PopTransforms,
}

/// Records draw calls for later replay or inspection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
    depth: usize,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }

    /// Current transform nesting depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Count of `FillRect` commands.
    pub fn fill_rect_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillRect { .. }))
            .count()
    }

    /// Resolve transforms and return every filled rectangle in world
    /// space, in drawing order.
    pub fn flatten(&self) -> Vec<(Rect, Color)> {
        let mut stack = vec![Matrix::IDENTITY];
        let mut out = Vec::with_capacity(self.fill_rect_count());
        for cmd in &self.commands {
            let top = stack.last().copied().unwrap_or(Matrix::IDENTITY);
            match cmd {
                DrawCommand::FillRect { rect, color } => {
                    out.push((top.transform_rect(rect), *color));
                },
                DrawCommand::PushTransforms { transforms } => {
                    stack.push(top.compose(&Matrix::from_transforms(transforms)));
                },
                DrawCommand::PopTransforms => {
                    if stack.len() > 1 {
                        stack.pop();
                    }
                },
            }
        }
        out
    }

    /// Replay the recorded calls into another renderer.
    pub fn replay(&self, target: &mut dyn ElementRenderer) -> Result<()> {
        for cmd in &self.commands {
            match cmd {
                DrawCommand::FillRect { rect, color } => target.render_rectangle(*rect, *color)?,
                DrawCommand::PushTransforms { transforms } => target.push_transforms(transforms)?,
                DrawCommand::PopTransforms => target.pop_transforms()?,
            }
        }
        Ok(())
    }
}

impl ElementRenderer for DrawList {
    fn render_rectangle(&mut self, rect: Rect, color: Color) -> Result<()> {
        log::trace!("fill rect {rect:?}");
        self.commands.push(DrawCommand::FillRect { rect, color });
        Ok(())
    }

    fn push_transforms(&mut self, transforms: &[Transform]) -> Result<()> {
        self.depth += 1;
        self.commands.push(DrawCommand::PushTransforms {
            transforms: transforms.to_vec(),
        });
        Ok(())
    }

    fn pop_transforms(&mut self) -> Result<()> {
        if self.depth == 0 {
            return Err(MathboxError::Render("transform stack underflow".into()));
        }
        self.depth -= 1;
        self.commands.push(DrawCommand::PopTransforms);
        Ok(())
    }
}
