//! Shared builders and mock renderers for mathbox-layout tests.

use mathbox_types::{Color, MathboxError, Rect, Result, Transform};

use crate::environment::TexEnvironment;
use crate::renderer::ElementRenderer;
use crate::rule::HorizontalRule;
use crate::strut::StrutBox;
use crate::tex_box::TexBox;

/// Environment with a black foreground.
pub fn env() -> TexEnvironment {
    TexEnvironment::new(Some(Color::BLACK), None)
}

/// Unshifted rule of the given thickness and width.
pub fn rule(thickness: f64, width: f64) -> TexBox {
    shifted_rule(thickness, width, 0.0)
}

pub fn shifted_rule(thickness: f64, width: f64, shift: f64) -> TexBox {
    HorizontalRule::new(&env(), thickness, width, shift)
        .unwrap()
        .into()
}

pub fn strut(width: f64, height: f64, depth: f64) -> TexBox {
    StrutBox::new(width, height, depth, 0.0).unwrap().into()
}

/// A renderer whose fills always fail. Tracks transform depth so tests can
/// check that pushes are balanced on the error path.
#[derive(Default)]
pub struct FailingRenderer {
    pub depth: usize,
}

impl ElementRenderer for FailingRenderer {
    fn render_rectangle(&mut self, _rect: Rect, _color: Color) -> Result<()> {
        Err(MathboxError::Render("fill failed".into()))
    }

    fn push_transforms(&mut self, _transforms: &[Transform]) -> Result<()> {
        self.depth += 1;
        Ok(())
    }

    fn pop_transforms(&mut self) -> Result<()> {
        self.depth -= 1;
        Ok(())
    }
}
