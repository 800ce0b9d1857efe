//! Font identifiers.

use serde::{Deserialize, Serialize};

/// Identifier of a font in the surrounding engine's font table.
///
/// [`FontId::NONE`] marks boxes that carry no glyph content. It is never a
/// valid index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FontId(pub i32);

impl FontId {
    /// The "no font" sentinel.
    pub const NONE: Self = Self(-1);

    /// Returns true if this is the [`FontId::NONE`] sentinel.
    pub const fn is_none(self) -> bool {
        self.0 == Self::NONE.0
    }

    /// The font table index, or `None` for the sentinel.
    pub fn index(self) -> Option<usize> {
        if self.is_none() {
            None
        } else {
            usize::try_from(self.0).ok()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_has_no_index() {
        assert!(FontId::NONE.is_none());
        assert_eq!(FontId::NONE.index(), None);
    }

    #[test]
    fn real_font_has_index() {
        let id = FontId(3);
        assert!(!id.is_none());
        assert_eq!(id.index(), Some(3));
    }
}
