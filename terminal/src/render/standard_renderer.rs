use super::traits::GlyphRenderer;
use super::types::{CharDimensions, CharPattern};

/// Glyph used for the snake head
pub const HEAD_CHAR: char = '█';

/// Glyph used for snake body segments
pub const BODY_CHAR: char = '▓';

/// Glyph used for food
pub const FOOD_CHAR: char = '●';

/// Block-glyph renderer: a bright head, a shaded body, round food. The
/// front end styles each glyph class with its color.
pub struct StandardRenderer {
    char_dims: CharDimensions,
}

impl StandardRenderer {
    pub fn new(char_dims: CharDimensions) -> Self {
        Self { char_dims }
    }
}

impl GlyphRenderer for StandardRenderer {
    fn char_dimensions(&self) -> CharDimensions {
        self.char_dims
    }

    fn snake_segment(&self, is_head: bool) -> CharPattern {
        let ch = if is_head { HEAD_CHAR } else { BODY_CHAR };
        CharPattern::single(ch, self.char_dims)
    }

    fn food(&self) -> CharPattern {
        CharPattern::single(FOOD_CHAR, self.char_dims)
    }
}
