use super::types::{CharDimensions, CharPattern};

pub trait GlyphRenderer {
    fn char_dimensions(&self) -> CharDimensions;

    fn snake_segment(&self, is_head: bool) -> CharPattern;

    fn food(&self) -> CharPattern;
}
