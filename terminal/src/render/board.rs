use super::traits::GlyphRenderer;
use super::types::{CharGrid, RenderConfig};
use common::GameState;

/// Stamps the game state into a [`CharGrid`]: food first, then the snake
/// from head to tail, so the snake covers a food cell it is sitting on.
pub struct BoardRenderer<R: GlyphRenderer> {
    renderer: R,
}

impl<R: GlyphRenderer> BoardRenderer<R> {
    pub fn new(renderer: R) -> Self {
        Self { renderer }
    }

    pub fn render(&self, game: &GameState, config: &RenderConfig) -> CharGrid {
        let mut grid = CharGrid::new(
            game.width as usize,
            game.height as usize,
            config.cell_footprint,
        );

        if game.in_bounds(game.food) {
            let pattern = self.renderer.food();
            grid.stamp(game.food.x as usize, game.food.y as usize, &pattern);
        }

        for (i, cell) in game.snake.cells().enumerate() {
            if game.in_bounds(cell) {
                let pattern = self.renderer.snake_segment(i == 0);
                grid.stamp(cell.x as usize, cell.y as usize, &pattern);
            }
        }

        grid
    }
}
