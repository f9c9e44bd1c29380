use common::{Direction, GameState, Position, Snake};
use terminal::render::{
    board::BoardRenderer,
    standard_renderer::StandardRenderer,
    types::{CharDimensions, RenderConfig},
};

fn main() {
    // A mid-game snapshot: a snake with a turn in it, food ahead
    let mut game = GameState::new_seeded(20, 10, 42).unwrap();
    game.snake = Snake::from_cells(
        [
            Position { x: 5, y: 5 },
            Position { x: 5, y: 6 },
            Position { x: 5, y: 7 },
            Position { x: 4, y: 7 },
            Position { x: 3, y: 7 },
        ],
        Direction::Up,
    );
    game.food = Position { x: 10, y: 5 };
    game.score = 4;

    println!("=== 1x1 Rendering (Classic) ===");
    render_with_dimensions(&game, CharDimensions::new(1, 1));

    println!("\n=== 2x1 Rendering (Wide) ===");
    render_with_dimensions(&game, CharDimensions::new(2, 1));
}

fn render_with_dimensions(game: &GameState, char_dims: CharDimensions) {
    let renderer = StandardRenderer::new(char_dims);
    let board = BoardRenderer::new(renderer);
    let config = RenderConfig {
        cell_footprint: char_dims,
    };

    let char_grid = board.render(game, &config);
    let physical_width = char_grid.physical_width();
    let lines = char_grid.into_lines();

    println!(
        "Physical size: {}x{} characters",
        physical_width,
        lines.len()
    );

    // Draw top border
    print!("┌");
    for _ in 0..physical_width {
        print!("─");
    }
    println!("┐");

    // Draw board with side borders
    for line in lines {
        print!("│");
        for ch in line {
            print!("{}", ch);
        }
        println!("│");
    }

    // Draw bottom border
    print!("└");
    for _ in 0..physical_width {
        print!("─");
    }
    println!("┘");

    println!("Score: {}", game.score);
}
