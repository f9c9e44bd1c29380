use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use std::time::Duration;

use common::{
    Direction, GameState, Position, Snake, DEFAULT_TICK_INTERVAL_MS, MIN_TICK_INTERVAL_MS,
};
use terminal::app::{App, AppCommand};

fn app() -> App {
    App::with_game(GameState::new_seeded(20, 12, 3).unwrap())
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn click() -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: 1,
        row: 1,
        modifiers: KeyModifiers::NONE,
    }
}

#[test]
fn arrow_keys_steer_perpendicular_only() {
    let mut app = app();
    assert_eq!(app.game.snake.direction, Direction::Right);

    app.handle_key(key(KeyCode::Up));
    assert_eq!(app.game.snake.direction, Direction::Up);

    // reversing along the vertical axis is ignored
    app.handle_key(key(KeyCode::Down));
    assert_eq!(app.game.snake.direction, Direction::Up);

    app.handle_key(key(KeyCode::Left));
    assert_eq!(app.game.snake.direction, Direction::Left);
}

#[test]
fn speed_keys_step_the_tick_interval_with_a_floor() {
    let mut app = app();

    app.handle_key(key(KeyCode::Char('+')));
    assert_eq!(app.game.tick_interval_ms, DEFAULT_TICK_INTERVAL_MS - 10);

    app.handle_key(key(KeyCode::Char('-')));
    assert_eq!(app.game.tick_interval_ms, DEFAULT_TICK_INTERVAL_MS);

    for _ in 0..100 {
        app.handle_key(key(KeyCode::Char('+')));
    }
    assert_eq!(app.game.tick_interval_ms, MIN_TICK_INTERVAL_MS);
}

#[test]
fn restart_fires_only_from_the_game_over_screen() {
    let mut app = app();
    app.game.score = 3;
    app.game.tick_interval_ms = 100;

    // while alive a click does nothing
    app.handle_mouse(click());
    assert_eq!(app.game.score, 3);
    assert_eq!(app.game.tick_interval_ms, 100);

    app.game.game_over = true;
    app.handle_mouse(click());
    assert!(!app.game.game_over);
    assert_eq!(app.game.score, 0);
    assert_eq!(app.game.tick_interval_ms, DEFAULT_TICK_INTERVAL_MS);
}

#[test]
fn the_r_key_restarts_like_a_click() {
    let mut app = app();
    app.game.score = 7;
    app.game.game_over = true;

    app.handle_key(key(KeyCode::Char('r')));
    assert!(!app.game.game_over);
    assert_eq!(app.game.score, 0);
}

#[test]
fn revive_honors_the_score_threshold() {
    let mut app = app();
    app.game.game_over = true;
    app.game.score = 2;

    app.handle_key(key(KeyCode::Char('v')));
    assert!(app.game.game_over);

    app.game.score = 10;
    app.game.snake = Snake::from_cells(
        [
            Position { x: 2, y: 2 },
            Position { x: 2, y: 3 },
            Position { x: 2, y: 4 },
        ],
        Direction::Down,
    );
    app.handle_key(key(KeyCode::Char('v')));
    assert!(!app.game.game_over);
    assert_eq!(app.game.score, 0);
    assert_eq!(app.game.snake.len(), 3);
}

#[test]
fn quit_keys_return_the_quit_command() {
    let mut app = app();
    assert!(matches!(
        app.handle_key(key(KeyCode::Char('q'))),
        Some(AppCommand::Quit)
    ));
    assert!(matches!(
        app.handle_key(key(KeyCode::Esc)),
        Some(AppCommand::Quit)
    ));
    assert!(matches!(
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        Some(AppCommand::Quit)
    ));
    assert!(app.handle_key(key(KeyCode::Char('x'))).is_none());
}

#[test]
fn update_runs_one_tick_per_elapsed_interval() {
    let mut app = app();
    app.game.food = Position { x: 1, y: 1 }; // off the snake's path
    let start = app.game.snake.head();

    // default interval is 200 ms; 100 ms is not enough
    app.update(Duration::from_millis(100));
    assert_eq!(app.game.snake.head(), start);

    app.update(Duration::from_millis(100));
    assert_eq!(app.game.snake.head(), start.step(Direction::Right));

    // a long stall still yields a single tick
    app.update(Duration::from_millis(1000));
    assert_eq!(
        app.game.snake.head(),
        start.step(Direction::Right).step(Direction::Right)
    );
}

#[test]
fn update_is_idle_after_game_over() {
    let mut app = app();
    app.game.game_over = true;
    let head = app.game.snake.head();

    app.update(Duration::from_millis(1000));
    assert_eq!(app.game.snake.head(), head);
}
