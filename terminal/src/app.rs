use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::Duration;

use common::{
    Direction, GameState, MIN_BOARD_HEIGHT, MIN_BOARD_WIDTH, REVIVE_SCORE_THRESHOLD,
};
use crate::render::{
    board::BoardRenderer,
    standard_renderer::{StandardRenderer, BODY_CHAR, FOOD_CHAR, HEAD_CHAR},
    types::{CharDimensions, RenderConfig},
};

/// Terminal characters per board cell.
const CELL_FOOTPRINT: CharDimensions = CharDimensions::new(2, 1);

/// Rows taken by the block borders around the board plus the status bar.
const CHROME_HEIGHT: u16 = 5;

#[derive(Debug)]
pub enum AppCommand {
    Quit,
}

pub struct App {
    pub game: GameState,
    config: RenderConfig,
    board: BoardRenderer<StandardRenderer>,
    tick_elapsed: Duration,
}

impl App {
    /// Build an app with a board sized to the terminal window.
    pub fn new(term_width: u16, term_height: u16) -> Result<Self> {
        let width = (term_width.saturating_sub(2) / CELL_FOOTPRINT.horizontal as u16)
            .max(MIN_BOARD_WIDTH);
        let height = term_height
            .saturating_sub(CHROME_HEIGHT)
            .max(MIN_BOARD_HEIGHT);
        tracing::debug!("board sized to {}x{}", width, height);
        Ok(Self::with_game(GameState::new(width, height)?))
    }

    pub fn with_game(game: GameState) -> Self {
        Self {
            game,
            config: RenderConfig {
                cell_footprint: CELL_FOOTPRINT,
            },
            board: BoardRenderer::new(StandardRenderer::new(CELL_FOOTPRINT)),
            tick_elapsed: Duration::ZERO,
        }
    }

    /// Advance the game clock. At most one game tick runs per call, once the
    /// current tick interval has elapsed since the previous tick. The timer
    /// is re-armed only after a tick completes, so a stall never causes a
    /// burst of catch-up ticks.
    pub fn update(&mut self, dt: Duration) {
        if self.game.game_over {
            return;
        }
        self.tick_elapsed += dt;
        if self.tick_elapsed >= Duration::from_millis(self.game.tick_interval_ms) {
            self.game.tick();
            self.tick_elapsed = Duration::ZERO;
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<AppCommand> {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Some(AppCommand::Quit);
            }
            KeyCode::Char('q') | KeyCode::Esc => return Some(AppCommand::Quit),
            KeyCode::Up => {
                self.game.steer(Direction::Up);
            }
            KeyCode::Down => {
                self.game.steer(Direction::Down);
            }
            KeyCode::Left => {
                self.game.steer(Direction::Left);
            }
            KeyCode::Right => {
                self.game.steer(Direction::Right);
            }
            KeyCode::Char('+') | KeyCode::Char('=') => self.game.speed_up(),
            KeyCode::Char('-') | KeyCode::Char('_') => self.game.slow_down(),
            KeyCode::Char('r') => self.try_restart(),
            KeyCode::Char('v') => {
                if self.game.revive() {
                    self.tick_elapsed = Duration::ZERO;
                }
            }
            _ => {}
        }
        None
    }

    /// A click anywhere restarts, but only from the game-over screen.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if let MouseEventKind::Down(_) = mouse.kind {
            self.try_restart();
        }
    }

    fn try_restart(&mut self) {
        if self.game.game_over {
            self.game.restart();
            self.tick_elapsed = Duration::ZERO;
        }
    }

    pub fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(frame.area());

        self.render_board(frame, chunks[0]);
        self.render_status(frame, chunks[1]);

        if self.game.game_over {
            self.render_game_over(frame, chunks[0]);
        }
    }

    fn render_board(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().title(" gridsnake ").borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let grid = self.board.render(&self.game, &self.config);
        let lines: Vec<Line> = grid
            .into_lines()
            .into_iter()
            .map(|row| {
                Line::from(
                    row.into_iter()
                        .map(|ch| Span::styled(ch.to_string(), glyph_style(ch)))
                        .collect::<Vec<_>>(),
                )
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let status = Line::from(vec![
            Span::styled(
                format!(" Score: {} ", self.game.score),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("| Tick: {} ms ", self.game.tick_interval_ms)),
            Span::styled(
                "| Arrows: steer | +/-: speed | q: Quit",
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        let bar = Paragraph::new(status).block(Block::default().borders(Borders::ALL));
        frame.render_widget(bar, area);
    }

    fn render_game_over(&self, frame: &mut Frame, area: Rect) {
        let mut lines = vec![
            Line::from(Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(format!("Final score: {}", self.game.score)),
            Line::from("r or click: restart"),
        ];
        if self.game.score > REVIVE_SCORE_THRESHOLD {
            lines.push(Line::from("v: revive"));
        }

        let popup = centered_rect(28, lines.len() as u16 + 2, area);
        frame.render_widget(Clear, popup);
        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL)),
            popup,
        );
    }
}

fn glyph_style(ch: char) -> Style {
    match ch {
        HEAD_CHAR => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
        BODY_CHAR => Style::default().fg(Color::Green),
        FOOD_CHAR => Style::default().fg(Color::Red),
        _ => Style::default(),
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
