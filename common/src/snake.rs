use std::collections::{HashSet, VecDeque};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i16,
    pub y: i16,
}

impl Position {
    pub fn new(x: i16, y: i16) -> Self {
        Position { x, y }
    }

    /// The neighboring cell one step in the given direction.
    pub fn step(&self, direction: Direction) -> Position {
        let (dx, dy) = direction.delta();
        Position::new(self.x + dx, self.y + dy)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Direction {
    pub fn delta(&self) -> (i16, i16) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn axis(&self) -> Axis {
        match self {
            Direction::Left | Direction::Right => Axis::Horizontal,
            Direction::Up | Direction::Down => Axis::Vertical,
        }
    }
}

/// Snake body plus a cell set kept in lockstep for O(1) collision lookups.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>, // The head is the first element
    occupied: HashSet<Position>,
    pub direction: Direction,
}

impl Snake {
    /// Lay out a snake of `length` cells extending leftward from `head`,
    /// facing right. This is the spawn and revive layout.
    pub fn horizontal(head: Position, length: usize) -> Self {
        let cells = (0..length as i16).map(|i| Position::new(head.x - i, head.y));
        Self::from_cells(cells, Direction::Right)
    }

    /// Build a snake from explicit cells, head first. The cells must be
    /// distinct and non-empty.
    pub fn from_cells(cells: impl IntoIterator<Item = Position>, direction: Direction) -> Self {
        let body: VecDeque<Position> = cells.into_iter().collect();
        let occupied: HashSet<Position> = body.iter().copied().collect();
        assert!(!body.is_empty(), "snake body must not be empty");
        assert_eq!(body.len(), occupied.len(), "snake cells must be distinct");
        Snake {
            body,
            occupied,
            direction,
        }
    }

    pub fn head(&self) -> Position {
        *self.body.front().expect("Snake body should not be empty")
    }

    /// Where the head lands on the next tick.
    pub fn next_head(&self) -> Position {
        self.head().step(self.direction)
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn contains(&self, cell: Position) -> bool {
        self.occupied.contains(&cell)
    }

    /// Body cells from head to tail.
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.body.iter().copied()
    }

    pub fn push_head(&mut self, cell: Position) {
        self.body.push_front(cell);
        self.occupied.insert(cell);
    }

    pub fn pop_tail(&mut self) -> Position {
        let tail = self.body.pop_back().expect("Snake body should not be empty");
        self.occupied.remove(&tail);
        tail
    }

    /// Change direction, refusing turns along the current axis of motion so
    /// the snake can never reverse into its own neck.
    pub fn steer(&mut self, direction: Direction) -> bool {
        if direction.axis() == self.direction.axis() {
            return false;
        }
        self.direction = direction;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_layout_extends_leftward() {
        let snake = Snake::horizontal(Position::new(6, 4), 3);
        let cells: Vec<Position> = snake.cells().collect();
        assert_eq!(
            cells,
            vec![
                Position::new(6, 4),
                Position::new(5, 4),
                Position::new(4, 4)
            ]
        );
        assert_eq!(snake.direction, Direction::Right);
    }

    #[test]
    fn push_and_pop_keep_the_cell_set_in_sync() {
        let mut snake = Snake::horizontal(Position::new(6, 4), 2);
        snake.push_head(Position::new(6, 3));
        let tail = snake.pop_tail();

        assert_eq!(tail, Position::new(5, 4));
        assert!(snake.contains(Position::new(6, 3)));
        assert!(!snake.contains(tail));
        assert_eq!(snake.len(), 2);
        for cell in snake.cells() {
            assert!(snake.contains(cell));
        }
    }

    #[test]
    fn steer_rejects_turns_on_the_same_axis() {
        let mut snake = Snake::horizontal(Position::new(6, 4), 1);
        assert!(!snake.steer(Direction::Left));
        assert_eq!(snake.direction, Direction::Right);
        assert!(snake.steer(Direction::Up));
        assert!(!snake.steer(Direction::Down));
        assert_eq!(snake.direction, Direction::Up);
    }
}
