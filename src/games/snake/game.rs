//! Snake movement, collision, and food placement.

use rand::Rng;
use std::collections::VecDeque;

/// Board height in cells.
pub const BOARD_H: i16 = 20;
/// Board width in cells.
pub const BOARD_W: i16 = 40;

/// A board cell, row then column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    /// Row, 0 at the top.
    pub row: i16,
    /// Column, 0 at the left.
    pub col: i16,
}

impl Point {
    /// Creates a point.
    pub fn new(row: i16, col: i16) -> Self {
        Self { row, col }
    }

    fn offset(self, dir: Direction) -> Self {
        let (dr, dc) = dir.delta();
        Self::new(self.row + dr, self.col + dc)
    }

    fn in_bounds(self) -> bool {
        (0..BOARD_H).contains(&self.row) && (0..BOARD_W).contains(&self.col)
    }
}

/// Travel direction of the snake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward row 0.
    Up,
    /// Toward the last row.
    Down,
    /// Toward column 0.
    Left,
    /// Toward the last column.
    Right,
}

impl Direction {
    /// Row/column delta for one step.
    pub fn delta(self) -> (i16, i16) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// True if `other` points exactly backwards.
    pub fn is_opposite(self, other: Direction) -> bool {
        let (a, b) = (self.delta(), other.delta());
        a.0 == -b.0 && a.1 == -b.1
    }
}

/// What happened on one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The snake advanced one cell.
    Moved,
    /// The snake ate the food and grew.
    Ate,
    /// The snake hit a wall or itself.
    Died,
}

/// Snake game state.
#[derive(Debug)]
pub struct SnakeGame {
    /// Body cells, tail first, head last.
    body: VecDeque<Point>,
    direction: Direction,
    food: Point,
    score: u32,
}

impl SnakeGame {
    /// Creates a game with a two-cell snake in the middle, heading right.
    pub fn new(rng: &mut impl Rng) -> Self {
        let mid = Point::new(BOARD_H / 2, BOARD_W / 2);
        let body: VecDeque<Point> = [Point::new(mid.row, mid.col - 1), mid].into_iter().collect();
        let food = spawn_food(&body, rng);
        Self {
            body,
            direction: Direction::Right,
            food,
            score: 0,
        }
    }

    /// Changes direction, ignoring a reversal into the neck.
    pub fn steer(&mut self, dir: Direction) {
        if !dir.is_opposite(self.direction) {
            self.direction = dir;
        }
    }

    /// Advances one tick.
    pub fn advance(&mut self, rng: &mut impl Rng) -> Step {
        let head = *self.body.back().expect("snake body is never empty");
        let next = head.offset(self.direction);

        if !next.in_bounds() || self.body.contains(&next) {
            return Step::Died;
        }

        self.body.push_back(next);
        if next == self.food {
            self.score += 1;
            self.food = spawn_food(&self.body, rng);
            Step::Ate
        } else {
            self.body.pop_front();
            Step::Moved
        }
    }

    /// Body cells, tail first.
    pub fn body(&self) -> &VecDeque<Point> {
        &self.body
    }

    /// The head cell.
    pub fn head(&self) -> Point {
        *self.body.back().expect("snake body is never empty")
    }

    /// Current food cell.
    pub fn food(&self) -> Point {
        self.food
    }

    /// Current score (food eaten).
    pub fn score(&self) -> u32 {
        self.score
    }
}

/// Picks a random cell not occupied by the snake.
fn spawn_food(body: &VecDeque<Point>, rng: &mut impl Rng) -> Point {
    loop {
        let pos = Point::new(rng.gen_range(0..BOARD_H), rng.gen_range(0..BOARD_W));
        if !body.contains(&pos) {
            return pos;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn snake_starts_with_two_cells() {
        let mut rng = StdRng::seed_from_u64(7);
        let game = SnakeGame::new(&mut rng);
        assert_eq!(game.body().len(), 2);
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn food_never_spawns_on_body() {
        let mut rng = StdRng::seed_from_u64(7);
        let game = SnakeGame::new(&mut rng);
        assert!(!game.body().contains(&game.food()));
    }

    #[test]
    fn cannot_reverse_into_neck() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut game = SnakeGame::new(&mut rng);
        game.steer(Direction::Left); // heading right, reversal ignored
        assert_eq!(game.advance(&mut rng), Step::Moved);
        assert_eq!(game.head().col, BOARD_W / 2 + 1);
    }

    #[test]
    fn wall_collision_ends_game() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut game = SnakeGame::new(&mut rng);
        game.steer(Direction::Up);
        let mut last = Step::Moved;
        for _ in 0..BOARD_H {
            last = game.advance(&mut rng);
            if last == Step::Died {
                break;
            }
        }
        assert_eq!(last, Step::Died);
    }

    #[test]
    fn eating_grows_and_scores() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut game = SnakeGame::new(&mut rng);
        // Teleport the food directly in the snake's path.
        let head = game.head();
        game.food = Point::new(head.row, head.col + 1);
        assert_eq!(game.advance(&mut rng), Step::Ate);
        assert_eq!(game.score(), 1);
        assert_eq!(game.body().len(), 3);
    }
}
