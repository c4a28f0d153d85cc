//! Snake data structures: grid cells, headings, boundary rules and the snake body.

use rand::Rng;
use std::collections::{HashSet, VecDeque};
use std::fmt;

/// A position on the grid. `x` is the column, `y` the row, both 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i16,
    pub y: i16,
}

impl Cell {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to another cell.
    pub fn distance(&self, other: Cell) -> u32 {
        (self.x as i32 - other.x as i32).unsigned_abs()
            + (self.y as i32 - other.y as i32).unsigned_abs()
    }
}

/// Board dimensions in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub width: i16,
    pub height: i16,
}

impl Grid {
    pub const fn new(width: i16, height: i16) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.width && cell.y >= 0 && cell.y < self.height
    }

    /// Fold arbitrary coordinates back onto the board (euclidean modulo).
    pub fn wrap(&self, x: i16, y: i16) -> Cell {
        Cell {
            x: x.rem_euclid(self.width),
            y: y.rem_euclid(self.height),
        }
    }

    pub fn center(&self) -> Cell {
        Cell {
            x: self.width / 2,
            y: self.height / 2,
        }
    }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Every cell, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let width = self.width;
        (0..self.height).flat_map(move |y| (0..width).map(move |x| Cell { x, y }))
    }
}

/// Cardinal direction the head moves on the next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    /// Fixed enumeration order. The AI breaks distance ties by this order.
    pub const ALL: [Heading; 4] = [Heading::Up, Heading::Down, Heading::Left, Heading::Right];

    /// Returns the opposite heading.
    pub fn opposite(&self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the (dx, dy) unit vector for this heading.
    pub fn delta(&self) -> (i16, i16) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

/// What happens when the head leaves the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryPolicy {
    /// Leaving the board is a wall collision.
    Bounded,
    /// Leaving the board re-enters from the opposite edge.
    Wrapped,
}

/// Why a move failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    Wall,
    SelfHit,
}

impl fmt::Display for Collision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Collision::Wall => write!(f, "wall collision"),
            Collision::SelfHit => write!(f, "self collision"),
        }
    }
}

/// Result of a single [`Snake::advance`] call.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved { head: Cell, grew: bool },
    Collided(Collision),
}

impl MoveOutcome {
    pub fn collision(&self) -> Option<Collision> {
        match self {
            MoveOutcome::Moved { .. } => None,
            MoveOutcome::Collided(collision) => Some(*collision),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Snake {
    /// Body segments. Head is at the front (index 0). Never empty.
    pub body: VecDeque<Cell>,
    pub heading: Heading,
    /// Set by `grow`, consumed by the next successful move.
    pub pending_growth: bool,
}

impl Snake {
    /// A single-cell snake in the middle of the board facing a random way.
    pub fn new<R: Rng>(grid: Grid, rng: &mut R) -> Self {
        Self::with_body(grid.center(), [], Heading::random(rng))
    }

    /// Build a snake from an explicit head and the segments behind it.
    pub fn with_body(head: Cell, rest: impl IntoIterator<Item = Cell>, heading: Heading) -> Self {
        let mut body = VecDeque::new();
        body.push_back(head);
        body.extend(rest);
        Self {
            body,
            heading,
            pending_growth: false,
        }
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    pub fn occupied(&self) -> HashSet<Cell> {
        self.body.iter().copied().collect()
    }

    /// Where the head would land on the next move, or `None` if that is off a
    /// bounded board.
    pub fn projected_head(&self, grid: Grid, policy: BoundaryPolicy) -> Option<Cell> {
        let (dx, dy) = self.heading.delta();
        let head = self.head();
        let (x, y) = (head.x + dx, head.y + dy);
        match policy {
            BoundaryPolicy::Bounded => {
                let cell = Cell { x, y };
                grid.contains(cell).then_some(cell)
            }
            BoundaryPolicy::Wrapped => Some(grid.wrap(x, y)),
        }
    }

    /// Move one cell along the current heading.
    ///
    /// The whole body, tail included, counts for self collision. A collided
    /// move leaves the snake untouched.
    pub fn advance(&mut self, grid: Grid, policy: BoundaryPolicy) -> MoveOutcome {
        let Some(new_head) = self.projected_head(grid, policy) else {
            return MoveOutcome::Collided(Collision::Wall);
        };
        if self.contains(new_head) {
            return MoveOutcome::Collided(Collision::SelfHit);
        }

        self.body.push_front(new_head);
        let grew = self.pending_growth;
        if grew {
            self.pending_growth = false;
        } else {
            self.body.pop_back();
        }
        MoveOutcome::Moved {
            head: new_head,
            grew,
        }
    }

    /// Keep the tail on the next move. Repeated calls before a move still
    /// grow by one segment.
    pub fn grow(&mut self) {
        self.pending_growth = true;
    }

    /// Change heading unless `heading` is the reverse of the current one.
    ///
    /// Checked against the current heading only, so two turns before a move
    /// can still fold the snake back on itself.
    pub fn turn(&mut self, heading: Heading) -> bool {
        if heading == self.heading.opposite() {
            return false;
        }
        self.heading = heading;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const GRID: Grid = Grid::new(30, 30);

    fn create_test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(12345)
    }

    #[test]
    fn test_new_snake_single_cell_at_center() {
        let mut rng = create_test_rng();
        let snake = Snake::new(GRID, &mut rng);
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Cell::new(15, 15));
        assert!(!snake.pending_growth);
    }

    #[test]
    fn test_random_heading_covers_all() {
        let mut rng = create_test_rng();
        let mut seen = HashSet::new();
        for _ in 0..200 {
            seen.insert(Heading::random(&mut rng));
        }
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn test_heading_delta_and_opposite() {
        assert_eq!(Heading::Up.delta(), (0, -1));
        assert_eq!(Heading::Down.delta(), (0, 1));
        assert_eq!(Heading::Left.delta(), (-1, 0));
        assert_eq!(Heading::Right.delta(), (1, 0));
        for heading in Heading::ALL {
            let (dx, dy) = heading.delta();
            let (ox, oy) = heading.opposite().delta();
            assert_eq!((dx + ox, dy + oy), (0, 0));
        }
    }

    #[test]
    fn test_move_without_growth_keeps_length() {
        let mut snake = Snake::with_body(
            Cell::new(5, 5),
            [Cell::new(4, 5), Cell::new(3, 5)],
            Heading::Right,
        );
        let outcome = snake.advance(GRID, BoundaryPolicy::Bounded);
        assert_eq!(
            outcome,
            MoveOutcome::Moved {
                head: Cell::new(6, 5),
                grew: false
            }
        );
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.body.back(), Some(&Cell::new(4, 5)));
    }

    #[test]
    fn test_grow_then_move_adds_one_segment() {
        let mut snake = Snake::with_body(Cell::new(5, 5), [], Heading::Down);
        snake.grow();
        let outcome = snake.advance(GRID, BoundaryPolicy::Bounded);
        assert_eq!(
            outcome,
            MoveOutcome::Moved {
                head: Cell::new(5, 6),
                grew: true
            }
        );
        assert_eq!(snake.len(), 2);
        assert!(!snake.pending_growth);

        // Next move is a plain move again
        let _ = snake.advance(GRID, BoundaryPolicy::Bounded);
        assert_eq!(snake.len(), 2);
    }

    #[test]
    fn test_double_grow_only_grows_once() {
        let mut snake = Snake::with_body(Cell::new(5, 5), [], Heading::Down);
        snake.grow();
        snake.grow();
        let _ = snake.advance(GRID, BoundaryPolicy::Bounded);
        let _ = snake.advance(GRID, BoundaryPolicy::Bounded);
        assert_eq!(snake.len(), 2);
    }

    #[test]
    fn test_wall_collision_on_every_edge() {
        let cases = [
            (Cell::new(10, 0), Heading::Up),
            (Cell::new(10, 29), Heading::Down),
            (Cell::new(0, 10), Heading::Left),
            (Cell::new(29, 10), Heading::Right),
        ];
        for (head, heading) in cases {
            let mut snake = Snake::with_body(head, [], heading);
            let outcome = snake.advance(GRID, BoundaryPolicy::Bounded);
            assert_eq!(outcome, MoveOutcome::Collided(Collision::Wall), "{heading:?}");
            assert_eq!(snake.head(), head, "failed move must not change the body");
        }
    }

    #[test]
    fn test_wrapped_edges_reenter_opposite_side() {
        let cases = [
            (Cell::new(10, 0), Heading::Up, Cell::new(10, 29)),
            (Cell::new(10, 29), Heading::Down, Cell::new(10, 0)),
            (Cell::new(0, 10), Heading::Left, Cell::new(29, 10)),
            (Cell::new(29, 10), Heading::Right, Cell::new(0, 10)),
        ];
        for (head, heading, expected) in cases {
            let mut snake = Snake::with_body(head, [], heading);
            let outcome = snake.advance(GRID, BoundaryPolicy::Wrapped);
            assert_eq!(
                outcome,
                MoveOutcome::Moved {
                    head: expected,
                    grew: false
                }
            );
        }
    }

    #[test]
    fn test_self_collision_counts_tail() {
        // Square loop: moving down from (5,5) lands on the tail at (5,6).
        let mut snake = Snake::with_body(
            Cell::new(5, 5),
            [Cell::new(6, 5), Cell::new(6, 6), Cell::new(5, 6)],
            Heading::Down,
        );
        let outcome = snake.advance(GRID, BoundaryPolicy::Bounded);
        assert_eq!(outcome, MoveOutcome::Collided(Collision::SelfHit));
        assert_eq!(snake.len(), 4);
    }

    #[test]
    fn test_self_collision_under_wrapping() {
        // Head on the left edge, body wrapping to the right edge.
        let mut snake = Snake::with_body(
            Cell::new(0, 3),
            [Cell::new(0, 4), Cell::new(29, 4), Cell::new(29, 3)],
            Heading::Left,
        );
        let outcome = snake.advance(GRID, BoundaryPolicy::Wrapped);
        assert_eq!(outcome.collision(), Some(Collision::SelfHit));
    }

    #[test]
    fn test_turn_rejects_reverse_of_current_heading() {
        let mut snake = Snake::with_body(Cell::new(5, 5), [], Heading::Right);
        assert!(!snake.turn(Heading::Left));
        assert_eq!(snake.heading, Heading::Right);
        assert!(snake.turn(Heading::Up));
        assert_eq!(snake.heading, Heading::Up);
    }

    #[test]
    fn test_two_quick_turns_allow_reversal() {
        let mut snake = Snake::with_body(Cell::new(5, 5), [Cell::new(4, 5)], Heading::Right);
        assert!(snake.turn(Heading::Up));
        assert!(snake.turn(Heading::Left));
        assert_eq!(snake.heading, Heading::Left);
        // Moving left now bites the neck.
        let outcome = snake.advance(GRID, BoundaryPolicy::Bounded);
        assert_eq!(outcome.collision(), Some(Collision::SelfHit));
    }

    #[test]
    fn test_grid_cells_and_wrap() {
        let grid = Grid::new(3, 2);
        let cells: Vec<Cell> = grid.cells().collect();
        assert_eq!(cells.len(), grid.cell_count());
        assert_eq!(cells[0], Cell::new(0, 0));
        assert_eq!(cells[5], Cell::new(2, 1));
        assert_eq!(grid.wrap(-1, 2), Cell::new(2, 0));
    }

    #[test]
    fn test_manhattan_distance() {
        assert_eq!(Cell::new(5, 4).distance(Cell::new(5, 2)), 2);
        assert_eq!(Cell::new(0, 0).distance(Cell::new(3, 4)), 7);
    }
}
