//! Greedy autopilot.
//!
//! Looks one step ahead: among the headings whose next cell is on the board
//! and not on the body, pick the one that lands closest to the food by
//! Manhattan distance. There is no lookahead, so the snake can and will trap
//! itself.

use super::types::{Cell, Grid, Heading, Snake};

/// Heading the autopilot takes this tick.
///
/// Candidates are tried in [`Heading::ALL`] order and the first minimum wins.
/// With no legal candidate the current heading is kept. Always uses the
/// bounded rule, even on a wrapping board.
pub fn choose_heading(snake: &Snake, food: Cell, grid: Grid) -> Heading {
    let head = snake.head();
    Heading::ALL
        .into_iter()
        .filter_map(|heading| {
            let (dx, dy) = heading.delta();
            let next = Cell::new(head.x + dx, head.y + dy);
            (grid.contains(next) && !snake.contains(next)).then_some((heading, next))
        })
        .min_by_key(|(_, next)| next.distance(food))
        .map(|(heading, _)| heading)
        .unwrap_or(snake.heading)
}
