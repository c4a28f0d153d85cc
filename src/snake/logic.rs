//! Round logic: input processing, the per-tick update, and round termination.

use super::ai::choose_heading;
use super::food::Food;
use super::types::*;
use crate::constants::{GRID_HEIGHT, GRID_WIDTH};
use log::{debug, info, warn};
use rand::Rng;
use std::fmt;

/// Who steers the snake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayMode {
    Human,
    Ai,
}

impl PlayMode {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Human => "Human",
            Self::Ai => "AI",
        }
    }
}

/// Board size and edge behaviour for a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    pub grid: Grid,
    pub policy: BoundaryPolicy,
}

impl Rules {
    /// Walls kill.
    pub const CLASSIC: Rules = Rules {
        grid: Grid::new(GRID_WIDTH, GRID_HEIGHT),
        policy: BoundaryPolicy::Bounded,
    };

    /// Edges wrap around.
    pub const WRAPPED: Rules = Rules {
        grid: Grid::new(GRID_WIDTH, GRID_HEIGHT),
        policy: BoundaryPolicy::Wrapped,
    };
}

/// Why a round stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndCause {
    Collision(Collision),
    /// The snake covers every cell, so there is nowhere left to put food.
    BoardFull,
}

impl fmt::Display for EndCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndCause::Collision(collision) => write!(f, "{collision}"),
            EndCause::BoardFull => write!(f, "board full"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    Running,
    Over { score: u32, cause: EndCause },
    /// Player closed the game mid-round.
    Quit,
}

/// UI-agnostic input actions for a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundInput {
    Turn(Heading),
    Quit,
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Moved,
    Ate { score: u32 },
    Ended(EndCause),
    /// Round is not running; nothing happened.
    Idle,
}

/// One round of play, from spawn to collision or quit.
#[derive(Debug, Clone)]
pub struct Round {
    pub rules: Rules,
    pub mode: PlayMode,
    pub snake: Snake,
    /// `None` only once the board is full.
    pub food: Option<Food>,
    pub score: u32,
    pub state: RoundState,
    /// Ticks processed while running.
    pub tick_count: u64,
}

impl Round {
    /// Start a round: centered single-cell snake, random heading, food placed.
    pub fn new<R: Rng>(rules: Rules, mode: PlayMode, rng: &mut R) -> Self {
        let snake = Snake::new(rules.grid, rng);
        let food = Food::place(rules.grid, &snake.occupied(), rng);
        info!(
            "round started: mode={}, policy={:?}, heading={:?}",
            mode.name(),
            rules.policy,
            snake.heading
        );
        let state = match food {
            Some(_) => RoundState::Running,
            None => RoundState::Over {
                score: 0,
                cause: EndCause::BoardFull,
            },
        };
        Self {
            rules,
            mode,
            snake,
            food,
            score: 0,
            state,
            tick_count: 0,
        }
    }

    /// Build a running round around an existing snake and food cell.
    pub fn with_state(rules: Rules, mode: PlayMode, snake: Snake, food: Cell) -> Self {
        Self {
            rules,
            mode,
            snake,
            food: Some(Food { position: food }),
            score: 0,
            state: RoundState::Running,
            tick_count: 0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state == RoundState::Running
    }

    /// Final score once the round is over, `None` while running or after quit.
    pub fn final_score(&self) -> Option<u32> {
        match self.state {
            RoundState::Over { score, .. } => Some(score),
            _ => None,
        }
    }

    pub fn end_cause(&self) -> Option<EndCause> {
        match self.state {
            RoundState::Over { cause, .. } => Some(cause),
            _ => None,
        }
    }

    /// Apply one input event. Call once per drained event, before `tick`.
    ///
    /// Quit always ends the round. Turns are ignored while the AI drives.
    pub fn handle_input(&mut self, input: RoundInput) {
        if !self.is_running() {
            return;
        }
        match input {
            RoundInput::Quit => {
                info!("round quit at score {}", self.score);
                self.state = RoundState::Quit;
            }
            RoundInput::Turn(heading) => {
                if self.mode == PlayMode::Human {
                    self.snake.turn(heading);
                }
            }
        }
    }

    /// Advance the round by one tick.
    pub fn tick<R: Rng>(&mut self, rng: &mut R) -> TickOutcome {
        if !self.is_running() {
            return TickOutcome::Idle;
        }
        self.tick_count += 1;

        if self.mode == PlayMode::Ai {
            if let Some(food) = self.food {
                let heading = choose_heading(&self.snake, food.position, self.rules.grid);
                debug!("ai heading {:?}", heading);
                self.snake.heading = heading;
            }
        }

        let head = match self.snake.advance(self.rules.grid, self.rules.policy) {
            MoveOutcome::Moved { head, .. } => head,
            MoveOutcome::Collided(collision) => return self.end(EndCause::Collision(collision)),
        };

        if self.food.map(|food| food.position) != Some(head) {
            return TickOutcome::Moved;
        }

        self.snake.grow();
        self.score += 1;
        self.food = Food::place(self.rules.grid, &self.snake.occupied(), rng);
        if self.food.is_none() {
            warn!("no free cell left for food");
            return self.end(EndCause::BoardFull);
        }
        TickOutcome::Ate { score: self.score }
    }

    fn end(&mut self, cause: EndCause) -> TickOutcome {
        info!(
            "round over: {} after {} ticks, score {}",
            cause, self.tick_count, self.score
        );
        self.state = RoundState::Over {
            score: self.score,
            cause,
        };
        TickOutcome::Ended(cause)
    }
}
