//! Snake: a real-time arcade game where the player (or a greedy autopilot)
//! guides a snake to eat food and grow.

pub mod ai;
pub mod food;
pub mod geometry;
pub mod logic;
pub mod types;

pub use ai::choose_heading;
pub use food::Food;
pub use geometry::{Arena, PixelRect};
pub use logic::{EndCause, PlayMode, Round, RoundInput, RoundState, Rules, TickOutcome};
pub use types::{BoundaryPolicy, Cell, Collision, Grid, Heading, MoveOutcome, Snake};
