// Arena geometry (pixels)
pub const ARENA_WIDTH_PX: u32 = 600;
pub const ARENA_HEIGHT_PX: u32 = 600;
pub const CELL_SIZE_PX: u32 = 20;

// Board size in cells
pub const GRID_WIDTH: i16 = (ARENA_WIDTH_PX / CELL_SIZE_PX) as i16;
pub const GRID_HEIGHT: i16 = (ARENA_HEIGHT_PX / CELL_SIZE_PX) as i16;

// Game timing constants
pub const TICKS_PER_SECOND: u32 = 10;
pub const MAX_TICKS_PER_SECOND: u32 = 60;

// Wrapped variant shows its game-over message this long, then exits
pub const GAME_OVER_MESSAGE_SECONDS: u32 = 3;

// Autoplay simulator defaults
pub const AUTOPLAY_MAX_TICKS: u64 = 100_000;
