use crate::geometry::Position;

// Grid
pub const BODY_SIZE: f32 = 25.0;
pub const HALF_WIDTH_CELLS: i32 = 27;
pub const HALF_HEIGHT_CELLS: i32 = 13;
pub const MAX_HALF_CELLS: i32 = 4096;

// Tail
pub const TAIL_GROWTH: usize = 10;
pub const TAIL_SENTINEL: Position = Position::new(-5000.0, -5000.0);

// Seconds between discrete steps
pub const INITIAL_GAME_SPEED: f64 = 0.25;
pub const GAME_SPEED_STEP: f64 = 0.005;
pub const MIN_GAME_SPEED: f64 = 0.05;

// Powerups start this many cells up and right of the origin
pub const CHERRY_SPAWN_CELLS: i32 = 4;
pub const COIN_SPAWN_CELLS: i32 = 2;

// Sixteen-segment display
pub const GLYPH_PITCH: f32 = 50.0;
pub const SEGMENT_COUNT: usize = 16;
pub const GAME_OVER_TEXT: &str = "Game Over";
pub const GAME_OVER_ANCHOR: Position = Position::new(-225.0, 50.0);
pub const CONTINUE_TEXT: &str = "Press Start to Continue";
pub const CONTINUE_ANCHOR: Position = Position::new(-550.0, -100.0);
