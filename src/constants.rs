pub const BOARD_COLUMNS: usize = 10;
pub const BOARD_ROWS: usize = 20;

// Gravity interval (in milliseconds)
pub const TICK_INTERVAL_MS: u64 = 500;

// Newly spawned pieces start on the top row
pub const SPAWN_ROW: i32 = 0;
