use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::constants::{BOARD_COLUMNS, BOARD_ROWS, SPAWN_ROW, TICK_INTERVAL_MS};
use crate::error::{GameError, Result};
use crate::game::Position;

/// Runtime parameters for a game session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub rows: usize,
    pub columns: usize,
    pub tick_interval: Duration,
    pub spawn: Position,
    /// Seed for the piece generator. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Config {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            tick_interval: Duration::from_millis(TICK_INTERVAL_MS),
            spawn: Position::new(SPAWN_ROW, centered_spawn_col(columns)),
            seed: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.columns == 0 {
            return Err(GameError::InvalidDimensions {
                rows: self.rows,
                columns: self.columns,
            });
        }
        if self.spawn.col < 0 || self.spawn.col as usize >= self.columns {
            return Err(GameError::SpawnOutOfBounds {
                col: self.spawn.col,
                columns: self.columns,
            });
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(BOARD_ROWS, BOARD_COLUMNS)
    }
}

// Column 4 on the standard 10-wide board
fn centered_spawn_col(columns: usize) -> i32 {
    (columns.saturating_sub(2) / 2) as i32
}

#[derive(Parser, Debug)]
#[command(
    name = "dropris",
    version,
    about = "A minimal falling-block puzzle game for the terminal"
)]
pub struct Args {
    #[arg(long, default_value_t = BOARD_ROWS, help = "Board height in cells")]
    pub rows: usize,

    #[arg(long, default_value_t = BOARD_COLUMNS, help = "Board width in cells")]
    pub columns: usize,

    #[arg(
        long = "tick-ms",
        default_value_t = TICK_INTERVAL_MS,
        help = "Milliseconds between gravity steps"
    )]
    pub tick_ms: u64,

    #[arg(long = "spawn-col", help = "Column new pieces spawn at [default: centered]")]
    pub spawn_col: Option<i32>,

    #[arg(long, help = "Seed for the piece generator")]
    pub seed: Option<u64>,

    #[arg(long = "log-file", value_name = "FILE", help = "Write log output to this file")]
    pub log_file: Option<PathBuf>,
}

impl Args {
    pub fn into_config(self) -> Result<Config> {
        let mut config = Config::new(self.rows, self.columns);
        config.tick_interval = Duration::from_millis(self.tick_ms);
        if let Some(col) = self.spawn_col {
            config.spawn.col = col;
        }
        config.seed = self.seed;
        config.validate()?;
        Ok(config)
    }
}
