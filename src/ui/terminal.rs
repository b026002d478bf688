use std::io::{self, stdout};

use crossterm::{
    cursor::Show,
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};

/// Holds the terminal in raw mode on the alternate screen. Dropping it
/// restores the terminal, so an early `?` in the caller cannot leave the
/// shell in raw mode.
pub struct TerminalGuard {
    restored: bool,
}

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        // From here on a failure drops the guard and undoes raw mode
        let guard = Self { restored: false };
        execute!(stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }

    /// Runs every cleanup step even if an earlier one fails and reports the
    /// first failure. Calling it again is a no-op.
    pub fn restore(&mut self) -> io::Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;

        first_error([
            terminal::disable_raw_mode(),
            execute!(stdout(), LeaveAlternateScreen),
            execute!(stdout(), Show),
        ])
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            log::error!("Failed to restore terminal: {}", err);
        }
    }
}

/// Keeps the first error out of results that have all been evaluated already.
pub fn first_error<I>(results: I) -> io::Result<()>
where
    I: IntoIterator<Item = io::Result<()>>,
{
    let mut first = Ok(());
    for result in results {
        if first.is_ok() {
            first = result;
        }
    }
    first
}
