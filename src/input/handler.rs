use crossterm::event::{KeyCode, KeyEventKind};

use crate::game::Key;

/// What a terminal key event asks the front end to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Quit,
    Restart,
    Game(Key),
}

/// Maps a crossterm key event to a command. Releases are dropped so that a
/// press only moves the piece once.
pub fn translate(key_code: KeyCode, kind: KeyEventKind) -> Option<Command> {
    match kind {
        KeyEventKind::Press | KeyEventKind::Repeat => {}
        KeyEventKind::Release => return None,
    }

    let command = match key_code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Command::Quit,
        KeyCode::Char('r') | KeyCode::Char('R') => Command::Restart,
        KeyCode::Left => Command::Game(Key::Left),
        KeyCode::Right => Command::Game(Key::Right),
        KeyCode::Down => Command::Game(Key::Down),
        KeyCode::Up => Command::Game(Key::Up),
        _ => Command::Game(Key::Other),
    };
    Some(command)
}
