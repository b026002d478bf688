use std::io;

use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};

use crate::game::Cell;
use crate::ui::Render;

const HELP: &str = "←→↓ move  ↑ rotate  r restart  q quit";

pub fn draw_board(f: &mut Frame, cells: &[Vec<Cell>]) {
    let size = f.size();

    // Boards larger than the terminal are clipped by the layout
    let rows = u16::try_from(cells.len()).unwrap_or(u16::MAX);
    let columns = u16::try_from(cells.first().map_or(0, Vec::len)).unwrap_or(u16::MAX);
    let board_height = rows.saturating_add(2); // rows + 2 borders
    let board_width = columns.saturating_mul(2).saturating_add(2); // 2 chars per block + 2 borders

    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(board_height),
            Constraint::Length(1), // Key help
            Constraint::Min(0),
        ])
        .split(size);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(board_width),
            Constraint::Min(0),
        ])
        .split(vertical_chunks[1]);

    f.render_widget(board_widget(cells), horizontal_chunks[1]);

    let help = Paragraph::new(Line::from(Span::styled(
        HELP,
        Style::default().fg(Color::DarkGray),
    )))
    .alignment(Alignment::Center);
    f.render_widget(help, vertical_chunks[2]);
}

pub fn board_widget(cells: &[Vec<Cell>]) -> Paragraph<'static> {
    let mut board_lines = Vec::with_capacity(cells.len());

    for (y, row) in cells.iter().enumerate() {
        let mut line_spans = Vec::with_capacity(row.len());
        for (x, cell) in row.iter().enumerate() {
            let span = match cell {
                Cell::Empty => {
                    if (x + y) % 2 == 0 {
                        Span::styled("░░", Style::default().fg(Color::DarkGray))
                    } else {
                        Span::raw("  ")
                    }
                }
                Cell::Active => Span::styled("██", Style::default().fg(Color::Cyan)),
                Cell::Landed => Span::styled("██", Style::default().fg(Color::Gray)),
            };
            line_spans.push(span);
        }
        board_lines.push(Line::from(line_spans));
    }

    Paragraph::new(board_lines).block(Block::default().borders(Borders::ALL).title("dropris"))
}

/// Draws the board onto a ratatui terminal.
pub struct TerminalRenderer<B: Backend> {
    terminal: Terminal<B>,
}

impl<B: Backend> TerminalRenderer<B> {
    pub fn new(backend: B) -> io::Result<Self> {
        Ok(Self {
            terminal: Terminal::new(backend)?,
        })
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }
}

impl<B: Backend> Render for TerminalRenderer<B> {
    type Error = io::Error;

    fn render(&mut self, cells: &[Vec<Cell>]) -> io::Result<()> {
        self.terminal.draw(|f| draw_board(f, cells))?;
        Ok(())
    }
}
