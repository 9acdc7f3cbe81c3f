use color_eyre::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use mineveld_core::{Coord, Coord2, Game, RevealOutcome};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Flex, Layout},
    style::Stylize,
    text::Text,
    widgets::{Block, Paragraph},
};

use crate::theme;

/// Terminal columns each cell occupies on screen.
const CELL_WIDTH: u16 = 3;

/// Terminal rows each cell occupies on screen.
const CELL_HEIGHT: u16 = 1;

/// Reported while the pointer is outside the grid; the game treats it as a
/// no-op.
const OFF_GRID: Coord2 = (-1, -1);

pub struct App {
    game: Game,
    hover: Coord2,
    running: bool,
}

impl App {
    pub fn new(game: Game) -> Self {
        Self {
            game,
            hover: OFF_GRID,
            running: false,
        }
    }

    pub fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        self.running = true;
        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        Ok(())
    }

    fn render(&self, frame: &mut Frame) {
        frame.render_widget(Block::new().bg(theme::BACKDROP), frame.area());

        let size = self.game.size();
        // Fixed-size cells; the hit test in `cell_under` relies on this.
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .flex(Flex::Start)
            .constraints((0..size).map(|_| Constraint::Length(CELL_HEIGHT)))
            .split(frame.area());

        for (row, row_area) in rows.iter().enumerate() {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .flex(Flex::Start)
                .constraints((0..size).map(|_| Constraint::Length(CELL_WIDTH)))
                .split(*row_area);

            for (col, cell_area) in cols.iter().enumerate() {
                let coords = (row as Coord, col as Coord);
                let paint = theme::paint(&self.game, coords, self.hover);
                let label = match paint.label {
                    Some(count) => Text::raw(count.to_string()),
                    None => Text::raw(""),
                };
                frame.render_widget(
                    Paragraph::new(label)
                        .centered()
                        .fg(theme::LABEL)
                        .bg(paint.fill),
                    *cell_area,
                );
            }
        }
    }

    fn handle_crossterm_events(&mut self) -> Result<()> {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
            Event::Mouse(mouse) => self.on_mouse_event(mouse),
            Event::Resize(_, _) => {}
            _ => {}
        }
        Ok(())
    }

    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),

            _ => {}
        }
    }

    fn on_mouse_event(&mut self, mouse: MouseEvent) {
        self.hover = self.cell_under(mouse.column, mouse.row);
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            self.click(self.hover);
        }
    }

    fn click(&mut self, coords: Coord2) {
        let outcome = match self.game.reveal(coords) {
            Ok(outcome) => outcome,
            // The loop stops on the first mine hit, so a move after the end
            // can only come from queued input; drop it.
            Err(_) => return,
        };
        if outcome.has_update() {
            log::debug!("clicked {coords:?}: {outcome:?}");
        }
        if outcome == RevealOutcome::HitMine {
            self.quit();
        }
    }

    /// Maps a terminal position to the cell under it, `OFF_GRID` when the
    /// pointer is outside the board.
    fn cell_under(&self, column: u16, row: u16) -> Coord2 {
        let cell = (
            Coord::from(row / CELL_HEIGHT),
            Coord::from(column / CELL_WIDTH),
        );
        if self.game.board().in_bounds(cell) {
            cell
        } else {
            OFF_GRID
        }
    }

    fn quit(&mut self) {
        self.running = false;
    }
}
