use color_eyre::Result;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use mineveld_core::{
    BoardGenerator, Coord, DEFAULT_MINE_PERCENT, DEFAULT_SIZE, Game, GameConfig,
    RandomBoardGenerator,
};

use crate::app::App;

mod app;
mod theme;

fn main() -> Result<()> {
    color_eyre::install()?;

    // Single optional argument: the grid side length. Anything missing or
    // unparsable falls back to the default instead of erroring.
    let size = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<Coord>().ok())
        .filter(|&size| size >= 1)
        .unwrap_or(DEFAULT_SIZE);

    let config = GameConfig::new(size, DEFAULT_MINE_PERCENT)?;
    let board = RandomBoardGenerator::from_entropy().generate(config);

    let terminal = ratatui::init();
    execute!(std::io::stdout(), EnableMouseCapture)?;
    let result = App::new(Game::new(board)).run(terminal);
    let _ = execute!(std::io::stdout(), DisableMouseCapture);
    ratatui::restore();
    result
}
