use mineveld_core::{CellView, Coord2, Game};
use ratatui::style::Color;

/// Backdrop behind the grid.
pub const BACKDROP: Color = Color::DarkGray;

/// Count labels on revealed cells.
pub const LABEL: Color = Color::Black;

const HIDDEN: Color = Color::Gray;
const MINE: Color = Color::Yellow;
const REVEALED: Color = Color::White;
const HOVER: Color = Color::Red;

pub struct CellPaint {
    pub fill: Color,
    pub label: Option<u8>,
}

/// Picks a cell's fill and optional count label. Mines are always visible;
/// paint priority is hover over revealed over mine over hidden, and revealed
/// cells carry their count (zero included).
pub fn paint(game: &Game, coords: Coord2, hover: Coord2) -> CellPaint {
    let mut fill = HIDDEN;
    if game.board().contains_mine(coords) {
        fill = MINE;
    }

    let label = match game.cell_at(coords) {
        CellView::Revealed(count) => {
            fill = REVEALED;
            Some(count)
        }
        CellView::Hidden => None,
    };

    if coords == hover {
        fill = HOVER;
    }

    CellPaint { fill, label }
}
