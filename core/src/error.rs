use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Grid size must be at least 1")]
    InvalidSize,
    #[error("Mine probability must be at most 100 percent")]
    InvalidMinePercent,
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Mine mask does not form a square board")]
    InvalidBoardShape,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

pub type Result<T> = std::result::Result<T, GameError>;
