use crate::{Board, GameConfig};

pub use random::*;

mod random;

/// Strategy for producing the immutable board a game is played on.
pub trait BoardGenerator {
    fn generate(self, config: GameConfig) -> Board;
}
