use ndarray::Array2;
use rand::prelude::*;

use super::*;

/// Purely random generation: every cell is an independent uniform trial
/// against the configured mine probability.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RandomBoardGenerator {
    seed: u64,
}

impl RandomBoardGenerator {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Seeds from system entropy, so boards differ from run to run.
    pub fn from_entropy() -> Self {
        Self::new(rand::rng().random())
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(self, config: GameConfig) -> Board {
        let size = config.size as usize;
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mines = Array2::from_shape_simple_fn((size, size), || {
            rng.random_range(0..100u8) < config.mine_percent
        });

        let board = Board::from_mine_mask(mines).expect("generated mask is square");
        log::debug!(
            "generated board with {} mines over {} cells (seed {})",
            board.mine_count(),
            config.total_cells(),
            self.seed
        );
        board
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_generates_the_same_board() {
        let config = GameConfig::new(8, 20).unwrap();

        let first = RandomBoardGenerator::new(42).generate(config);
        let second = RandomBoardGenerator::new(42).generate(config);

        assert_eq!(first, second);
    }

    #[test]
    fn zero_probability_places_no_mines() {
        let config = GameConfig::new(5, 0).unwrap();

        let board = RandomBoardGenerator::new(7).generate(config);

        assert_eq!(board.mine_count(), 0);
    }

    #[test]
    fn full_probability_fills_the_board() {
        let config = GameConfig::new(5, 100).unwrap();

        let board = RandomBoardGenerator::new(7).generate(config);

        assert_eq!(board.mine_count(), board.total_cells());
    }
}
