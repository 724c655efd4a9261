use rand::prelude::*;
use rand::rngs::SmallRng;

use super::*;

/// Each cell rolls a die with this many faces.
pub const MINE_ROLL_SIDES: u8 = 10;

/// The face that puts a mine on the cell.
pub const MINE_ROLL_FACE: u8 = 1;

/// Generation strategy where every cell independently holds a mine with probability
/// `1 / MINE_ROLL_SIDES`. Nothing guarantees a safe start or a solvable board.
#[derive(Clone, Debug)]
pub struct RandomMineGenerator<R> {
    rng: R,
}

impl<R: Rng> RandomMineGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomMineGenerator<SmallRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

#[cfg(feature = "std")]
impl RandomMineGenerator<rand::rngs::ThreadRng> {
    pub fn from_thread_rng() -> Self {
        Self::new(rand::rng())
    }
}

impl<R: Rng> MineGenerator for RandomMineGenerator<R> {
    fn generate(mut self, config: BoardConfig) -> MineLayout {
        let layout = MineLayout::from_fn(config, |_| {
            self.rng.random_range(0..MINE_ROLL_SIDES) == MINE_ROLL_FACE
        });

        if layout.mine_count() == 0 && config.total_cells() > 1 {
            log::warn!(
                "Generated {}x{} board without any mines",
                config.rows,
                config.columns
            );
        }
        log::debug!(
            "Generated {} mines on a {}x{} board",
            layout.mine_count(),
            config.rows,
            config.columns
        );
        layout
    }
}
