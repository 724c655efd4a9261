use alloc::collections::{BTreeSet, VecDeque};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RevealOutcome {
    NoChange,
    /// Number of cells that went from hidden to revealed.
    Revealed(CellCount),
    HitMine,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// A single game: the mine layout plus what the player has done to each cell.
///
/// Coordinates are `(x, y)` with `x < rows()` and `y < columns()`. Every method taking coordinates returns
/// [`BoardError::OutOfBounds`] for anything outside of that range.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BoardRepr")]
pub struct Board {
    mine_layout: MineLayout,
    states: Array2<CellState>,
}

#[derive(Deserialize)]
struct BoardRepr {
    mine_layout: MineLayout,
    states: Array2<CellState>,
}

impl TryFrom<BoardRepr> for Board {
    type Error = BoardError;

    fn try_from(repr: BoardRepr) -> Result<Self> {
        let (rows, columns) = repr.mine_layout.size();
        if repr.states.dim() != (rows.into(), columns.into()) {
            return Err(BoardError::InvalidBoardShape);
        }
        Ok(Self {
            mine_layout: repr.mine_layout,
            states: repr.states,
        })
    }
}

impl Board {
    /// Board with mines placed by the thread-local RNG.
    #[cfg(feature = "std")]
    pub fn new(rows: Coord, columns: Coord) -> Self {
        Self::generate(
            BoardConfig::new(rows, columns),
            RandomMineGenerator::from_thread_rng(),
        )
    }

    /// Same as [`Board::new`], but reproducible for a given `seed`.
    pub fn with_seed(rows: Coord, columns: Coord, seed: u64) -> Self {
        Self::generate(
            BoardConfig::new(rows, columns),
            RandomMineGenerator::seeded(seed),
        )
    }

    pub fn generate(config: BoardConfig, generator: impl MineGenerator) -> Self {
        Self::from_layout(generator.generate(config))
    }

    pub fn from_layout(mine_layout: MineLayout) -> Self {
        let size = mine_layout.size();
        log::debug!(
            "New {}x{} board with {} mines",
            size.0,
            size.1,
            mine_layout.mine_count()
        );
        Self {
            states: Array2::default(size.to_nd_index()),
            mine_layout,
        }
    }

    pub fn rows(&self) -> Coord {
        self.size().0
    }

    pub fn columns(&self) -> Coord {
        self.size().1
    }

    pub fn size(&self) -> Coord2 {
        self.mine_layout.size()
    }

    pub fn mine_layout(&self) -> &MineLayout {
        &self.mine_layout
    }

    pub fn cell_states(&self) -> &Array2<CellState> {
        &self.states
    }

    pub fn query_state(&self, coords: Coord2) -> Result<CellState> {
        let coords = self.mine_layout.validate_coords(coords)?;
        Ok(self.states[coords.to_nd_index()])
    }

    /// Moves the cell to the next state of its cycle, whatever state it is in, and returns that new state.
    pub fn cycle_state(&mut self, coords: Coord2) -> Result<CellState> {
        let coords = self.mine_layout.validate_coords(coords)?;
        let state = &mut self.states[coords.to_nd_index()];
        *state = state.cycled();
        Ok(*state)
    }

    /// Flood-fill reveal starting at `coords`.
    ///
    /// The starting cell is revealed if hidden. Expansion continues from every safe cell without adjacent mines
    /// into its hidden neighbors, so a connected empty region is opened together with its numbered border. A mine
    /// is only ever revealed when it is the starting cell, and the fill never expands from it.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.mine_layout.validate_coords(coords)?;

        let mut queued = BTreeSet::from([coords]);
        let mut to_visit = VecDeque::from([coords]);
        let mut revealed: CellCount = 0;
        let mut hit_mine = false;

        while let Some(visit_coords) = to_visit.pop_front() {
            let has_mine = self.mine_layout[visit_coords];
            let state = &mut self.states[visit_coords.to_nd_index()];
            if state.is_hidden() {
                *state = CellState::Revealed;
                revealed += 1;
                hit_mine |= has_mine;
            }

            if has_mine || self.mine_layout.adjacent_mine_count(visit_coords) != 0 {
                continue;
            }

            for pos in self.mine_layout.iter_neighbors(visit_coords) {
                if self.states[pos.to_nd_index()].is_hidden() && queued.insert(pos) {
                    log::trace!("Queue {:?} from {:?}", pos, visit_coords);
                    to_visit.push_back(pos);
                }
            }
        }

        log::trace!("Reveal at {:?} opened {} cells", coords, revealed);
        Ok(if hit_mine {
            RevealOutcome::HitMine
        } else if revealed > 0 {
            RevealOutcome::Revealed(revealed)
        } else {
            RevealOutcome::NoChange
        })
    }

    /// Mines around `coords`, `0` for a mine.
    pub fn adjacent_mine_count(&self, coords: Coord2) -> Result<u8> {
        let coords = self.mine_layout.validate_coords(coords)?;
        Ok(self.mine_layout.adjacent_mine_count(coords))
    }

    pub fn is_mine(&self, coords: Coord2) -> Result<bool> {
        let coords = self.mine_layout.validate_coords(coords)?;
        Ok(self.mine_layout.contains_mine(coords))
    }

    pub fn total_mine_count(&self) -> CellCount {
        self.mine_layout.mine_count()
    }

    /// Total mines minus the mines that carry a flag. Flags on safe cells are not counted.
    pub fn remaining_mine_count(&self) -> CellCount {
        let flagged_mines = self
            .mine_layout
            .iter_mines()
            .filter(|&coords| self.states[coords.to_nd_index()].is_flagged())
            .count() as CellCount;
        self.total_mine_count() - flagged_mines
    }

    /// Every mine is flagged. The state of safe cells does not matter.
    pub fn has_won(&self) -> bool {
        self.mine_layout
            .iter_mines()
            .all(|coords| self.states[coords.to_nd_index()].is_flagged())
    }

    pub fn has_lost(&self) -> bool {
        self.mine_layout
            .iter_mines()
            .any(|coords| self.states[coords.to_nd_index()].is_revealed())
    }

    pub fn status(&self) -> GameStatus {
        if self.has_lost() {
            GameStatus::Lost
        } else if self.has_won() {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }
}
