//! Rules engine for Minesweeper.
//!
//! A [`Board`] owns an immutable [`MineLayout`] and a grid of player-visible [`CellState`]s. It provides the
//! flood-fill reveal, the fixed state cycle used for flagging, and the queries a frontend needs to render a game
//! and decide when it is over. Rendering and input handling live outside of this crate.
//!
//! # Feature gates
//! - `std`: enables the thread-local RNG used by [`Board::new`] (**enabled by default**). Without it the crate is
//!   `no_std` and only needs `alloc`.
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use generator::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod generator;
mod types;

/// Board dimensions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub rows: Coord,
    pub columns: Coord,
}

impl BoardConfig {
    pub(crate) const fn new_unchecked(rows: Coord, columns: Coord) -> Self {
        Self { rows, columns }
    }

    /// Dimensions are clamped so that a board always has at least one cell.
    pub fn new(rows: Coord, columns: Coord) -> Self {
        Self::new_unchecked(rows.max(1), columns.max(1))
    }

    pub const fn size(&self) -> Coord2 {
        (self.rows, self.columns)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.rows, self.columns)
    }
}

/// Mine placement of a board, fixed once built.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MineLayoutRepr")]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl MineLayout {
    /// Builds a layout by asking `has_mine` about every cell of `config`.
    pub fn from_fn(config: BoardConfig, mut has_mine: impl FnMut(Coord2) -> bool) -> Self {
        let mine_mask = Array2::from_shape_fn(config.size().to_nd_index(), |(x, y)| {
            has_mine((x as Coord, y as Coord))
        });
        Self::from_mine_mask(mine_mask)
    }

    pub fn from_mine_coords(config: BoardConfig, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mine_mask: Array2<bool> = Array2::default(config.size().to_nd_index());

        for &coords in mine_coords {
            if coords.0 >= config.rows || coords.1 >= config.columns {
                return Err(BoardError::OutOfBounds {
                    coords,
                    size: config.size(),
                });
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Ok(Self::from_mine_mask(mine_mask))
    }

    fn from_mine_mask(mine_mask: Array2<bool>) -> Self {
        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count() as CellCount;
        Self {
            mine_mask,
            mine_count,
        }
    }

    pub fn config(&self) -> BoardConfig {
        let (rows, columns) = self.mine_mask.dim();
        BoardConfig::new_unchecked(rows as Coord, columns as Coord)
    }

    pub fn size(&self) -> Coord2 {
        self.config().size()
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(BoardError::OutOfBounds { coords, size })
        }
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }

    /// Number of mines among the neighbors of `coords`, or `0` when `coords` is a mine itself.
    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        if self[coords] {
            return 0;
        }
        self.iter_neighbors(coords).filter(|&pos| self[pos]).count() as u8
    }

    /// Coordinates of all mines, in row-major order.
    pub fn iter_mines(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.mine_mask
            .indexed_iter()
            .filter(|&(_, &is_mine)| is_mine)
            .map(|((x, y), _)| (x as Coord, y as Coord))
    }

    pub(crate) fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.mine_mask.iter_neighbors(coords)
    }
}

/// Wire shape of [`MineLayout`]. The mine count is always recomputed from the mask.
#[derive(Deserialize)]
struct MineLayoutRepr {
    mine_mask: Array2<bool>,
}

impl TryFrom<MineLayoutRepr> for MineLayout {
    type Error = BoardError;

    fn try_from(repr: MineLayoutRepr) -> Result<Self> {
        let (rows, columns) = repr.mine_mask.dim();
        let fits = |len: usize| (1..=usize::from(Coord::MAX)).contains(&len);
        if !fits(rows) || !fits(columns) {
            return Err(BoardError::InvalidBoardShape);
        }
        Ok(Self::from_mine_mask(repr.mine_mask))
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[coords.to_nd_index()]
    }
}
