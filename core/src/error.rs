use thiserror::Error;

use crate::Coord2;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Coordinates {coords:?} are outside of a {}x{} board", .size.0, .size.1)]
    OutOfBounds { coords: Coord2, size: Coord2 },
    #[error("Board shape does not match its mine layout")]
    InvalidBoardShape,
}

pub type Result<T> = core::result::Result<T, BoardError>;
