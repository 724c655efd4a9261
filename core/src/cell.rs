use serde::{Deserialize, Serialize};

/// Player-visible state of a single cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    #[default]
    Hidden,
    Revealed,
    Flagged,
    Questioned,
}

impl CellState {
    /// Next state in the fixed `Hidden -> Revealed -> Flagged -> Questioned -> Hidden` cycle.
    pub const fn cycled(self) -> Self {
        use CellState::*;
        match self {
            Hidden => Revealed,
            Revealed => Flagged,
            Flagged => Questioned,
            Questioned => Hidden,
        }
    }

    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }

    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed)
    }

    pub const fn is_flagged(self) -> bool {
        matches!(self, Self::Flagged)
    }
}
