use serde::{Deserialize, Serialize};

use crate::PLACEHOLDER;

/// What a clue's cell currently shows.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealState {
    Hidden,
    Question,
    Answer,
}

impl RevealState {
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Answer)
    }
}

impl Default for RevealState {
    fn default() -> Self {
        Self::Hidden
    }
}

/// Position of a cell on the board: column is the category, row is the clue.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ClueAddr {
    pub category: usize,
    pub clue: usize,
}

impl ClueAddr {
    pub const fn new(category: usize, clue: usize) -> Self {
        Self { category, clue }
    }
}

/// Display content of a single cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CellView<'a> {
    Placeholder,
    Question(&'a str),
    Answer(&'a str),
    /// The category ran out of clues before this row.
    Empty,
}

impl<'a> CellView<'a> {
    pub const fn text(self) -> &'a str {
        match self {
            Self::Placeholder => PLACEHOLDER,
            Self::Question(text) | Self::Answer(text) => text,
            Self::Empty => "",
        }
    }
}
