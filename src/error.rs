use crate::types::{Cell, Color};

/// Rejected engine calls. The game state is left untouched whenever one is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("game is already over")]
    GameOver,

    #[error("no piece on {cell}")]
    EmptyCell { cell: Cell },

    #[error("piece on {cell} does not belong to {turn}, whose turn it is")]
    NotYourTurn { cell: Cell, turn: Color },

    #[error("illegal move from {from} to {to}")]
    IllegalMove { from: Cell, to: Cell },

    #[error("row/col out of range: ({row}, {col})")]
    OutOfRange { row: u8, col: u8 },
}
