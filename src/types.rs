use std::fmt;

use serde::Serialize;

/// Side of the board. White moves first and advances toward row 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opponent(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row on which a man of this colour is crowned.
    pub fn crowning_row(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => f.write_str("white"),
            Color::Black => f.write_str("black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Rank {
    Man,
    King,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Piece {
    pub color: Color,
    pub rank: Rank,
}

impl Piece {
    pub const fn man(color: Color) -> Self {
        Self {
            color,
            rank: Rank::Man,
        }
    }

    pub const fn king(color: Color) -> Self {
        Self {
            color,
            rank: Rank::King,
        }
    }

    pub fn is_king(&self) -> bool {
        self.rank == Rank::King
    }
}

/// A board coordinate.
/// Contract: `row < 8 && col < 8`. Use [`Cell::new`] when the input is untrusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Cell {
    pub row: u8,
    pub col: u8,
}

impl Cell {
    pub fn new(row: u8, col: u8) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Returns the cell `(dr, dc)` away, or `None` when that falls off the board.
    pub fn offset(self, dr: i8, dc: i8) -> Option<Self> {
        let row = self.row as i16 + dr as i16;
        let col = self.col as i16 + dc as i16;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Dark squares, the only ones pieces ever stand on.
    pub fn is_playable(&self) -> bool {
        (self.row + self.col) % 2 == 1
    }

    pub(crate) fn index(&self) -> usize {
        self.row as usize * 8 + self.col as usize
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One legal destination for a selected piece.
/// Only valid for the position it was computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveCandidate {
    pub from: Cell,
    pub to: Cell,
    /// Cell of the jumped opponent piece when this is a capture.
    pub captured: Option<Cell>,
}

impl MoveCandidate {
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    InProgress,
    Won(Color),
}

/// What happened during a move, for the UI to react to (sounds, dialogs, reset).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MoveOutcome {
    pub captured: bool,
    pub promoted: bool,
    pub game_over: bool,
    pub winner: Option<Color>,
}

/// Public game snapshot returned from WASM APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    /// 64 codes in row-major order: 0=empty, 1=white man, 2=white king,
    /// 3=black man, 4=black king.
    pub board: Vec<u8>,
    pub turn: Color,
    pub status: GameStatus,
    pub white_count: u8,
    pub black_count: u8,
    pub turn_label: String,
    pub winner: Option<Color>,
}
