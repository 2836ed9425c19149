use crate::types::{Cell, Color, Piece, Rank};

const BOARD_SIZE: usize = 8;
const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// Checkers board represented by three bitboards.
/// A bit in `kings` is only meaningful together with a bit in `white` or `black`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    white: u64,
    black: u64,
    kings: u64,
}

impl Board {
    /// Creates the starting layout:
    /// black men on the dark squares of rows 0-2, white men on rows 5-7.
    pub fn new() -> Self {
        let mut black = 0u64;
        let mut white = 0u64;
        for pos in 0..NUM_SQUARES {
            let cell = pos_to_cell(pos);
            if !cell.is_playable() {
                continue;
            }
            if cell.row < 3 {
                black |= bit(pos);
            } else if cell.row > 4 {
                white |= bit(pos);
            }
        }
        Self {
            white,
            black,
            kings: 0,
        }
    }

    pub fn empty() -> Self {
        Self {
            white: 0,
            black: 0,
            kings: 0,
        }
    }

    /// Returns the piece on `cell`. Out-of-range cells read as empty.
    pub fn get(&self, cell: Cell) -> Option<Piece> {
        let square = cell_bit(cell);
        let color = if (self.white & square) != 0 {
            Color::White
        } else if (self.black & square) != 0 {
            Color::Black
        } else {
            return None;
        };
        let rank = if (self.kings & square) != 0 {
            Rank::King
        } else {
            Rank::Man
        };
        Some(Piece { color, rank })
    }

    /// Places `piece` on `cell`, or clears it when `piece` is `None`.
    pub fn set(&mut self, cell: Cell, piece: Option<Piece>) {
        debug_assert!(cell.row < 8 && cell.col < 8, "cell out of range: {cell}");
        let square = cell_bit(cell);
        self.white &= !square;
        self.black &= !square;
        self.kings &= !square;

        if let Some(piece) = piece {
            match piece.color {
                Color::White => self.white |= square,
                Color::Black => self.black |= square,
            }
            if piece.is_king() {
                self.kings |= square;
            }
        }
    }

    pub fn is_empty(&self, cell: Cell) -> bool {
        ((self.white | self.black) & cell_bit(cell)) == 0
    }

    pub fn piece_count(&self, color: Color) -> u8 {
        self.mask(color).count_ones() as u8
    }

    /// Cells holding a piece of `color`, in row-major order.
    pub fn cells_of(&self, color: Color) -> Vec<Cell> {
        let mut bits = self.mask(color);
        let mut out = Vec::with_capacity(bits.count_ones() as usize);
        while bits != 0 {
            out.push(pos_to_cell(bits.trailing_zeros() as usize));
            bits &= bits - 1;
        }
        out
    }

    /// Converts board to `[u8; 64]` where 0=empty, 1=white man, 2=white king,
    /// 3=black man, 4=black king.
    pub fn to_array(&self) -> [u8; NUM_SQUARES] {
        let mut board = [0u8; NUM_SQUARES];
        for (pos, code) in board.iter_mut().enumerate() {
            *code = match self.get(pos_to_cell(pos)) {
                None => 0,
                Some(Piece {
                    color: Color::White,
                    rank,
                }) => 1 + (rank == Rank::King) as u8,
                Some(Piece {
                    color: Color::Black,
                    rank,
                }) => 3 + (rank == Rank::King) as u8,
            };
        }
        board
    }

    fn mask(&self, color: Color) -> u64 {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

fn bit(pos: usize) -> u64 {
    if pos < NUM_SQUARES { 1u64 << pos } else { 0 }
}

fn cell_bit(cell: Cell) -> u64 {
    if cell.row as usize >= BOARD_SIZE || cell.col as usize >= BOARD_SIZE {
        return 0;
    }
    bit(cell.index())
}

fn pos_to_cell(pos: usize) -> Cell {
    Cell {
        row: (pos / BOARD_SIZE) as u8,
        col: (pos % BOARD_SIZE) as u8,
    }
}
