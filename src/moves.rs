//! Move generation and application on a bare [`Board`].
//!
//! Only single-hop captures exist; a turn always ends after one move.

use crate::board::Board;
use crate::error::MoveError;
use crate::types::{Cell, Color, MoveCandidate, Piece, Rank};

static KING_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Diagonal directions `piece` may step or jump in.
pub fn directions(piece: Piece) -> &'static [(i8, i8)] {
    match (piece.rank, piece.color) {
        (Rank::King, _) => &KING_DIRECTIONS,
        (Rank::Man, Color::White) => &KING_DIRECTIONS[..2],
        (Rank::Man, Color::Black) => &KING_DIRECTIONS[2..],
    }
}

/// Returns every destination of the piece on `from`, plain steps and captures mixed.
/// Returns an empty list when `from` is empty.
pub fn destinations(board: &Board, from: Cell) -> Vec<MoveCandidate> {
    let Some(piece) = board.get(from) else {
        return Vec::new();
    };

    let mut out = Vec::new();
    for &(dr, dc) in directions(piece) {
        let Some(adjacent) = from.offset(dr, dc) else {
            continue;
        };

        match board.get(adjacent) {
            None => out.push(MoveCandidate {
                from,
                to: adjacent,
                captured: None,
            }),
            Some(other) if other.color != piece.color => {
                if let Some(landing) = adjacent.offset(dr, dc)
                    && board.is_empty(landing)
                {
                    out.push(MoveCandidate {
                        from,
                        to: landing,
                        captured: Some(adjacent),
                    });
                }
            }
            Some(_) => {}
        }
    }
    out
}

/// Whether any piece of `color` has a capture available.
pub fn has_capture(board: &Board, color: Color) -> bool {
    board
        .cells_of(color)
        .into_iter()
        .any(|cell| destinations(board, cell).iter().any(MoveCandidate::is_capture))
}

/// Relocates the moving piece, removes the jumped piece and crowns a man
/// reaching its crowning row. Returns `(captured, promoted)`.
/// The board is untouched when `from` is empty, `to` is occupied, or the
/// jumped cell does not hold an opposing piece.
pub(crate) fn apply(
    board: &mut Board,
    candidate: &MoveCandidate,
) -> Result<(bool, bool), MoveError> {
    let mut piece = board.get(candidate.from).ok_or(MoveError::EmptyCell {
        cell: candidate.from,
    })?;
    let illegal = MoveError::IllegalMove {
        from: candidate.from,
        to: candidate.to,
    };
    if !board.is_empty(candidate.to) {
        return Err(illegal);
    }
    if let Some(cell) = candidate.captured {
        match board.get(cell) {
            Some(jumped) if jumped.color != piece.color => {}
            _ => return Err(illegal),
        }
    }

    board.set(candidate.from, None);
    if let Some(cell) = candidate.captured {
        board.set(cell, None);
    }

    let promoted = piece.rank == Rank::Man && candidate.to.row == piece.color.crowning_row();
    if promoted {
        piece.rank = Rank::King;
    }
    board.set(candidate.to, Some(piece));

    Ok((candidate.captured.is_some(), promoted))
}
