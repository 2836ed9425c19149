use crate::board::Board;
use crate::config::RuleConfig;
use crate::error::MoveError;
use crate::moves;
use crate::types::{Cell, Color, GameStatus, GameView, MoveCandidate, MoveOutcome, Piece};

/// One game session: board, side to move and result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    turn: Color,
    status: GameStatus,
    config: RuleConfig,
}

impl GameState {
    pub fn new() -> Self {
        Self::with_config(RuleConfig::default())
    }

    pub fn with_config(config: RuleConfig) -> Self {
        Self {
            board: Board::new(),
            turn: Color::White,
            status: GameStatus::InProgress,
            config,
        }
    }

    /// Starts from a position reachable in play: at least one piece on the
    /// board, every piece on a playable cell, and no man left on its own
    /// crowning row. A side without pieces has already lost.
    pub fn from_board(board: Board, turn: Color, config: RuleConfig) -> Self {
        debug_assert!(
            board.piece_count(Color::White) + board.piece_count(Color::Black) > 0,
            "position has no pieces"
        );
        debug_assert!(
            [Color::White, Color::Black].into_iter().all(|color| {
                board.cells_of(color).into_iter().all(|cell| {
                    cell.is_playable()
                        && !(board.get(cell).is_some_and(|p| !p.is_king())
                            && cell.row == color.crowning_row())
                })
            }),
            "position is not reachable in play"
        );
        let status = if board.piece_count(turn) == 0 {
            GameStatus::Won(turn.opponent())
        } else if board.piece_count(turn.opponent()) == 0 {
            GameStatus::Won(turn)
        } else {
            GameStatus::InProgress
        };
        Self {
            board,
            turn,
            status,
            config,
        }
    }

    /// Back to the starting layout with White to move. The rule config is kept.
    pub fn reset(&mut self) {
        *self = Self::with_config(self.config);
        tracing::debug!("game reset");
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn config(&self) -> RuleConfig {
        self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn piece_at(&self, cell: Cell) -> Option<Piece> {
        self.board.get(cell)
    }

    pub fn piece_count(&self, color: Color) -> u8 {
        self.board.piece_count(color)
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.status, GameStatus::Won(_))
    }

    pub fn winner(&self) -> Option<Color> {
        match self.status {
            GameStatus::Won(color) => Some(color),
            GameStatus::InProgress => None,
        }
    }

    /// Where the piece on `cell` may go this turn.
    /// Empty when the game is over, the cell is empty, or the piece belongs to
    /// the side not on move. Never mutates the state.
    pub fn legal_destinations(&self, cell: Cell) -> Vec<MoveCandidate> {
        if self.is_game_over() {
            return Vec::new();
        }
        match self.board.get(cell) {
            Some(piece) if piece.color == self.turn => {}
            _ => return Vec::new(),
        }

        let candidates = moves::destinations(&self.board, cell);
        if self.config.forced_capture && moves::has_capture(&self.board, self.turn) {
            return candidates.into_iter().filter(MoveCandidate::is_capture).collect();
        }
        candidates
    }

    /// Applies `candidate`, which must be one of the current legal destinations.
    /// Nothing changes when an error is returned.
    pub fn apply_move(&mut self, candidate: &MoveCandidate) -> Result<MoveOutcome, MoveError> {
        if self.is_game_over() {
            return Err(MoveError::GameOver);
        }
        let piece = self
            .board
            .get(candidate.from)
            .ok_or(MoveError::EmptyCell {
                cell: candidate.from,
            })?;
        if piece.color != self.turn {
            return Err(MoveError::NotYourTurn {
                cell: candidate.from,
                turn: self.turn,
            });
        }
        if !self.legal_destinations(candidate.from).contains(candidate) {
            return Err(MoveError::IllegalMove {
                from: candidate.from,
                to: candidate.to,
            });
        }

        let mover = self.turn;
        let (captured, promoted) = moves::apply(&mut self.board, candidate)?;
        tracing::debug!(
            color = %mover,
            from = %candidate.from,
            to = %candidate.to,
            captured,
            promoted,
            "move applied"
        );

        let mut outcome = MoveOutcome {
            captured,
            promoted,
            ..MoveOutcome::default()
        };

        if self.board.piece_count(mover.opponent()) == 0 {
            self.status = GameStatus::Won(mover);
            outcome.game_over = true;
            outcome.winner = Some(mover);
            tracing::info!(winner = %mover, "game over");
        } else {
            self.switch_turn();
        }

        Ok(outcome)
    }

    /// Moves the piece on `from` to `to`, picking the matching candidate so the
    /// caller never has to carry the captured cell itself.
    pub fn move_to(&mut self, from: Cell, to: Cell) -> Result<MoveOutcome, MoveError> {
        if self.is_game_over() {
            return Err(MoveError::GameOver);
        }
        let candidate = self
            .legal_destinations(from)
            .into_iter()
            .find(|c| c.to == to);

        match candidate {
            Some(candidate) => self.apply_move(&candidate),
            None => {
                // Route through apply_move so empty/foreign cells report precisely.
                self.apply_move(&MoveCandidate {
                    from,
                    to,
                    captured: None,
                })
            }
        }
    }

    pub fn turn_label(&self) -> &'static str {
        match self.turn {
            Color::White => "Player 1's Turn (White)",
            Color::Black => "Player 2's Turn (Black)",
        }
    }

    pub fn win_message(&self) -> Option<&'static str> {
        self.winner().map(|color| match color {
            Color::White => "Player 1 (White) Wins!",
            Color::Black => "Player 2 (Black) Wins!",
        })
    }

    pub fn to_game_view(&self) -> GameView {
        GameView {
            board: self.board.to_array().to_vec(),
            turn: self.turn,
            status: self.status,
            white_count: self.board.piece_count(Color::White),
            black_count: self.board.piece_count(Color::Black),
            turn_label: self.turn_label().to_string(),
            winner: self.winner(),
        }
    }

    fn switch_turn(&mut self) {
        self.turn = self.turn.opponent();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
