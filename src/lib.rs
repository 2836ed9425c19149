use wasm_bindgen::prelude::*;

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod moves;
pub mod types;

use crate::config::RuleConfig;
use crate::error::MoveError;
use crate::game::GameState;
use crate::types::Cell;

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}

/// One checkers session owned by the page. Each instance is independent.
#[wasm_bindgen]
pub struct CheckersGame {
    state: GameState,
}

#[wasm_bindgen]
impl CheckersGame {
    /// `options` is `undefined` or an object such as `{ forced_capture: true }`.
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<CheckersGame, JsError> {
        let config: RuleConfig = if options.is_undefined() || options.is_null() {
            RuleConfig::default()
        } else {
            serde_wasm_bindgen::from_value(options)?
        };
        Ok(Self {
            state: GameState::with_config(config),
        })
    }

    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Serialized `GameView`.
    pub fn state(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.state.to_game_view())?)
    }

    /// Array of `MoveCandidate` for the piece on `(row, col)`; empty for a no-op selection.
    pub fn legal_destinations(&self, row: u8, col: u8) -> Result<JsValue, JsError> {
        let cell = cell_from(row, col)?;
        Ok(serde_wasm_bindgen::to_value(
            &self.state.legal_destinations(cell),
        )?)
    }

    /// Serialized `MoveOutcome`. Throws when the move was not offered.
    pub fn move_to(
        &mut self,
        from_row: u8,
        from_col: u8,
        to_row: u8,
        to_col: u8,
    ) -> Result<JsValue, JsError> {
        let from = cell_from(from_row, from_col)?;
        let to = cell_from(to_row, to_col)?;
        let outcome = self.state.move_to(from, to)?;
        Ok(serde_wasm_bindgen::to_value(&outcome)?)
    }

    pub fn win_message(&self) -> Option<String> {
        self.state.win_message().map(str::to_string)
    }
}

fn cell_from(row: u8, col: u8) -> Result<Cell, MoveError> {
    Cell::new(row, col).ok_or(MoveError::OutOfRange { row, col })
}
