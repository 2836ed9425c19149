#![cfg(target_arch = "wasm32")]

use checkers::CheckersGame;
use js_sys::{Array, Object, Reflect};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

fn ok<T>(result: Result<T, wasm_bindgen::JsError>) -> T {
    result.unwrap_or_else(|_| panic!("call threw"))
}

fn field(value: &JsValue, name: &str) -> JsValue {
    Reflect::get(value, &JsValue::from_str(name)).unwrap()
}

#[wasm_bindgen_test]
fn new_game_starts_with_white() {
    let game = ok(CheckersGame::new(JsValue::UNDEFINED));
    let state = ok(game.state());

    assert_eq!(field(&state, "turn").as_string().as_deref(), Some("white"));
    assert_eq!(field(&state, "white_count").as_f64(), Some(12.0));
    assert_eq!(field(&state, "black_count").as_f64(), Some(12.0));
}

#[wasm_bindgen_test]
fn selection_and_move_round_trip_through_js() {
    let mut game = ok(CheckersGame::new(JsValue::NULL));

    let targets = Array::from(&ok(game.legal_destinations(5, 2)));
    assert_eq!(targets.length(), 2);
    assert_eq!(Array::from(&ok(game.legal_destinations(2, 1))).length(), 0);

    let outcome = ok(game.move_to(5, 2, 4, 3));
    assert_eq!(field(&outcome, "captured").as_bool(), Some(false));
    assert_eq!(field(&outcome, "game_over").as_bool(), Some(false));

    let state = ok(game.state());
    assert_eq!(field(&state, "turn").as_string().as_deref(), Some("black"));
}

#[wasm_bindgen_test]
fn rejected_moves_throw() {
    let mut game = ok(CheckersGame::new(JsValue::UNDEFINED));

    assert!(game.move_to(5, 2, 3, 2).is_err());
    assert!(game.legal_destinations(9, 0).is_err());
}

#[wasm_bindgen_test]
fn forced_capture_option_uses_snake_case_key() {
    let options = Object::new();
    Reflect::set(&options, &JsValue::from_str("forced_capture"), &JsValue::TRUE).unwrap();
    let mut game = ok(CheckersGame::new(options.into()));

    ok(game.move_to(5, 2, 4, 3));
    ok(game.move_to(2, 5, 3, 4));

    assert_eq!(Array::from(&ok(game.legal_destinations(4, 3))).length(), 1);
    assert_eq!(Array::from(&ok(game.legal_destinations(5, 0))).length(), 0);
}
