use wasm_bindgen::prelude::*;

use crate::game::GameInstance;
use crate::types::Move;

/// JavaScript handle to a game session.
#[wasm_bindgen]
pub struct WasmGame {
    inner: GameInstance,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(level: u8) -> WasmGame {
        Self {
            inner: GameInstance::new_with_default_selector(level),
        }
    }

    /// Current snapshot: `{ board, turn, allowedMoves, isGameOver, winner, status }`.
    pub fn state(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.inner.to_game_state())?)
    }

    #[wasm_bindgen(js_name = legalMoves)]
    pub fn legal_moves(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.inner.allowed_moves())?)
    }

    /// Plays `{ from, path, captures }` for the side to move.
    /// Resolves to `false` when the move is not allowed.
    #[wasm_bindgen(js_name = makeMove)]
    pub fn make_move(&mut self, mv: JsValue) -> Result<bool, JsValue> {
        let mv: Move = serde_wasm_bindgen::from_value(mv)?;
        Ok(self.inner.move_piece(&mv))
    }

    #[wasm_bindgen(js_name = aiMove)]
    pub fn ai_move(&mut self) -> bool {
        self.inner.do_ai_move().is_ok()
    }

    #[wasm_bindgen(js_name = suggestMove)]
    pub fn suggest_move(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.inner.suggest_move())?)
    }

    /// Search depth for `aiMove`, clamped to 1..=10.
    #[wasm_bindgen(js_name = setLevel)]
    pub fn set_level(&mut self, level: u8) {
        self.inner.set_level(level);
    }

    #[wasm_bindgen(js_name = isGameOver)]
    pub fn is_game_over(&self) -> bool {
        self.inner.is_game_over()
    }

    pub fn reset(&mut self) {
        self.inner.reset();
    }
}
